//! Storage location configuration.
//!
//! The database location is resolved exactly once, when a [`Config`] is built,
//! and then travels with the store instance. An environment override takes
//! precedence over the default file name baked in at build time from
//! `[package.metadata] default_db_file`.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use sked::libs::config::Config;
//!
//! // Honour TODO_DBFILE, fall back to the compiled-in default
//! let config = Config::from_env();
//! println!("Database: {}", config.db_path.display());
//! ```

use std::env;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Environment variable that overrides the database file location.
pub const DB_FILE_ENV: &str = "TODO_DBFILE";

/// Database file used when no override is supplied.
pub const DEFAULT_DB_FILE: &str = APP_METADATA_DEFAULT_DB_FILE;

/// Resolved store settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
}

impl Config {
    /// Builds a configuration for an already resolved database path.
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }

    /// Resolves the location from [`DB_FILE_ENV`], falling back to [`DEFAULT_DB_FILE`].
    ///
    /// Reads the environment once; later changes to the variable do not
    /// affect a configuration that has already been built.
    pub fn from_env() -> Self {
        let override_path = env::var(DB_FILE_ENV).ok();
        Self::new(resolve_location(override_path.as_deref()))
    }
}

/// Returns the override when it is non-empty, otherwise the default file name.
pub fn resolve_location(override_path: Option<&str>) -> PathBuf {
    match override_path {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DB_FILE),
    }
}
