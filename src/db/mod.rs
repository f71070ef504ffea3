//! Database layer for sked.
//!
//! A single SQLite table, `scheduler`, holds every task. This module owns the
//! connection to it and the operations over it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sked::db::tasks::Tasks;
//!
//! let tasks = Tasks::from_env();
//! tasks.ensure_schema()?;
//! for task in tasks.search("15.03.2024")? {
//!     println!("{} {}", task.date, task.title);
//! }
//! # Ok::<(), sked::db::error::StoreError>(())
//! ```

/// Connection provider: resolved location plus the guarded handle.
pub mod db;

/// Typed failures of every store operation.
pub mod error;

/// Schema bootstrap, CRUD and search over scheduled tasks.
pub mod tasks;
