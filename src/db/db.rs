use super::error::{Result, StoreError};
use crate::libs::config::Config;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Connection provider for the task database.
///
/// Holds the resolved location and a single long-lived handle that is opened
/// lazily on first use. Access goes through [`Db::with_conn`], which keeps the
/// handle locked only for the duration of one operation.
pub struct Db {
    path: PathBuf,
    conn: Mutex<Option<Connection>>,
}

impl Db {
    pub fn new(config: &Config) -> Db {
        Db {
            path: config.db_path.clone(),
            conn: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the database file is already present on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Runs `f` with exclusive access to the connection.
    ///
    /// The lock is released on every exit path, including when `f` fails.
    /// A failed open leaves the slot empty so the next call retries it.
    pub fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut slot = self.conn.lock();
        let conn = match slot.take() {
            Some(conn) => conn,
            None => self.open()?,
        };
        let conn = slot.insert(conn);

        f(conn)
    }

    fn open(&self) -> Result<Connection> {
        debug!(path = %self.path.display(), "opening task database");
        Connection::open(&self.path).map_err(StoreError::Connection)
    }
}
