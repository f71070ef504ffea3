//! Task repository over the `scheduler` table.
//!
//! Each method is one unit of work against the shared handle held by [`Db`];
//! there are no transactions spanning calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sked::db::tasks::Tasks;
//! use sked::libs::config::Config;
//!
//! let tasks = Tasks::new(&Config::new("scheduler.db"));
//! tasks.ensure_schema()?;
//! let id = tasks.insert("20240101", "Pay bills", "", "")?;
//! let task = tasks.get_by_id(&id.to_string())?;
//! # Ok::<(), sked::db::error::StoreError>(())
//! ```

use super::db::Db;
use super::error::{Result, StoreError};
use crate::libs::config::Config;
use crate::libs::task::{like_pattern, Task, TaskFilter, SEARCH_LIMIT};
use rusqlite::{named_params, Connection, OptionalExtension, Params, Row};
use std::path::Path;
use tracing::debug;

const SCHEMA_SCHEDULER: &str = "
CREATE TABLE scheduler (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    title TEXT NOT NULL,
    comment TEXT,
    repeat TEXT
);
CREATE INDEX idx_date ON scheduler(date);
";
const INSERT_TASK: &str = "INSERT INTO scheduler (date, title, comment, repeat) VALUES (:date, :title, :comment, :repeat)";
const SELECT_TASKS: &str = "SELECT id, date, title, comment, repeat FROM scheduler";
const WHERE_DATE: &str = "WHERE date = :date";
const WHERE_TEXT: &str = "WHERE title LIKE :search ESCAPE '\\' OR comment LIKE :search ESCAPE '\\'";
const WHERE_ID: &str = "WHERE id = :id";
const ORDER_LIMIT: &str = "ORDER BY date ASC LIMIT :limit";
const UPDATE_TASK: &str = "UPDATE scheduler SET date = :date, title = :title, comment = :comment, repeat = :repeat WHERE id = :id";
const UPDATE_TASK_DATE: &str = "UPDATE scheduler SET date = :date WHERE id = :id";
const DELETE_TASK: &str = "DELETE FROM scheduler WHERE id = :id";

/// Ids arrive as the raw strings the calling layer received; the INTEGER
/// affinity of `id` converts numeric text for the comparison, and anything
/// else matches no row.
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new(config: &Config) -> Tasks {
        Tasks { db: Db::new(config) }
    }

    /// Store at the location named by `TODO_DBFILE`, or the default file.
    pub fn from_env() -> Tasks {
        Tasks::new(&Config::from_env())
    }

    pub fn path(&self) -> &Path {
        self.db.path()
    }

    /// Installs the table and its date index unless the database file exists.
    ///
    /// An existing file is trusted as-is; its contents are neither read nor
    /// verified.
    pub fn ensure_schema(&self) -> Result<()> {
        if self.db.exists() {
            debug!(path = %self.db.path().display(), "database exists, skipping schema");
            return Ok(());
        }

        self.db.with_conn(|conn| conn.execute_batch(SCHEMA_SCHEDULER).map_err(StoreError::Schema))
    }

    /// Inserts a task and returns the id assigned to it.
    ///
    /// Values are stored as given; validating them is the caller's job.
    pub fn insert(&self, date: &str, title: &str, comment: &str, repeat: &str) -> Result<i64> {
        self.db.with_conn(|conn| {
            conn.execute(
                INSERT_TASK,
                named_params! {
                    ":date": date,
                    ":title": title,
                    ":comment": comment,
                    ":repeat": repeat,
                },
            )
            .map_err(StoreError::Insert)?;

            Ok(conn.last_insert_rowid())
        })
    }

    /// Returns at most [`SEARCH_LIMIT`] tasks ordered by date.
    ///
    /// A `DD.MM.YYYY` query selects tasks on that exact date; any other query
    /// is matched as a substring of title or comment. An empty query matches
    /// every task.
    pub fn search(&self, query: &str) -> Result<Vec<Task>> {
        let filter = TaskFilter::parse(query).map_err(StoreError::SearchDate)?;
        debug!(?filter, "searching tasks");

        self.db.with_conn(|conn| match &filter {
            TaskFilter::Date(date) => fetch(
                conn,
                &format!("{} {} {}", SELECT_TASKS, WHERE_DATE, ORDER_LIMIT),
                named_params! { ":date": date, ":limit": SEARCH_LIMIT as i64 },
            ),
            TaskFilter::Text(text) => fetch(
                conn,
                &format!("{} {} {}", SELECT_TASKS, WHERE_TEXT, ORDER_LIMIT),
                named_params! { ":search": like_pattern(text), ":limit": SEARCH_LIMIT as i64 },
            ),
        })
    }

    /// Looks up a single task.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] when no row has this id, [`StoreError::Query`]
    /// for anything else.
    pub fn get_by_id(&self, id: &str) -> Result<Task> {
        self.db.with_conn(|conn| {
            conn.query_row(
                &format!("{} {}", SELECT_TASKS, WHERE_ID),
                named_params! { ":id": id },
                task_from_row,
            )
            .optional()
            .map_err(StoreError::Query)?
            .ok_or(StoreError::NotFound)
        })
    }

    /// Overwrites date, title, comment and repeat of an existing task.
    ///
    /// The write and the existence check are one statement: zero affected
    /// rows means the id is unknown and nothing was changed.
    pub fn update(&self, task: &Task) -> Result<()> {
        let affected = self.db.with_conn(|conn| {
            conn.execute(
                UPDATE_TASK,
                named_params! {
                    ":id": task.id,
                    ":date": task.date,
                    ":title": task.title,
                    ":comment": task.comment,
                    ":repeat": task.repeat,
                },
            )
            .map_err(StoreError::Update)
        })?;

        if affected == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    /// Moves a task to another date. An unknown id is a silent no-op.
    pub fn update_date(&self, id: &str, date: &str) -> Result<()> {
        let affected = self.db.with_conn(|conn| {
            conn.execute(UPDATE_TASK_DATE, named_params! { ":id": id, ":date": date })
                .map_err(StoreError::Update)
        })?;
        debug!(id, date, affected, "rescheduled task");

        Ok(())
    }

    /// Deletes a task. Deleting an unknown id succeeds.
    pub fn delete(&self, id: &str) -> Result<()> {
        let affected = self
            .db
            .with_conn(|conn| conn.execute(DELETE_TASK, named_params! { ":id": id }).map_err(StoreError::Delete))?;
        debug!(id, affected, "deleted task");

        Ok(())
    }
}

fn fetch<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<Task>> {
    let mut stmt = conn.prepare(sql).map_err(StoreError::Search)?;
    let mut rows = stmt.query(params).map_err(StoreError::Search)?;

    let mut tasks = Vec::with_capacity(SEARCH_LIMIT);
    while let Some(row) = rows.next().map_err(StoreError::Search)? {
        tasks.push(task_from_row(row).map_err(StoreError::Scan)?);
    }

    Ok(tasks)
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        date: row.get("date")?,
        title: row.get("title")?,
        comment: row.get::<_, Option<String>>("comment")?.unwrap_or_default(),
        repeat: row.get::<_, Option<String>>("repeat")?.unwrap_or_default(),
    })
}
