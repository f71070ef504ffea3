//! Error taxonomy for the task store.
//!
//! Every driver failure is wrapped in a variant naming the operation that
//! failed, with a stable human-readable prefix. `NotFound` is the one
//! distinguished signal callers are expected to match on separately.

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database file could not be opened.
    #[error("can't open database: {0}")]
    Connection(#[source] rusqlite::Error),

    /// The `scheduler` table or its index could not be created.
    #[error("can't create table: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("can't insert task: {0}")]
    Insert(#[source] rusqlite::Error),

    /// The search statement could not be prepared or stepped.
    #[error("can't get tasks: {0}")]
    Search(#[source] rusqlite::Error),

    /// A `DD.MM.YYYY` shaped query that is not a real calendar date.
    #[error("error while parsing date: {0}")]
    SearchDate(#[source] chrono::ParseError),

    /// A search row could not be decoded into a task.
    #[error("can't scan task: {0}")]
    Scan(#[source] rusqlite::Error),

    #[error("can't get task: {0}")]
    Query(#[source] rusqlite::Error),

    #[error("can't update task: {0}")]
    Update(#[source] rusqlite::Error),

    #[error("can't delete task: {0}")]
    Delete(#[source] rusqlite::Error),

    /// No row carries the requested id.
    #[error("task not found")]
    NotFound,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }

    /// True for the search family: statement failures and bad date queries.
    pub fn is_search(&self) -> bool {
        matches!(self, StoreError::Search(_) | StoreError::SearchDate(_))
    }
}
