/// User-facing messages printed by the `sked` command-line tool.
///
/// Text lives in the `Display` implementation; variants carry only the
/// values that get interpolated.
#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DatabaseReady(String),    // path
    DatabaseLocation(String), // path

    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskRescheduled(String, String), // id, date
    TaskDeleted(String),
    TaskNotFound(String),
    TasksNotFound(String), // query
    SearchLimitReached(usize),

    // === ERROR MESSAGES ===
    CommandFailed(String), // error chain
}
