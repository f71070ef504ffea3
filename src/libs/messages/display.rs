//! Display implementation for sked messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DatabaseReady(path) => format!("Database is ready: {}", path),
            Message::DatabaseLocation(path) => format!("Using database {}", path),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskRescheduled(id, date) => format!("Task #{} moved to {}", id, date),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TasksNotFound(query) if query.is_empty() => "No tasks scheduled".to_string(),
            Message::TasksNotFound(query) => format!("No tasks match '{}'", query),
            Message::SearchLimitReached(limit) => format!("Showing the first {} tasks only, refine the query to see others", limit),

            // === ERROR MESSAGES ===
            Message::CommandFailed(error) => format!("Command failed: {}", error),
        };

        write!(f, "{}", text)
    }
}
