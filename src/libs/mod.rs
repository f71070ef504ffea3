//! Supporting modules for the sked store and command-line tool.
//!
//! - **Configuration**: database location resolution
//! - **Task model**: the `Task` record and search-mode detection
//! - **Messages**: user-facing text and output macros
//! - **View**: terminal tables

pub mod config;
pub mod messages;
pub mod task;
pub mod view;
