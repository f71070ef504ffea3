//! # Sked - scheduled task storage
//!
//! The persistence layer of a task scheduler: one embedded SQLite table of
//! dated tasks with create, read, update, delete and search.
//!
//! ## Features
//!
//! - **Schema Bootstrap**: Idempotent creation of the `scheduler` table
//! - **Task CRUD**: Insert, look up, overwrite, reschedule and delete tasks
//! - **Dual-Mode Search**: Exact `DD.MM.YYYY` date match or title/comment substring
//! - **Typed Errors**: A distinguished not-found signal apart from driver failures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sked::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
