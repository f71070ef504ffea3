pub mod init;
pub mod search;
pub mod task;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the task database if it does not exist yet")]
    Init,
    #[command(about = "Schedule a new task", arg_required_else_help = true)]
    Add(task::AddArgs),
    #[command(about = "Search tasks by date (DD.MM.YYYY) or by text")]
    Search(search::SearchArgs),
    #[command(about = "Show a single task", arg_required_else_help = true)]
    Show(search::ShowArgs),
    #[command(about = "Overwrite date, title, comment and repeat of a task", arg_required_else_help = true)]
    Edit(task::EditArgs),
    #[command(about = "Move a task to another date", arg_required_else_help = true)]
    Reschedule(task::RescheduleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(task::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Database file, overrides TODO_DBFILE
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = match &cli.db {
            Some(path) => Config::new(path),
            None => Config::from_env(),
        };
        msg_debug!(Message::DatabaseLocation(config.db_path.display().to_string()));

        let tasks = Tasks::new(&config);
        match cli.command {
            Commands::Init => init::cmd(&tasks),
            Commands::Add(args) => task::add(&tasks, args),
            Commands::Search(args) => search::cmd(&tasks, args),
            Commands::Show(args) => search::show(&tasks, args),
            Commands::Edit(args) => task::edit(&tasks, args),
            Commands::Reschedule(args) => task::reschedule(&tasks, args),
            Commands::Delete(args) => task::delete(&tasks, args),
        }
    }
}
