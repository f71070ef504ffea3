use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::SEARCH_LIMIT;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Date as DD.MM.YYYY, or text to look for in title and comment
    #[arg(default_value = "")]
    query: String,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(required = true)]
    id: String,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(tasks: &Tasks, args: SearchArgs) -> Result<()> {
    let found = tasks.search(&args.query)?;

    if args.json {
        msg_print!(serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        msg_info!(Message::TasksNotFound(args.query));
        return Ok(());
    }

    View::tasks(&found);
    if found.len() == SEARCH_LIMIT {
        msg_warning!(Message::SearchLimitReached(SEARCH_LIMIT));
    }

    Ok(())
}

pub fn show(tasks: &Tasks, args: ShowArgs) -> Result<()> {
    let task = match tasks.get_by_id(&args.id) {
        Ok(task) => task,
        Err(err) if err.is_not_found() => msg_bail_anyhow!(Message::TaskNotFound(args.id)),
        Err(err) => return Err(err.into()),
    };

    if args.json {
        msg_print!(serde_json::to_string_pretty(&task)?);
    } else {
        View::tasks(std::slice::from_ref(&task));
    }

    Ok(())
}
