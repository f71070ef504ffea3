use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Date as YYYYMMDD
    #[arg(value_parser = parse_date)]
    date: String,
    title: String,
    #[arg(short, long, default_value = "")]
    comment: String,
    /// Recurrence rule, stored as given
    #[arg(short, long, default_value = "")]
    repeat: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    id: i64,
    /// Date as YYYYMMDD
    #[arg(value_parser = parse_date)]
    date: String,
    title: String,
    #[arg(short, long, default_value = "")]
    comment: String,
    /// Recurrence rule, stored as given
    #[arg(short, long, default_value = "")]
    repeat: String,
}

#[derive(Debug, Args)]
pub struct RescheduleArgs {
    id: String,
    /// Date as YYYYMMDD
    #[arg(value_parser = parse_date)]
    date: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    id: String,
}

pub fn add(tasks: &Tasks, args: AddArgs) -> Result<()> {
    let id = tasks.insert(&args.date, &args.title, &args.comment, &args.repeat)?;
    msg_success!(Message::TaskCreated(id));

    Ok(())
}

pub fn edit(tasks: &Tasks, args: EditArgs) -> Result<()> {
    let task = Task::new(args.id, &args.date, &args.title, &args.comment, &args.repeat);
    match tasks.update(&task) {
        Ok(()) => msg_success!(Message::TaskUpdated(task.id)),
        Err(err) if err.is_not_found() => msg_bail_anyhow!(Message::TaskNotFound(task.id.to_string())),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

pub fn reschedule(tasks: &Tasks, args: RescheduleArgs) -> Result<()> {
    tasks.update_date(&args.id, &args.date)?;
    msg_success!(Message::TaskRescheduled(args.id, args.date));

    Ok(())
}

pub fn delete(tasks: &Tasks, args: DeleteArgs) -> Result<()> {
    tasks.delete(&args.id)?;
    msg_success!(Message::TaskDeleted(args.id));

    Ok(())
}

/// Accepts only `YYYYMMDD` strings naming a real calendar day.
fn parse_date(value: &str) -> Result<String, String> {
    let well_formed = value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit());
    let valid = well_formed && NaiveDate::parse_from_str(&format!("{}-{}-{}", &value[..4], &value[4..6], &value[6..]), "%Y-%m-%d").is_ok();

    if valid {
        Ok(value.to_string())
    } else {
        Err(format!("'{}' is not a date in YYYYMMDD form", value))
    }
}
