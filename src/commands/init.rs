use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd(tasks: &Tasks) -> Result<()> {
    tasks.ensure_schema()?;
    msg_success!(Message::DatabaseReady(tasks.path().display().to_string()));

    Ok(())
}
