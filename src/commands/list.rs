use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?.fetch()?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;

    Ok(())
}
