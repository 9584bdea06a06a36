use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the task to edit
    id: i64,
}

/// Interactive edit: prompts are pre-filled with the current values, and
/// nothing is written when neither field changed.
pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let task = tasks
        .get_by_id(args.id)?
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(args.id)))?;

    msg_print!(Message::EditingTask(task.title.clone()), true);

    let new_title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;

    let new_description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let description = if new_description.is_empty() { None } else { Some(new_description.clone()) };

    if new_title == task.title && description == task.description {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    tasks.update(args.id, &new_title, description.as_deref())?;
    msg_success!(Message::TaskUpdated(new_title));

    Ok(())
}
