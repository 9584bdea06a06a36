use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::sound::Sound;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Ids of the tasks to delete
    #[arg(required = true)]
    ids: Vec<i64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTasks(args.ids.len()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let deleted = Tasks::new()?.delete_many(&args.ids)?;

    Sound::new(Preferences::read()?.sound_enabled).play_click();
    msg_success!(Message::TasksDeletedCount(deleted));

    Ok(())
}
