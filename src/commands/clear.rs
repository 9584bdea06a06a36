use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::sound::Sound;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip both confirmation prompts
    #[arg(short, long)]
    yes: bool,
}

/// Removes every task and resets the id counter. Irreversible, so the
/// user confirms twice unless `--yes` was passed.
pub fn cmd(args: ClearArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let count = store.fetch()?.len();

    if count == 0 {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    if !args.yes {
        let theme = ColorfulTheme::default();
        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(Message::ConfirmClearAll(count).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        let confirmed = Confirm::with_theme(&theme)
            .with_prompt(Message::ConfirmClearAllFinal.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    store.clear()?;

    Sound::new(Preferences::read()?.sound_enabled).play_click();
    msg_success!(Message::AllTasksCleared);

    Ok(())
}
