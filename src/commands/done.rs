use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::sound::Sound;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Ids of the tasks to mark
    #[arg(required = true)]
    ids: Vec<i64>,
    /// Mark the tasks active again instead of completed
    #[arg(long)]
    undo: bool,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let completed = !args.undo;
    let affected = Tasks::new()?.set_completed(&args.ids, completed)?;

    Sound::new(Preferences::read()?.sound_enabled).play_complete();
    if completed {
        msg_success!(Message::TasksCompletedCount(affected));
    } else {
        msg_success!(Message::TasksReopenedCount(affected));
    }

    Ok(())
}
