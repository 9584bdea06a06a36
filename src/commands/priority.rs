use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::sound::Sound;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PriorityArgs {
    /// New priority, 1 (lowest) to 4 (highest)
    priority: i32,
    /// Ids of the tasks to update
    #[arg(required = true)]
    ids: Vec<i64>,
}

pub fn cmd(args: PriorityArgs) -> Result<()> {
    // Range validation happens in the store; an out-of-range value
    // surfaces here and leaves every task untouched.
    let affected = Tasks::new()?.set_priority(&args.ids, args.priority)?;

    Sound::new(Preferences::read()?.sound_enabled).play_click();
    msg_success!(Message::PriorityUpdatedCount(affected, args.priority));

    Ok(())
}
