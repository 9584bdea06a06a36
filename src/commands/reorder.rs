use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::sound::Sound;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReorderArgs {
    /// Id of the task to move
    id: i64,
    /// Target position in the list, starting at 1
    position: usize,
}

/// Moves one task to a new position.
///
/// The store's reorder contract takes the whole collection in its new
/// order, so this command rebuilds the full list around the moved task
/// and hands it over in one call. A failure mid-write rolls back and the
/// previous order survives.
pub fn cmd(args: ReorderArgs) -> Result<()> {
    let mut store = Tasks::new()?;
    let mut tasks = store.fetch()?;

    let Some(from) = tasks.iter().position(|t| t.id == Some(args.id)) else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    };

    let task = tasks.remove(from);
    let to = args.position.clamp(1, tasks.len() + 1) - 1;
    tasks.insert(to, task);

    store.reorder(&tasks)?;

    Sound::new(Preferences::read()?.sound_enabled).play_click();
    msg_success!(Message::TasksReordered(tasks.len()));

    Ok(())
}
