use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::libs::sound::Sound;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompted for when omitted
    title: Option<String>,
    /// Optional description
    #[arg(short, long)]
    description: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let title = match args.title {
        Some(title) => title,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskTitle.to_string())
            .interact_text()?,
    };

    let task = Task::new(&title, args.description.as_deref());
    Tasks::new()?.insert(&task)?;

    Sound::new(Preferences::read()?.sound_enabled).play_click();
    msg_success!(Message::TaskCreated(title));

    Ok(())
}
