use crate::libs::messages::Message;
use crate::libs::preferences::Preferences;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Show current preferences
    Show,
    /// Set the color theme
    Theme { theme: Theme },
    /// Enable or disable sound cues
    Sound { state: SoundState },
}

#[derive(Debug, Clone, ValueEnum)]
enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, ValueEnum)]
enum SoundState {
    On,
    Off,
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Theme { theme }) => handle_theme(theme),
        Some(ConfigCommand::Sound { state }) => handle_sound(state),
        Some(ConfigCommand::Show) | None => handle_show(),
    }
}

fn handle_show() -> Result<()> {
    let preferences = Preferences::read()?;

    msg_print!(Message::PreferencesHeader, true);
    msg_print!(Message::Custom(format!(
        "theme: {}",
        if preferences.dark_theme { "dark" } else { "light" }
    )));
    msg_print!(Message::Custom(format!(
        "sound: {}",
        if preferences.sound_enabled { "on" } else { "off" }
    )));
    msg_print!(Message::Custom(format!(
        "window: {}x{} at ({}, {})",
        preferences.window.width, preferences.window.height, preferences.window.x, preferences.window.y
    )));

    Ok(())
}

fn handle_theme(theme: Theme) -> Result<()> {
    let mut preferences = Preferences::read()?;
    preferences.dark_theme = matches!(theme, Theme::Dark);
    preferences.save()?;

    msg_success!(Message::ThemeSet(if preferences.dark_theme { "dark".into() } else { "light".into() }));
    Ok(())
}

fn handle_sound(state: SoundState) -> Result<()> {
    let mut preferences = Preferences::read()?;
    preferences.sound_enabled = matches!(state, SoundState::On);
    preferences.save()?;

    if preferences.sound_enabled {
        msg_success!(Message::SoundOn);
    } else {
        msg_success!(Message::SoundOff);
    }
    Ok(())
}
