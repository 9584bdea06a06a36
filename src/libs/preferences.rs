//! User preferences persisted between sessions.
//!
//! Window geometry, theme choice and the sound-enabled flag are stored as
//! a JSON file in the platform-specific application data directory,
//! independent of the task database. Missing or unreadable files fall
//! back to defaults so the application always starts.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Remembered size and position of the main window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            x: 100,
            y: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub window: WindowGeometry,
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,
}

fn default_sound_enabled() -> bool {
    true
}

impl Preferences {
    /// Loads preferences from disk, falling back to defaults when the
    /// file is missing or unparseable. A broken file is reported but
    /// never fatal.
    pub fn read() -> Result<Preferences> {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME)?;

        if !path.exists() {
            return Ok(Preferences::new());
        }

        let contents = fs::read_to_string(path)?;
        match serde_json::from_str(&contents) {
            Ok(preferences) => Ok(preferences),
            Err(_) => {
                msg_warning!(Message::PreferencesParseError);
                Ok(Preferences::new())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, &self)?;
        Ok(())
    }

    fn new() -> Self {
        Preferences {
            window: WindowGeometry::default(),
            dark_theme: false,
            sound_enabled: true,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new()
    }
}
