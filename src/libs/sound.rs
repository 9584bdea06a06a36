//! Audible feedback for user interactions.
//!
//! Fire-and-forget: callers never branch on the result of a cue, and a
//! failure to emit one is logged and swallowed. Cues respect the
//! sound-enabled preference and degrade to the terminal bell, which is
//! the closest portable equivalent of a system event sound.

use crate::msg_debug;
use std::io::{self, Write};

pub struct Sound {
    enabled: bool,
}

impl Sound {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Short cue for a generic interaction (add, delete, reorder).
    pub fn play_click(&self) {
        self.bell(1);
        msg_debug!("Played click cue");
    }

    /// Cue for toggling a task's completion state.
    pub fn play_complete(&self) {
        self.bell(2);
        msg_debug!("Played completion cue");
    }

    fn bell(&self, count: usize) {
        if !self.enabled {
            return;
        }

        let mut stdout = io::stdout();
        for _ in 0..count {
            // BEL; ignore write failures, a missed cue is not an error
            let _ = stdout.write_all(b"\x07");
        }
        let _ = stdout.flush();
    }
}
