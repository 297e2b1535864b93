//! Runtime settings
//!
//! Frame pacing and audio preferences, adjusted live from the keyboard.
//! Never persisted; every run starts from the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default simulation/display rate
pub const DEFAULT_FPS: u32 = 30;
/// Halving the rate stops here
pub const MIN_FPS: u32 = 15;
/// Doubling past this enters uncapped max mode
pub const MAX_FPS: u32 = 120;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settings {
    /// Target frames per second (ignored in max mode)
    pub fps: u32,
    /// Uncapped pacing: tick as fast as the terminal allows
    pub max_mode: bool,
    /// Audio cues on paddle hits and scores
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            max_mode: false,
            sound: false,
        }
    }
}

impl Settings {
    /// Time budget per frame, or `None` when uncapped
    pub fn frame_duration(&self) -> Option<Duration> {
        if self.max_mode {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / self.fps as f64))
        }
    }

    /// Double the frame rate; past the cap, switch to max mode
    pub fn raise_rate(&mut self) {
        if self.max_mode {
            return;
        }
        if self.fps >= MAX_FPS {
            self.max_mode = true;
        } else {
            self.fps = (self.fps * 2).min(MAX_FPS);
        }
    }

    /// Halve the frame rate; max mode drops back to the cap first
    pub fn lower_rate(&mut self) {
        if self.max_mode {
            self.max_mode = false;
            self.fps = MAX_FPS;
        } else if self.fps / 2 >= MIN_FPS {
            self.fps /= 2;
        }
    }
}
