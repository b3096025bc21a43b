//! Playback cursor state machine.
//!
//! One cursor, one play flag, one speed multiplier. "Finished" is the cursor
//! sitting on the last index with auto-play off, not a distinct state.
//! Loading a new log always resets the cursor to before-first and stops
//! auto-play, so a stale timer can never advance a cursor against a log it
//! no longer matches.

use algoscope_log::Cursor;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Base inter-step delay at speed 1.0
pub const BASE_DELAY_MS: u64 = 500;

/// Delay floor regardless of speed
pub const MIN_DELAY_MS: u64 = 20;

/// Playback cursor transport over one step log
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playback {
    cursor: Cursor,
    log_len: usize,
    playing: bool,
    speed: f64,
}

impl Playback {
    /// Create a transport with no log attached
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: Cursor::before_first(),
            log_len: 0,
            playing: false,
            speed: 1.0,
        }
    }

    /// Attach a log of `len` events: cursor to before-first, auto-play off
    pub fn load(&mut self, len: usize) {
        self.log_len = len;
        self.cursor.reset();
        self.playing = false;
    }

    /// Current cursor
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Length of the attached log
    #[must_use]
    pub const fn log_len(&self) -> usize {
        self.log_len
    }

    /// Whether auto-play is on
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current speed multiplier
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the cursor sits on the last step
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.cursor.at_end(self.log_len)
    }

    /// Advance one step; at the last index this is a no-op that also stops
    /// auto-play
    pub fn step_forward(&mut self) {
        if !self.cursor.advance(self.log_len) {
            self.playing = false;
        }
    }

    /// Retreat one step; no-op at before-first
    pub fn step_backward(&mut self) {
        self.cursor.retreat();
    }

    /// Jump to a position, clamped into `[-1, len - 1]`
    pub fn seek(&mut self, position: i64) {
        self.cursor.seek(position, self.log_len);
    }

    /// Flip auto-play
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Set the speed multiplier; non-positive values are ignored
    pub fn set_speed(&mut self, speed: f64) {
        if speed > 0.0 {
            self.speed = speed;
        }
    }

    /// Inter-step delay at the current speed: `max(floor, base / speed)`
    #[must_use]
    pub fn delay(&self) -> Duration {
        let ms = (BASE_DELAY_MS as f64 / self.speed).floor() as u64;
        Duration::from_millis(ms.max(MIN_DELAY_MS))
    }
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}
