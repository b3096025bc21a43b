//! Cursor addressing a replay position in a step log.
//!
//! Position `-1` means "before any step": nothing folded, initial state.
//! Position `i >= 0` means events `[0, i]` have been applied. The cursor is a
//! plain value; the playback transport owns the one that drives a session.

use serde::{Deserialize, Serialize};

/// Replay position in a step log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cursor {
    position: i64,
}

impl Cursor {
    /// The position before any step
    pub const BEFORE_FIRST: Self = Self { position: -1 };

    /// Cursor before any step
    #[must_use]
    pub const fn before_first() -> Self {
        Self::BEFORE_FIRST
    }

    /// Cursor at a concrete step index
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self {
            position: index as i64,
        }
    }

    /// Current position, `-1` or a step index
    #[must_use]
    pub const fn position(&self) -> i64 {
        self.position
    }

    /// Number of events the fold covers: `position + 1`
    #[must_use]
    pub const fn prefix_len(&self) -> usize {
        if self.position < 0 {
            0
        } else {
            self.position as usize + 1
        }
    }

    /// Whether the cursor sits on the last step of a log of `len` events
    #[must_use]
    pub const fn at_end(&self, len: usize) -> bool {
        len > 0 && self.position == len as i64 - 1
    }

    /// Advance one step; returns false (and stays put) at the last index
    pub fn advance(&mut self, len: usize) -> bool {
        if self.position + 1 < len as i64 {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one step; returns false (and stays put) at `-1`
    pub fn retreat(&mut self) -> bool {
        if self.position > -1 {
            self.position -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a position, clamped into `[-1, len - 1]`
    pub fn seek(&mut self, position: i64, len: usize) {
        self.position = position.clamp(-1, len as i64 - 1);
    }

    /// Return to the before-first position
    pub fn reset(&mut self) {
        self.position = -1;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::BEFORE_FIRST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_default_is_before_first() {
        let cursor = Cursor::default();
        assert_eq!(cursor.position(), -1);
        assert_eq!(cursor.prefix_len(), 0);
    }

    #[test]
    fn test_advance_and_bound() {
        let mut cursor = Cursor::before_first();
        assert!(cursor.advance(2));
        assert!(cursor.advance(2));
        assert_eq!(cursor.position(), 1);
        assert!(!cursor.advance(2));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_advance_empty_log() {
        let mut cursor = Cursor::before_first();
        assert!(!cursor.advance(0));
        assert_eq!(cursor.position(), -1);
    }

    #[test]
    fn test_retreat_and_bound() {
        let mut cursor = Cursor::at(1);
        assert!(cursor.retreat());
        assert!(cursor.retreat());
        assert_eq!(cursor.position(), -1);
        assert!(!cursor.retreat());
        assert_eq!(cursor.position(), -1);
    }

    #[test]
    fn test_seek_clamps() {
        let mut cursor = Cursor::before_first();
        cursor.seek(100, 5);
        assert_eq!(cursor.position(), 4);
        cursor.seek(-37, 5);
        assert_eq!(cursor.position(), -1);
        cursor.seek(2, 5);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_at_end() {
        assert!(Cursor::at(4).at_end(5));
        assert!(!Cursor::at(3).at_end(5));
        assert!(!Cursor::before_first().at_end(0));
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(Cursor::before_first().prefix_len(), 0);
        assert_eq!(Cursor::at(0).prefix_len(), 1);
        assert_eq!(Cursor::at(9).prefix_len(), 10);
    }

    #[test]
    fn test_reset() {
        let mut cursor = Cursor::at(7);
        cursor.reset();
        assert_eq!(cursor, Cursor::before_first());
    }
}
