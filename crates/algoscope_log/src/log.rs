//! The immutable step log of one algorithm run.
//!
//! A `StepLog` is produced by exactly one run over exactly one input and is
//! never mutated afterwards. It carries the algorithm category (so linear
//! reconstruction can route `Highlight` targets without scanning the log) and
//! the pre-run array snapshot the linear fold replays against.
//!
//! `to_bytes`/`from_bytes` use the canonical postcard encoding; two runs of
//! the same algorithm over the same input must encode to identical bytes, and
//! `digest` condenses that into a fingerprint the determinism tests compare.

use crate::cursor::Cursor;
use crate::event::{StepEvent, StepKind};
use algoscope_core::AlgorithmCategory;
use serde::{Deserialize, Serialize};

/// Step log error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// Byte decoding failed
    InvalidEncoding,
    /// Event indices are not the contiguous range `[0, len)`
    BrokenIndex {
        /// First log position whose event carries the wrong index
        position: usize,
    },
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEncoding => write!(f, "Invalid step log encoding"),
            Self::BrokenIndex { position } => {
                write!(f, "Broken step index at position {position}")
            }
        }
    }
}

impl std::error::Error for LogError {}

/// The complete ordered step sequence of one algorithm run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLog {
    category: AlgorithmCategory,
    initial_values: Vec<i64>,
    events: Vec<StepEvent>,
}

impl StepLog {
    /// Seal a log from recorded events; only the recorder calls this
    #[must_use]
    pub(crate) fn new(
        category: AlgorithmCategory,
        initial_values: Vec<i64>,
        events: Vec<StepEvent>,
    ) -> Self {
        Self {
            category,
            initial_values,
            events,
        }
    }

    /// The category of the algorithm that produced this log
    #[must_use]
    pub fn category(&self) -> AlgorithmCategory {
        self.category
    }

    /// The pre-run array snapshot; empty for graph runs
    #[must_use]
    pub fn initial_values(&self) -> &[i64] {
        &self.initial_values
    }

    /// All events, in emission order
    #[must_use]
    pub fn events(&self) -> &[StepEvent] {
        &self.events
    }

    /// Event at a log position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StepEvent> {
        self.events.get(index)
    }

    /// Number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log holds no events
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events a cursor position covers: `[0, cursor]` inclusive
    ///
    /// The cursor must satisfy `-1 <= position < len`; the transport layer
    /// clamps before handing a cursor down.
    #[must_use]
    pub fn prefix(&self, cursor: Cursor) -> &[StepEvent] {
        debug_assert!(cursor.position() >= -1);
        debug_assert!(cursor.prefix_len() <= self.len());
        &self.events[..self.len().min(cursor.prefix_len())]
    }

    /// Whether any event of the given kind exists anywhere in the log
    #[must_use]
    pub fn contains_kind(&self, kind: StepKind) -> bool {
        self.events.iter().any(|e| e.kind == kind)
    }

    /// Verify the index contiguity invariant
    ///
    /// # Errors
    ///
    /// Returns error naming the first offending position
    pub fn validate(&self) -> Result<(), LogError> {
        for (position, event) in self.events.iter().enumerate() {
            if event.index != position as u64 {
                return Err(LogError::BrokenIndex { position });
            }
        }
        Ok(())
    }

    /// Canonical byte encoding of the whole log
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // Postcard over plain data cannot fail.
        postcard::to_allocvec(self).unwrap_or_default()
    }

    /// Decode a log from its canonical byte encoding
    ///
    /// # Errors
    ///
    /// Returns error if the bytes are not a valid encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LogError> {
        postcard::from_bytes(bytes).map_err(|_| LogError::InvalidEncoding)
    }

    /// Fingerprint of the canonical encoding
    ///
    /// Two runs of the same algorithm over the same input yield equal digests.
    #[must_use]
    pub fn digest(&self) -> blake3::Hash {
        blake3::hash(&self.to_bytes())
    }

    /// Serialize to JSON, for session export and inspection
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
