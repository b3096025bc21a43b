//! Append-only trace recorder.
//!
//! The recorder is a dumb ordered buffer: it assigns indices, appends, and is
//! drained exactly once when the algorithm's control flow has terminated.
//! Draining consumes the recorder, so a second drain cannot compile, and no
//! recorded event can be removed or reordered.

use crate::event::{StepEvent, StepKind, StepTarget, StepValue};
use crate::log::StepLog;
use algoscope_core::AlgorithmCategory;

/// Append-only, auto-indexing step buffer
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    category: AlgorithmCategory,
    initial_values: Vec<i64>,
    events: Vec<StepEvent>,
}

impl TraceRecorder {
    /// Create a recorder for one algorithm run
    #[must_use]
    pub fn new(category: AlgorithmCategory) -> Self {
        Self {
            category,
            initial_values: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Snapshot the pre-run array the log will replay against
    #[must_use]
    pub fn with_initial_values(mut self, values: Vec<i64>) -> Self {
        self.initial_values = values;
        self
    }

    /// Append a step with no payload
    pub fn record(
        &mut self,
        kind: StepKind,
        targets: Vec<StepTarget>,
        description: impl Into<String>,
    ) {
        self.record_full(kind, targets, description, None, None);
    }

    /// Append a step carrying a payload
    pub fn record_valued(
        &mut self,
        kind: StepKind,
        targets: Vec<StepTarget>,
        description: impl Into<String>,
        value: StepValue,
    ) {
        self.record_full(kind, targets, description, Some(value), None);
    }

    /// Append a step with every optional field spelled out
    pub fn record_full(
        &mut self,
        kind: StepKind,
        targets: Vec<StepTarget>,
        description: impl Into<String>,
        value: Option<StepValue>,
        source_line_hint: Option<u32>,
    ) {
        let index = self.events.len() as u64;
        self.events.push(StepEvent {
            index,
            kind,
            targets,
            value,
            description: description.into(),
            source_line_hint,
        });
    }

    /// Number of steps recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consume the recorder and seal the accumulated log
    #[must_use]
    pub fn drain(self) -> StepLog {
        StepLog::new(self.category, self.initial_values, self.events)
    }
}
