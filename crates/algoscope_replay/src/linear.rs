//! Linear (array) state reconstruction for sorting and search logs.

use algoscope_core::AlgorithmCategory;
use algoscope_log::{Cursor, StepKind, StepLog, StepValue};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Observable array state at one cursor position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearState {
    /// Current working-array contents
    pub values: Vec<i64>,
    /// Indices implicated in the cursor step only
    pub active_indices: IndexSet<usize>,
    /// Current pivot, if a sort designated one
    pub pivot_index: Option<usize>,
    /// Indices settled into sorted position; cumulative
    pub sorted_indices: IndexSet<usize>,
    /// Indices eliminated from a search; cumulative
    pub discarded_indices: IndexSet<usize>,
    /// Index a search located its target at
    pub found_index: Option<usize>,
}

impl LinearState {
    fn initial(log: &StepLog) -> Self {
        Self {
            values: log.initial_values().to_vec(),
            active_indices: IndexSet::new(),
            pivot_index: None,
            sorted_indices: IndexSet::new(),
            discarded_indices: IndexSet::new(),
            found_index: None,
        }
    }
}

/// Fold a sorting/search log up to `cursor` into the array state
///
/// `cursor` must satisfy `-1 <= position < len`; the playback transport
/// clamps before calling down.
#[must_use]
pub fn reconstruct_linear(log: &StepLog, cursor: Cursor) -> LinearState {
    debug_assert!(cursor.prefix_len() <= log.len());
    let mut state = LinearState::initial(log);

    for event in log.prefix(cursor) {
        state.active_indices.clear();

        match event.kind {
            StepKind::Compare => {
                state.active_indices.extend(event.index_targets());
            }
            StepKind::Swap => {
                let targets: Vec<usize> = event.index_targets().collect();
                if let [a, b] = targets[..] {
                    if a < state.values.len() && b < state.values.len() {
                        state.values.swap(a, b);
                    }
                }
                state.active_indices.extend(targets);
            }
            StepKind::UpdateValue => {
                if let (Some(index), Some(StepValue::Value(value))) =
                    (event.index_targets().next(), event.value)
                {
                    if index < state.values.len() {
                        state.values[index] = value;
                    }
                    state.active_indices.insert(index);
                }
            }
            StepKind::MarkPivot => {
                state.pivot_index = event.index_targets().next();
            }
            StepKind::Highlight => match log.category() {
                AlgorithmCategory::Search => {
                    state.discarded_indices.extend(event.index_targets());
                }
                _ => {
                    state.sorted_indices.extend(event.index_targets());
                }
            },
            StepKind::Found => {
                state.found_index = event.index_targets().next();
            }
            StepKind::Visit | StepKind::Message => {}
        }
    }
    state
}
