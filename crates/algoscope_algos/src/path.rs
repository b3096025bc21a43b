//! Predecessor-map path reconstruction shared by the graph algorithms.

use algoscope_log::{StepKind, StepTarget, TraceRecorder};
use algoscope_core::NodeId;
use indexmap::IndexMap;

/// Walk a predecessor map from the goal back to its root, returning the path
/// in start-to-goal order.
pub(crate) fn walk_predecessors(prev: &IndexMap<NodeId, NodeId>, goal: &NodeId) -> Vec<NodeId> {
    let mut path = vec![goal.clone()];
    let mut current = goal;
    while let Some(parent) = prev.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}

/// Emit the terminal Highlight over a path; target order defines the path
/// edges between adjacent nodes.
pub(crate) fn record_path(
    recorder: &mut TraceRecorder,
    path: &[NodeId],
    description: impl Into<String>,
) {
    recorder.record(
        StepKind::Highlight,
        path.iter().cloned().map(StepTarget::Node).collect(),
        description,
    );
}
