//! Step event types.
//!
//! One `StepEvent` is one atomic, immutable fact about an algorithm's
//! progress. The kind set is closed: reconstructors match exhaustively on it,
//! so adding a kind means extending every fold.

use algoscope_core::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Step kind - what the algorithm did at this step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Two array cells or two graph entities were compared
    Compare,
    /// Two array cells exchanged values, or one cell's placement was finalized
    Swap,
    /// A graph/grid node was dequeued/expanded/selected as current
    Visit,
    /// A sort designated a pivot element
    MarkPivot,
    /// An array cell was overwritten, or a tentative distance improved
    UpdateValue,
    /// A final path or a sorted/discarded region was marked
    Highlight,
    /// A narrative event with no state effect beyond the active set
    Message,
    /// A search located its target
    Found,
}

impl StepKind {
    /// Whether this kind accretes into a cumulative set during a fold,
    /// rather than only repopulating the transient active set
    #[must_use]
    pub const fn is_cumulative(self) -> bool {
        matches!(self, Self::Visit | Self::Highlight | Self::Found)
    }

    /// Whether this kind may rewrite working-array contents
    #[must_use]
    pub const fn mutates_values(self) -> bool {
        matches!(self, Self::Swap | Self::UpdateValue)
    }
}

/// A step target - which entity the step acted on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepTarget {
    /// An array index
    Index(usize),
    /// A graph or grid node
    Node(NodeId),
    /// A directed graph edge
    Edge(EdgeId),
}

impl StepTarget {
    /// The array index, if this target is one
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            _ => None,
        }
    }

    /// The node id, if this target is one
    #[must_use]
    pub const fn as_node(&self) -> Option<&NodeId> {
        match self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    /// The edge id, if this target is one
    #[must_use]
    pub const fn as_edge(&self) -> Option<&EdgeId> {
        match self {
            Self::Edge(id) => Some(id),
            _ => None,
        }
    }
}

impl From<usize> for StepTarget {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<NodeId> for StepTarget {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<EdgeId> for StepTarget {
    fn from(id: EdgeId) -> Self {
        Self::Edge(id)
    }
}

/// A step payload - opaque to the recorder, interpreted by reconstructors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepValue {
    /// An array element
    Value(i64),
    /// A settled or tentative path cost
    Distance(f64),
    /// Heuristic-search cost breakdown
    Cost {
        /// Cost from the start node
        g: f64,
        /// g plus the heuristic estimate to the goal
        f: f64,
    },
}

impl StepValue {
    /// The cost a reconstructor displays for this payload
    #[must_use]
    pub const fn display_cost(&self) -> Option<f64> {
        match self {
            Self::Distance(d) => Some(*d),
            Self::Cost { f, .. } => Some(*f),
            Self::Value(_) => None,
        }
    }
}

/// One atomic, immutable fact about algorithm progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepEvent {
    /// Position in the log, contiguous from 0, assigned by the recorder
    pub index: u64,
    /// What happened
    pub kind: StepKind,
    /// Which entities it happened to, in order
    pub targets: Vec<StepTarget>,
    /// Optional payload
    pub value: Option<StepValue>,
    /// Human-readable sentence describing the action; display only
    pub description: String,
    /// Line index into the catalog pseudo-code; display only
    pub source_line_hint: Option<u32>,
}

impl StepEvent {
    /// Iterate the array indices among the targets
    pub fn index_targets(&self) -> impl Iterator<Item = usize> + '_ {
        self.targets.iter().filter_map(StepTarget::as_index)
    }

    /// Iterate the node ids among the targets
    pub fn node_targets(&self) -> impl Iterator<Item = &NodeId> {
        self.targets.iter().filter_map(StepTarget::as_node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(StepKind::Visit.is_cumulative());
        assert!(StepKind::Highlight.is_cumulative());
        assert!(!StepKind::Compare.is_cumulative());
        assert!(StepKind::Swap.mutates_values());
        assert!(!StepKind::Message.mutates_values());
    }

    #[test]
    fn test_target_accessors() {
        let index = StepTarget::Index(3);
        assert_eq!(index.as_index(), Some(3));
        assert!(index.as_node().is_none());

        let node = StepTarget::Node(NodeId::new("A"));
        assert_eq!(node.as_node().map(NodeId::as_str), Some("A"));
        assert!(node.as_index().is_none());

        let edge = StepTarget::Edge(EdgeId::new("A", "B"));
        assert_eq!(edge.as_edge().map(ToString::to_string), Some("A-B".to_string()));
    }

    #[test]
    fn test_display_cost() {
        assert_eq!(StepValue::Value(7).display_cost(), None);
        assert_eq!(StepValue::Distance(2.5).display_cost(), Some(2.5));
        assert_eq!(StepValue::Cost { g: 1.0, f: 3.5 }.display_cost(), Some(3.5));
    }

    #[test]
    fn test_event_target_iters() {
        let event = StepEvent {
            index: 0,
            kind: StepKind::UpdateValue,
            targets: vec![
                StepTarget::Node(NodeId::new("B")),
                StepTarget::Edge(EdgeId::new("A", "B")),
            ],
            value: Some(StepValue::Distance(4.0)),
            description: "Discovered node B from A".to_string(),
            source_line_hint: Some(5),
        };
        assert_eq!(event.index_targets().count(), 0);
        assert_eq!(event.node_targets().count(), 1);
    }
}
