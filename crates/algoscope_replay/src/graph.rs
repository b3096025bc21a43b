//! Graph state reconstruction for traversal and shortest-path logs.

use algoscope_core::{EdgeId, NodeId};
use algoscope_log::{Cursor, StepKind, StepLog};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Observable graph state at one cursor position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    /// Nodes visited so far; cumulative
    pub visited_nodes: IndexSet<NodeId>,
    /// Nodes implicated in the cursor step only
    pub active_nodes: IndexSet<NodeId>,
    /// Edges implicated in the cursor step only
    pub active_edges: IndexSet<EdgeId>,
    /// Nodes on the final highlighted path; cumulative
    pub path_nodes: IndexSet<NodeId>,
    /// Edges between consecutive path nodes; cumulative
    pub path_edges: IndexSet<EdgeId>,
    /// Best known cost label per node
    pub distances: IndexMap<NodeId, f64>,
}

impl GraphState {
    fn initial() -> Self {
        Self {
            visited_nodes: IndexSet::new(),
            active_nodes: IndexSet::new(),
            active_edges: IndexSet::new(),
            path_nodes: IndexSet::new(),
            path_edges: IndexSet::new(),
            distances: IndexMap::new(),
        }
    }
}

/// Fold a graph log up to `cursor` into the graph state
///
/// `cursor` must satisfy `-1 <= position < len`; the playback transport
/// clamps before calling down.
#[must_use]
pub fn reconstruct_graph(log: &StepLog, cursor: Cursor) -> GraphState {
    debug_assert!(cursor.prefix_len() <= log.len());
    let mut state = GraphState::initial();

    for event in log.prefix(cursor) {
        state.active_nodes.clear();
        state.active_edges.clear();

        match event.kind {
            StepKind::Visit => {
                if let Some(node) = event.node_targets().next() {
                    state.visited_nodes.insert(node.clone());
                    state.active_nodes.insert(node.clone());
                    if let Some(cost) = event.value.as_ref().and_then(|v| v.display_cost()) {
                        state.distances.insert(node.clone(), cost);
                    }
                }
            }
            StepKind::UpdateValue | StepKind::Compare => {
                if let Some(node) = event.node_targets().next() {
                    state.active_nodes.insert(node.clone());
                    if event.kind == StepKind::UpdateValue {
                        if let Some(cost) = event.value.as_ref().and_then(|v| v.display_cost()) {
                            state.distances.insert(node.clone(), cost);
                        }
                    }
                }
                if let Some(edge) = event.targets.iter().find_map(|t| t.as_edge()) {
                    state.active_edges.insert(edge.clone());
                }
            }
            StepKind::Highlight => {
                let nodes: Vec<&NodeId> = event.node_targets().collect();
                for pair in nodes.windows(2) {
                    state.path_edges.insert(EdgeId {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                    });
                }
                state.path_nodes.extend(nodes.into_iter().cloned());
            }
            StepKind::Message
            | StepKind::Swap
            | StepKind::MarkPivot
            | StepKind::Found => {}
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_algos::{shortest_path, traversal};
    use algoscope_core::WeightedGraph;

    fn sample_run() -> StepLog {
        shortest_path::dijkstra(
            &WeightedGraph::sample(),
            &NodeId::new("A"),
            &NodeId::new("F"),
        )
        .unwrap()
    }

    #[test]
    fn test_before_first_is_empty() {
        let state = reconstruct_graph(&sample_run(), Cursor::before_first());
        assert!(state.visited_nodes.is_empty());
        assert!(state.distances.is_empty());
        assert!(state.path_nodes.is_empty());
    }

    #[test]
    fn test_visits_accumulate() {
        let log = sample_run();
        let state = reconstruct_graph(&log, Cursor::at(log.len() - 1));
        for id in ["A", "C", "G", "B", "E", "F"] {
            assert!(state.visited_nodes.contains(&NodeId::new(id)), "missing {id}");
        }
        // D is relaxed but never selected before the goal terminates the run.
        assert!(!state.visited_nodes.contains(&NodeId::new("D")));
    }

    #[test]
    fn test_terminal_path() {
        let log = sample_run();
        let state = reconstruct_graph(&log, Cursor::at(log.len() - 1));
        let path: Vec<_> = state.path_nodes.iter().map(ToString::to_string).collect();
        assert_eq!(path, vec!["A", "C", "G", "E", "F"]);
        assert!(state.path_edges.contains(&EdgeId::new("A", "C")));
        assert!(state.path_edges.contains(&EdgeId::new("E", "F")));
        assert_eq!(state.path_edges.len(), 4);
    }

    #[test]
    fn test_distances_track_improvements() {
        let log = sample_run();
        let state = reconstruct_graph(&log, Cursor::at(log.len() - 1));
        assert_eq!(state.distances.get(&NodeId::new("A")).copied(), Some(0.0));
        assert_eq!(state.distances.get(&NodeId::new("F")).copied(), Some(6.0));
        // E was first relaxed to 10 via C, then improved to 5 via G.
        assert_eq!(state.distances.get(&NodeId::new("E")).copied(), Some(5.0));
    }

    #[test]
    fn test_active_sets_are_transient() {
        let log = sample_run();
        // The terminal event is the path Highlight: nothing is active there.
        let state = reconstruct_graph(&log, Cursor::at(log.len() - 1));
        assert!(state.active_nodes.is_empty());
        assert!(state.active_edges.is_empty());

        // One step earlier, the goal Visit is the active node.
        let state = reconstruct_graph(&log, Cursor::at(log.len() - 2));
        assert_eq!(
            state.active_nodes.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["F"]
        );
    }

    #[test]
    fn test_compare_activates_edge() {
        let log = sample_run();
        // Find the first Compare: evaluating edge A -> B.
        let position = log
            .events()
            .iter()
            .position(|e| e.kind == StepKind::Compare)
            .unwrap();
        let state = reconstruct_graph(&log, Cursor::at(position));
        assert!(state.active_edges.contains(&EdgeId::new("A", "B")));
        assert!(state.active_nodes.contains(&NodeId::new("B")));
    }

    #[test]
    fn test_unreachable_goal_has_empty_path() {
        let mut graph = WeightedGraph::new();
        for id in ["A", "Z"] {
            graph.add_node(id, algoscope_core::NodePosition::new(0.0, 0.0));
        }
        let log = traversal::bfs(&graph, &NodeId::new("A"), &NodeId::new("Z")).unwrap();
        let state = reconstruct_graph(&log, Cursor::at(log.len() - 1));
        assert!(state.path_nodes.is_empty());
        assert!(state.path_edges.is_empty());
    }

    #[test]
    fn test_refold_idempotent() {
        let log = sample_run();
        for position in 0..log.len() {
            let first = reconstruct_graph(&log, Cursor::at(position));
            let second = reconstruct_graph(&log, Cursor::at(position));
            assert_eq!(first, second);
        }
    }
}
