//! Instrumented breadth-first and depth-first traversal.
//!
//! BFS marks a node Visit only on dequeue; discovering a neighbour is an
//! UpdateValue carrying the node and the edge it was reached through. DFS
//! emits Visit on entry and a Message on every backtrack. Both return the
//! instant the goal is reached; an exhausted frontier without the goal is a
//! valid log with no terminal Highlight.

use crate::path::{record_path, walk_predecessors};
use crate::{ensure_endpoints, RunError};
use algoscope_core::{AlgorithmCategory, NodeId, WeightedGraph};
use algoscope_log::{StepKind, StepLog, StepTarget, TraceRecorder};
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;

/// Breadth-first search from `start` toward `goal`
///
/// # Errors
///
/// Returns error if either endpoint is absent from the graph
pub fn bfs(graph: &WeightedGraph, start: &NodeId, goal: &NodeId) -> Result<StepLog, RunError> {
    ensure_endpoints(graph, start, goal)?;
    let mut recorder = TraceRecorder::new(AlgorithmCategory::Pathfinding);
    let mut discovered: IndexSet<NodeId> = IndexSet::new();
    let mut prev: IndexMap<NodeId, NodeId> = IndexMap::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    discovered.insert(start.clone());
    queue.push_back(start.clone());
    recorder.record_full(
        StepKind::Message,
        vec![StepTarget::Node(start.clone())],
        format!("Starting breadth-first search from node {start}"),
        None,
        Some(1),
    );

    while let Some(current) = queue.pop_front() {
        recorder.record_full(
            StepKind::Visit,
            vec![StepTarget::Node(current.clone())],
            format!("Dequeueing node {current}"),
            None,
            Some(3),
        );
        if &current == goal {
            let path = walk_predecessors(&prev, goal);
            record_path(&mut recorder, &path, "Target reached, reconstructing path");
            return Ok(recorder.drain());
        }
        for edge in graph.outgoing(&current) {
            if discovered.insert(edge.to.clone()) {
                prev.insert(edge.to.clone(), current.clone());
                queue.push_back(edge.to.clone());
                recorder.record_full(
                    StepKind::UpdateValue,
                    vec![
                        StepTarget::Node(edge.to.clone()),
                        StepTarget::Edge(edge.id()),
                    ],
                    format!("Discovered node {} from {}", edge.to, current),
                    None,
                    Some(5),
                );
            }
        }
    }
    Ok(recorder.drain())
}

/// Depth-first search from `start` toward `goal`
///
/// # Errors
///
/// Returns error if either endpoint is absent from the graph
pub fn dfs(graph: &WeightedGraph, start: &NodeId, goal: &NodeId) -> Result<StepLog, RunError> {
    ensure_endpoints(graph, start, goal)?;
    let mut recorder = TraceRecorder::new(AlgorithmCategory::Pathfinding);
    let mut visited: IndexSet<NodeId> = IndexSet::new();
    let mut prev: IndexMap<NodeId, NodeId> = IndexMap::new();

    if explore(graph, start, goal, &mut visited, &mut prev, &mut recorder) {
        let path = walk_predecessors(&prev, goal);
        record_path(&mut recorder, &path, "Path found by depth-first search");
    }
    Ok(recorder.drain())
}

fn explore(
    graph: &WeightedGraph,
    current: &NodeId,
    goal: &NodeId,
    visited: &mut IndexSet<NodeId>,
    prev: &mut IndexMap<NodeId, NodeId>,
    recorder: &mut TraceRecorder,
) -> bool {
    visited.insert(current.clone());
    recorder.record_full(
        StepKind::Visit,
        vec![StepTarget::Node(current.clone())],
        format!("Visiting node {current}"),
        None,
        Some(1),
    );
    if current == goal {
        return true;
    }
    for edge in graph.outgoing(current) {
        if !visited.contains(&edge.to) {
            prev.insert(edge.to.clone(), current.clone());
            recorder.record_full(
                StepKind::UpdateValue,
                vec![
                    StepTarget::Node(edge.to.clone()),
                    StepTarget::Edge(edge.id()),
                ],
                format!("Descending from {} to {}", current, edge.to),
                None,
                Some(4),
            );
            if explore(graph, &edge.to, goal, visited, prev, recorder) {
                return true;
            }
            recorder.record_full(
                StepKind::Message,
                vec![StepTarget::Node(current.clone())],
                format!("Backtracking from {} to {}", edge.to, current),
                None,
                Some(2),
            );
        }
    }
    false
}
