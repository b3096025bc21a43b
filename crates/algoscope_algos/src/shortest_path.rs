//! Instrumented Dijkstra and A* shortest path.
//!
//! Both select the first-encountered minimum while iterating their score maps
//! in insertion order, so ties always resolve to the earliest-inserted node.
//! Dijkstra terminates the instant the goal is selected as current (its Visit
//! is emitted, then the path); A* terminates the instant the goal is popped
//! from the open set, before any Visit of the goal.

use crate::path::{record_path, walk_predecessors};
use crate::{ensure_endpoints, RunError};
use algoscope_core::{AlgorithmCategory, NodeId, WeightedGraph};
use algoscope_log::{StepKind, StepLog, StepTarget, StepValue, TraceRecorder};
use indexmap::{IndexMap, IndexSet};

/// Divisor applied to straight-line distances in the A* heuristic; layout
/// coordinates are roughly this many units per edge-weight unit.
pub const HEURISTIC_DIVISOR: f64 = 50.0;

/// First-encountered minimum in iteration order; strict `<` keeps the
/// earliest candidate on ties.
fn select_min<'a>(
    candidates: impl Iterator<Item = &'a NodeId>,
    score: &IndexMap<NodeId, f64>,
) -> Option<&'a NodeId> {
    let mut best: Option<(&NodeId, f64)> = None;
    for node in candidates {
        let s = score.get(node).copied().unwrap_or(f64::INFINITY);
        match best {
            Some((_, b)) if s >= b => {}
            _ => best = Some((node, s)),
        }
    }
    best.map(|(node, _)| node)
}

/// Dijkstra shortest path from `start` toward `goal`
///
/// # Errors
///
/// Returns error if either endpoint is absent from the graph
pub fn dijkstra(graph: &WeightedGraph, start: &NodeId, goal: &NodeId) -> Result<StepLog, RunError> {
    ensure_endpoints(graph, start, goal)?;
    let mut recorder = TraceRecorder::new(AlgorithmCategory::Pathfinding);
    let mut dist: IndexMap<NodeId, f64> = graph
        .nodes
        .keys()
        .map(|id| (id.clone(), f64::INFINITY))
        .collect();
    let mut prev: IndexMap<NodeId, NodeId> = IndexMap::new();
    let mut unvisited: IndexSet<NodeId> = graph.nodes.keys().cloned().collect();
    dist.insert(start.clone(), 0.0);

    recorder.record_full(
        StepKind::Message,
        vec![StepTarget::Node(start.clone())],
        format!("Initializing distances, {start} starts at 0"),
        None,
        Some(1),
    );

    while !unvisited.is_empty() {
        let Some(current) = select_min(unvisited.iter(), &dist).cloned() else {
            break;
        };
        let settled = dist.get(&current).copied().unwrap_or(f64::INFINITY);
        if settled.is_infinite() {
            // Remaining nodes are unreachable from the start.
            break;
        }
        unvisited.shift_remove(&current);
        recorder.record_full(
            StepKind::Visit,
            vec![StepTarget::Node(current.clone())],
            format!("Selected node {current} with smallest distance {settled}"),
            Some(StepValue::Distance(settled)),
            Some(3),
        );
        if &current == goal {
            let path = walk_predecessors(&prev, goal);
            record_path(&mut recorder, &path, "Shortest path found");
            return Ok(recorder.drain());
        }
        for edge in graph.outgoing(&current) {
            let alt = settled + edge.weight;
            recorder.record_full(
                StepKind::Compare,
                vec![
                    StepTarget::Node(edge.to.clone()),
                    StepTarget::Edge(edge.id()),
                ],
                format!(
                    "Evaluating edge {} -> {} (weight {})",
                    current, edge.to, edge.weight
                ),
                Some(StepValue::Distance(alt)),
                Some(5),
            );
            if alt < dist.get(&edge.to).copied().unwrap_or(f64::INFINITY) {
                dist.insert(edge.to.clone(), alt);
                prev.insert(edge.to.clone(), current.clone());
                recorder.record_full(
                    StepKind::UpdateValue,
                    vec![StepTarget::Node(edge.to.clone())],
                    format!("Improved path to {}: distance {alt}", edge.to),
                    Some(StepValue::Distance(alt)),
                    Some(5),
                );
            }
        }
    }
    Ok(recorder.drain())
}

/// A* shortest path from `start` toward `goal`, straight-line heuristic
///
/// # Errors
///
/// Returns error if either endpoint is absent from the graph
pub fn a_star(graph: &WeightedGraph, start: &NodeId, goal: &NodeId) -> Result<StepLog, RunError> {
    ensure_endpoints(graph, start, goal)?;
    let goal_pos = *graph.position(goal).ok_or_else(|| RunError::MissingNode {
        role: "goal",
        id: goal.clone(),
    })?;
    let heuristic = |id: &NodeId| {
        graph
            .position(id)
            .map_or(f64::INFINITY, |p| p.distance_to(&goal_pos) / HEURISTIC_DIVISOR)
    };

    let mut recorder = TraceRecorder::new(AlgorithmCategory::Pathfinding);
    let mut g_score: IndexMap<NodeId, f64> = graph
        .nodes
        .keys()
        .map(|id| (id.clone(), f64::INFINITY))
        .collect();
    let mut f_score = g_score.clone();
    let mut prev: IndexMap<NodeId, NodeId> = IndexMap::new();
    let mut open: IndexSet<NodeId> = IndexSet::new();

    g_score.insert(start.clone(), 0.0);
    f_score.insert(start.clone(), heuristic(start));
    open.insert(start.clone());

    while !open.is_empty() {
        let Some(current) = select_min(open.iter(), &f_score).cloned() else {
            break;
        };
        if &current == goal {
            let path = walk_predecessors(&prev, goal);
            record_path(&mut recorder, &path, "Goal reached with minimal estimated cost");
            return Ok(recorder.drain());
        }
        open.shift_remove(&current);
        let g = g_score.get(&current).copied().unwrap_or(f64::INFINITY);
        let f = f_score.get(&current).copied().unwrap_or(f64::INFINITY);
        recorder.record_full(
            StepKind::Visit,
            vec![StepTarget::Node(current.clone())],
            format!("Expanding node {current} (f = {f:.1})"),
            Some(StepValue::Cost { g, f }),
            Some(3),
        );
        for edge in graph.outgoing(&current) {
            let tentative = g + edge.weight;
            if tentative < g_score.get(&edge.to).copied().unwrap_or(f64::INFINITY) {
                prev.insert(edge.to.clone(), current.clone());
                g_score.insert(edge.to.clone(), tentative);
                let estimate = tentative + heuristic(&edge.to);
                f_score.insert(edge.to.clone(), estimate);
                open.insert(edge.to.clone());
                recorder.record_full(
                    StepKind::UpdateValue,
                    vec![
                        StepTarget::Node(edge.to.clone()),
                        StepTarget::Edge(edge.id()),
                    ],
                    format!("Updating score for {} (f = {estimate:.1})", edge.to),
                    Some(StepValue::Cost {
                        g: tentative,
                        f: estimate,
                    }),
                    Some(5),
                );
            }
        }
    }
    Ok(recorder.drain())
}
