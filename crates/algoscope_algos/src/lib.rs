//! ALGOSCOPE Instrumented Algorithms
//!
//! Eleven reference implementations that run eagerly to completion against a
//! private copy of their input and emit one step event per state-changing or
//! state-revealing operation. Each is a pure function from input to
//! `StepLog`; invalid input fails fast before any event is recorded.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod search;
pub mod shortest_path;
pub mod sorts;
pub mod traversal;

mod path;

pub use catalog::{metadata, AlgorithmMeta};

use algoscope_core::{AlgorithmId, CoreError, NodeId, WeightedGraph};
use algoscope_log::StepLog;

/// Typed input for one algorithm run
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmInput {
    /// An array for the sorting algorithms
    Array(Vec<i64>),
    /// An array plus the value binary search looks for
    Search {
        /// Array contents; the recorder sorts its own copy before searching
        values: Vec<i64>,
        /// Value to locate
        target: i64,
    },
    /// A weighted directed graph plus start and goal nodes
    Graph {
        /// The static topology
        graph: WeightedGraph,
        /// Node traversal begins from
        start: NodeId,
        /// Node traversal tries to reach
        goal: NodeId,
    },
}

/// Error running an instrumented algorithm
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// Id does not name a known algorithm
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Input shape does not match the algorithm's category
    #[error("Algorithm {algorithm} expects {expected} input")]
    InputMismatch {
        /// The algorithm that was dispatched
        algorithm: AlgorithmId,
        /// The input shape it needs
        expected: &'static str,
    },

    /// Array input was empty where at least one element is required
    #[error("Algorithm {algorithm} requires a non-empty array")]
    EmptyInput {
        /// The algorithm that was dispatched
        algorithm: AlgorithmId,
    },

    /// Start or goal node is absent from the graph
    #[error("{role} node not present in graph: {id}")]
    MissingNode {
        /// Which endpoint was missing
        role: &'static str,
        /// The absent node
        id: NodeId,
    },
}

impl From<RunError> for CoreError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::UnknownAlgorithm(id) => Self::UnknownAlgorithm { id },
            RunError::MissingNode { id, .. } => Self::NotFound {
                kind: "Node".to_string(),
                id: id.to_string(),
            },
            other => Self::Validation {
                field: "input".to_string(),
                reason: other.to_string(),
            },
        }
    }
}

/// Run an algorithm to completion over an input, producing its step log
///
/// # Errors
///
/// Returns error if the input shape does not match the algorithm's category
/// or fails its validation; no event is recorded in that case.
pub fn run_algorithm(id: AlgorithmId, input: &AlgorithmInput) -> Result<StepLog, RunError> {
    tracing::debug!(algorithm = %id, "running instrumented algorithm");
    match (id, input) {
        (AlgorithmId::QuickSort, AlgorithmInput::Array(values)) => Ok(sorts::quick_sort(values)),
        (AlgorithmId::BubbleSort, AlgorithmInput::Array(values)) => Ok(sorts::bubble_sort(values)),
        (AlgorithmId::SelectionSort, AlgorithmInput::Array(values)) => {
            Ok(sorts::selection_sort(values))
        }
        (AlgorithmId::InsertionSort, AlgorithmInput::Array(values)) => {
            Ok(sorts::insertion_sort(values))
        }
        (AlgorithmId::MergeSort, AlgorithmInput::Array(values)) => Ok(sorts::merge_sort(values)),
        (AlgorithmId::HeapSort, AlgorithmInput::Array(values)) => Ok(sorts::heap_sort(values)),
        (AlgorithmId::BinarySearch, AlgorithmInput::Search { values, target }) => {
            search::binary_search(values, *target)
        }
        (AlgorithmId::Bfs, AlgorithmInput::Graph { graph, start, goal }) => {
            traversal::bfs(graph, start, goal)
        }
        (AlgorithmId::Dfs, AlgorithmInput::Graph { graph, start, goal }) => {
            traversal::dfs(graph, start, goal)
        }
        (AlgorithmId::Dijkstra, AlgorithmInput::Graph { graph, start, goal }) => {
            shortest_path::dijkstra(graph, start, goal)
        }
        (AlgorithmId::AStar, AlgorithmInput::Graph { graph, start, goal }) => {
            shortest_path::a_star(graph, start, goal)
        }
        (algorithm, _) => Err(RunError::InputMismatch {
            algorithm,
            expected: match algorithm.category() {
                algoscope_core::AlgorithmCategory::Sorting => "array",
                algoscope_core::AlgorithmCategory::Search => "array-with-target",
                algoscope_core::AlgorithmCategory::Pathfinding => "graph",
            },
        }),
    }
}

/// Parse an algorithm id and run it
///
/// # Errors
///
/// Returns `UnknownAlgorithm` for an unrecognized id, otherwise as
/// [`run_algorithm`].
pub fn run_named(id: &str, input: &AlgorithmInput) -> Result<StepLog, RunError> {
    let id = id
        .parse::<AlgorithmId>()
        .map_err(|_| RunError::UnknownAlgorithm(id.to_string()))?;
    run_algorithm(id, input)
}

pub(crate) fn ensure_endpoints(
    graph: &WeightedGraph,
    start: &NodeId,
    goal: &NodeId,
) -> Result<(), RunError> {
    for (role, id) in [("start", start), ("goal", goal)] {
        if !graph.contains_node(id) {
            return Err(RunError::MissingNode {
                role,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::AlgorithmCategory;

    #[test]
    fn test_run_named_unknown_id() {
        let err = run_named("bogosort", &AlgorithmInput::Array(vec![1])).unwrap_err();
        assert_eq!(err, RunError::UnknownAlgorithm("bogosort".to_string()));
    }

    #[test]
    fn test_run_named_dispatches() {
        let log = run_named("bubblesort", &AlgorithmInput::Array(vec![2, 1])).unwrap();
        assert_eq!(log.category(), AlgorithmCategory::Sorting);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_input_mismatch() {
        let err = run_algorithm(
            AlgorithmId::Bfs,
            &AlgorithmInput::Array(vec![1, 2, 3]),
        )
        .unwrap_err();
        assert!(matches!(err, RunError::InputMismatch { .. }));
    }

    #[test]
    fn test_missing_node_fails_before_any_event() {
        let input = AlgorithmInput::Graph {
            graph: WeightedGraph::sample(),
            start: NodeId::new("A"),
            goal: NodeId::new("Z"),
        };
        for id in [
            AlgorithmId::Bfs,
            AlgorithmId::Dfs,
            AlgorithmId::Dijkstra,
            AlgorithmId::AStar,
        ] {
            let err = run_algorithm(id, &input).unwrap_err();
            assert_eq!(
                err,
                RunError::MissingNode {
                    role: "goal",
                    id: NodeId::new("Z"),
                }
            );
        }
    }

    #[test]
    fn test_run_error_into_core_error() {
        let core: CoreError = RunError::UnknownAlgorithm("x".to_string()).into();
        assert_eq!(core, CoreError::UnknownAlgorithm { id: "x".to_string() });

        let core: CoreError = RunError::EmptyInput {
            algorithm: AlgorithmId::BinarySearch,
        }
        .into();
        assert!(matches!(core, CoreError::Validation { .. }));
    }

    #[test]
    fn test_determinism_across_runs() {
        let input = AlgorithmInput::Graph {
            graph: WeightedGraph::sample(),
            start: NodeId::new("A"),
            goal: NodeId::new("F"),
        };
        for id in AlgorithmId::ALL {
            let input = match id.category() {
                AlgorithmCategory::Sorting => AlgorithmInput::Array(vec![5, 3, 8, 4, 1]),
                AlgorithmCategory::Search => AlgorithmInput::Search {
                    values: vec![5, 3, 8, 4, 1],
                    target: 4,
                },
                AlgorithmCategory::Pathfinding => input.clone(),
            };
            let first = run_algorithm(id, &input).unwrap();
            let second = run_algorithm(id, &input).unwrap();
            assert_eq!(first.digest(), second.digest(), "{id} not deterministic");
            assert_eq!(first, second);
        }
    }
}
