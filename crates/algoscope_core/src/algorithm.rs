//! Algorithm ids and categories.
//!
//! The id set is closed: every id maps to exactly one instrumented
//! implementation and one input category. Unknown ids are rejected at the
//! parse boundary, before any trace is recorded.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input category an algorithm operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmCategory {
    /// Reorders an array in place
    Sorting,
    /// Locates a target value in an array
    Search,
    /// Traverses a weighted directed graph between two nodes
    Pathfinding,
}

/// Identifier of an instrumented algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    /// Quick sort (last-element pivot)
    QuickSort,
    /// Bubble sort
    BubbleSort,
    /// Selection sort
    SelectionSort,
    /// Insertion sort
    InsertionSort,
    /// Merge sort
    MergeSort,
    /// Heap sort
    HeapSort,
    /// Binary search over a sorted array
    BinarySearch,
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Dijkstra shortest path
    Dijkstra,
    /// A* shortest path with straight-line heuristic
    AStar,
}

impl AlgorithmId {
    /// All algorithm ids, in catalog order
    pub const ALL: [Self; 11] = [
        Self::QuickSort,
        Self::BubbleSort,
        Self::SelectionSort,
        Self::InsertionSort,
        Self::MergeSort,
        Self::HeapSort,
        Self::BinarySearch,
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::AStar,
    ];

    /// The stable textual id, as used by hosts and config
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickSort => "quicksort",
            Self::BubbleSort => "bubblesort",
            Self::SelectionSort => "selectionsort",
            Self::InsertionSort => "insertionsort",
            Self::MergeSort => "mergesort",
            Self::HeapSort => "heapsort",
            Self::BinarySearch => "binarysearch",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// The input category this algorithm belongs to
    #[must_use]
    pub const fn category(self) -> AlgorithmCategory {
        match self {
            Self::QuickSort
            | Self::BubbleSort
            | Self::SelectionSort
            | Self::InsertionSort
            | Self::MergeSort
            | Self::HeapSort => AlgorithmCategory::Sorting,
            Self::BinarySearch => AlgorithmCategory::Search,
            Self::Bfs | Self::Dfs | Self::Dijkstra | Self::AStar => {
                AlgorithmCategory::Pathfinding
            }
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownAlgorithm { id: s.to_string() })
    }
}
