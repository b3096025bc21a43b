//! Static catalog metadata for the instrumented algorithms.
//!
//! Names, complexity figures, and the pseudo-code listings that
//! `source_line_hint` values index into. Display-only reference data; nothing
//! here affects replay.

use algoscope_core::AlgorithmId;

/// Display metadata for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmMeta {
    /// Human-readable name
    pub name: &'static str,
    /// Time complexity figure
    pub time_complexity: &'static str,
    /// Space complexity figure
    pub space_complexity: &'static str,
    /// One-sentence summary
    pub summary: &'static str,
    /// Pseudo-code listing; step events reference these lines by index
    pub pseudo_code: &'static [&'static str],
}

/// Metadata for an algorithm id
#[must_use]
pub const fn metadata(id: AlgorithmId) -> &'static AlgorithmMeta {
    match id {
        AlgorithmId::QuickSort => &QUICK_SORT,
        AlgorithmId::BubbleSort => &BUBBLE_SORT,
        AlgorithmId::SelectionSort => &SELECTION_SORT,
        AlgorithmId::InsertionSort => &INSERTION_SORT,
        AlgorithmId::MergeSort => &MERGE_SORT,
        AlgorithmId::HeapSort => &HEAP_SORT,
        AlgorithmId::BinarySearch => &BINARY_SEARCH,
        AlgorithmId::Bfs => &BFS,
        AlgorithmId::Dfs => &DFS,
        AlgorithmId::Dijkstra => &DIJKSTRA,
        AlgorithmId::AStar => &A_STAR,
    }
}

static QUICK_SORT: AlgorithmMeta = AlgorithmMeta {
    name: "Quick Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(log n)",
    summary: "Divide-and-conquer sort that partitions the array around a pivot.",
    pseudo_code: &[
        "quickSort(arr, low, high):",
        "  if low < high:",
        "    pivot = arr[high]",
        "    i = low",
        "    for j in low..high:",
        "      if arr[j] < pivot: swap(arr[i], arr[j]); i += 1",
        "    swap(arr[i], arr[high])",
        "    quickSort(arr, low, i - 1)",
        "    quickSort(arr, i + 1, high)",
    ],
};

static BUBBLE_SORT: AlgorithmMeta = AlgorithmMeta {
    name: "Bubble Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    summary: "Repeatedly steps through the array, swapping adjacent elements out of order.",
    pseudo_code: &[
        "for i from 0 to n-1:",
        "  for j from 0 to n-i-1:",
        "    if arr[j] > arr[j+1]: swap(arr[j], arr[j+1])",
    ],
};

static SELECTION_SORT: AlgorithmMeta = AlgorithmMeta {
    name: "Selection Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    summary: "Repeatedly selects the minimum of the unsorted tail and moves it forward.",
    pseudo_code: &[
        "for i from 0 to n-1:",
        "  min_idx = i",
        "  for j from i+1 to n:",
        "    if arr[j] < arr[min_idx]: min_idx = j",
        "  swap(arr[min_idx], arr[i])",
    ],
};

static INSERTION_SORT: AlgorithmMeta = AlgorithmMeta {
    name: "Insertion Sort",
    time_complexity: "O(n²)",
    space_complexity: "O(1)",
    summary: "Builds the sorted array one key at a time by shifting and inserting.",
    pseudo_code: &[
        "for i from 1 to n:",
        "  key = arr[i]",
        "  j = i - 1",
        "  while j >= 0 and arr[j] > key:",
        "    arr[j+1] = arr[j]",
        "    j = j - 1",
        "  arr[j+1] = key",
    ],
};

static MERGE_SORT: AlgorithmMeta = AlgorithmMeta {
    name: "Merge Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    summary: "Recursively halves the array, sorts the halves, and merges them.",
    pseudo_code: &[
        "mergeSort(arr):",
        "  if n > 1:",
        "    mid = n / 2",
        "    L = mergeSort(left)",
        "    R = mergeSort(right)",
        "    merge(L, R)",
    ],
};

static HEAP_SORT: AlgorithmMeta = AlgorithmMeta {
    name: "Heap Sort",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    summary: "Builds a max-heap, then repeatedly extracts the maximum.",
    pseudo_code: &[
        "buildMaxHeap(arr)",
        "for i from n-1 down to 1:",
        "  swap(arr[0], arr[i])",
        "  maxHeapify(arr, 0, i)",
    ],
};

static BINARY_SEARCH: AlgorithmMeta = AlgorithmMeta {
    name: "Binary Search",
    time_complexity: "O(log n)",
    space_complexity: "O(1)",
    summary: "Halves a sorted search interval until the target is found or the interval empties.",
    pseudo_code: &[
        "binarySearch(arr, target):",
        "  low = 0, high = n-1",
        "  while low <= high:",
        "    mid = (low + high) / 2",
        "    if arr[mid] == target: return mid",
        "    if arr[mid] < target: low = mid + 1",
        "    else: high = mid - 1",
    ],
};

static BFS: AlgorithmMeta = AlgorithmMeta {
    name: "Breadth-First Search",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    summary: "Explores all neighbours at the present depth before going deeper.",
    pseudo_code: &[
        "BFS(graph, start):",
        "  Q = [start]",
        "  while Q not empty:",
        "    v = Q.dequeue()",
        "    for each neighbour w of v:",
        "      if not discovered: Q.enqueue(w)",
    ],
};

static DFS: AlgorithmMeta = AlgorithmMeta {
    name: "Depth-First Search",
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    summary: "Explores as far as possible along each branch before backtracking.",
    pseudo_code: &[
        "DFS(graph, v):",
        "  mark v visited",
        "  for each neighbour w of v:",
        "    if not visited:",
        "      DFS(graph, w)",
    ],
};

static DIJKSTRA: AlgorithmMeta = AlgorithmMeta {
    name: "Dijkstra's Algorithm",
    time_complexity: "O(V²)",
    space_complexity: "O(V)",
    summary: "Finds the shortest path in a weighted directed graph.",
    pseudo_code: &[
        "Dijkstra(graph, start):",
        "  dist[start] = 0",
        "  while unvisited not empty:",
        "    u = unvisited node with min dist[u]",
        "    for each neighbour v of u:",
        "      relax(u, v, weight)",
    ],
};

static A_STAR: AlgorithmMeta = AlgorithmMeta {
    name: "A* Search",
    time_complexity: "O(E)",
    space_complexity: "O(V)",
    summary: "Heuristic shortest path guided by estimated distance to the goal.",
    pseudo_code: &[
        "AStar(start, goal):",
        "  fScore[start] = h(start, goal)",
        "  while openSet not empty:",
        "    u = open node with min fScore",
        "    for each neighbour v of u:",
        "      if tentative_g < gScore[v]: update(v)",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_has_metadata() {
        for id in AlgorithmId::ALL {
            let meta = metadata(id);
            assert!(!meta.name.is_empty());
            assert!(!meta.pseudo_code.is_empty());
        }
    }

    #[test]
    fn test_line_hints_stay_in_listing() {
        use crate::AlgorithmInput;
        use algoscope_core::{NodeId, WeightedGraph};

        for id in AlgorithmId::ALL {
            let input = match id.category() {
                algoscope_core::AlgorithmCategory::Sorting => {
                    AlgorithmInput::Array(vec![5, 3, 8, 4, 1, 9, 2])
                }
                algoscope_core::AlgorithmCategory::Search => AlgorithmInput::Search {
                    values: vec![5, 3, 8, 4, 1, 9, 2],
                    target: 4,
                },
                algoscope_core::AlgorithmCategory::Pathfinding => AlgorithmInput::Graph {
                    graph: WeightedGraph::sample(),
                    start: NodeId::new("A"),
                    goal: NodeId::new("F"),
                },
            };
            let log = crate::run_algorithm(id, &input).unwrap();
            let listing_len = metadata(id).pseudo_code.len() as u32;
            for event in log.events() {
                if let Some(line) = event.source_line_hint {
                    assert!(
                        line < listing_len,
                        "{id}: line hint {line} outside {listing_len}-line listing"
                    );
                }
            }
        }
    }
}
