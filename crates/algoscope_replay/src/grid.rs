//! Grid state reconstruction for pathfinding logs over a lattice.
//!
//! The same event stream a graph run produces is mapped onto a rows x cols
//! cell matrix. Walls, start, and end come from the caller-supplied lattice,
//! never from the log; node targets of the form `"row-col"` are resolved to
//! lattice coordinates.

use algoscope_core::{CellId, Lattice, NodeId};
use algoscope_log::{Cursor, StepKind, StepLog};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Observable state of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellState {
    /// Cell is impassable
    pub is_wall: bool,
    /// Cell is the traversal start
    pub is_start: bool,
    /// Cell is the traversal end
    pub is_end: bool,
    /// Cell has been visited; cumulative
    pub is_visited: bool,
    /// Cell lies on the final path; cumulative
    pub is_path: bool,
    /// Best known cost label, if any
    pub cost_label: Option<f64>,
}

/// Observable grid state at one cursor position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    /// Cell matrix, row-major
    pub cells: Vec<Vec<CellState>>,
    /// Cells implicated in the cursor step only
    pub active_cells: IndexSet<CellId>,
}

impl GridState {
    fn initial(lattice: &Lattice) -> Self {
        let cells = (0..lattice.rows)
            .map(|row| {
                (0..lattice.cols)
                    .map(|col| {
                        let cell = CellId::new(row, col);
                        CellState {
                            is_wall: lattice.is_wall(cell),
                            is_start: cell == lattice.start,
                            is_end: cell == lattice.end,
                            is_visited: false,
                            is_path: false,
                            cost_label: None,
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            cells,
            active_cells: IndexSet::new(),
        }
    }

    /// State of one cell
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&CellState> {
        self.cells.get(id.row).and_then(|row| row.get(id.col))
    }

    fn cell_mut(&mut self, id: CellId) -> Option<&mut CellState> {
        self.cells.get_mut(id.row).and_then(|row| row.get_mut(id.col))
    }
}

fn resolve(lattice: &Lattice, node: &NodeId) -> Option<CellId> {
    let cell: CellId = node.as_str().parse().ok()?;
    lattice.contains(cell).then_some(cell)
}

/// Fold a pathfinding log up to `cursor` into the per-cell grid state
///
/// `cursor` must satisfy `-1 <= position < len`; the playback transport
/// clamps before calling down.
#[must_use]
pub fn reconstruct_grid(log: &StepLog, cursor: Cursor, lattice: &Lattice) -> GridState {
    debug_assert!(cursor.prefix_len() <= log.len());
    let mut state = GridState::initial(lattice);

    for event in log.prefix(cursor) {
        state.active_cells.clear();
        state
            .active_cells
            .extend(event.node_targets().filter_map(|n| resolve(lattice, n)));

        match event.kind {
            StepKind::Visit => {
                let cost = event.value.as_ref().and_then(|v| v.display_cost());
                if let Some(cell) = event
                    .node_targets()
                    .next()
                    .and_then(|n| resolve(lattice, n))
                {
                    if let Some(entry) = state.cell_mut(cell) {
                        entry.is_visited = true;
                        if cost.is_some() {
                            entry.cost_label = cost;
                        }
                    }
                }
            }
            StepKind::UpdateValue => {
                let cost = event.value.as_ref().and_then(|v| v.display_cost());
                if let Some(cell) = event
                    .node_targets()
                    .next()
                    .and_then(|n| resolve(lattice, n))
                {
                    if let Some(entry) = state.cell_mut(cell) {
                        if cost.is_some() {
                            entry.cost_label = cost;
                        }
                    }
                }
            }
            StepKind::Highlight => {
                for cell in event.node_targets().filter_map(|n| resolve(lattice, n)) {
                    if let Some(entry) = state.cell_mut(cell) {
                        entry.is_path = true;
                    }
                }
            }
            StepKind::Compare
            | StepKind::Message
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

    fn open_lattice() -> Lattice {
        Lattice::new(4, 4, CellId::new(0, 0), CellId::new(3, 3)).unwrap()
    }

    #[test]
    fn test_initial_state_marks_walls_and_endpoints() {
        let lattice = open_lattice().with_wall(CellId::new(1, 1));
        let log = traversal::bfs(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        let state = reconstruct_grid(&log, Cursor::before_first(), &lattice);
        assert!(state.cell(CellId::new(1, 1)).unwrap().is_wall);
        assert!(state.cell(CellId::new(0, 0)).unwrap().is_start);
        assert!(state.cell(CellId::new(3, 3)).unwrap().is_end);
        assert!(!state.cell(CellId::new(0, 0)).unwrap().is_visited);
    }

    #[test]
    fn test_terminal_path_over_open_grid() {
        let lattice = open_lattice();
        let log = shortest_path::dijkstra(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        let state = reconstruct_grid(&log, Cursor::at(log.len() - 1), &lattice);
        let path_cells: Vec<CellId> = (0..4)
            .flat_map(|r| (0..4).map(move |c| CellId::new(r, c)))
            .filter(|&c| state.cell(c).unwrap().is_path)
            .collect();
        // Shortest path on an open 4x4 grid covers 7 cells.
        assert_eq!(path_cells.len(), 7);
        assert!(state.cell(CellId::new(0, 0)).unwrap().is_path);
        assert!(state.cell(CellId::new(3, 3)).unwrap().is_path);
    }

    #[test]
    fn test_walls_force_detour() {
        // Wall off the second row except the last column.
        let mut lattice = open_lattice();
        for col in 0..3 {
            lattice.set_wall(CellId::new(1, col), true);
        }
        let log = traversal::bfs(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        let state = reconstruct_grid(&log, Cursor::at(log.len() - 1), &lattice);
        // The path must pass through the single gap at (1, 3).
        assert!(state.cell(CellId::new(1, 3)).unwrap().is_path);
        for col in 0..3 {
            assert!(!state.cell(CellId::new(1, col)).unwrap().is_visited);
        }
    }

    #[test]
    fn test_unreachable_goal_leaves_no_path() {
        // Fully wall off the end cell's row neighbours.
        let mut lattice = open_lattice();
        lattice.set_wall(CellId::new(3, 2), true);
        lattice.set_wall(CellId::new(2, 3), true);
        let log = traversal::bfs(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        let state = reconstruct_grid(&log, Cursor::at(log.len() - 1), &lattice);
        let any_path = state
            .cells
            .iter()
            .flatten()
            .any(|cell| cell.is_path);
        assert!(!any_path);
    }

    #[test]
    fn test_visit_sets_cost_label() {
        let lattice = open_lattice();
        let log = shortest_path::a_star(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        let state = reconstruct_grid(&log, Cursor::at(log.len() - 1), &lattice);
        let start_cell = state.cell(lattice.start).unwrap();
        assert!(start_cell.is_visited);
        assert!(start_cell.cost_label.is_some());
    }

    #[test]
    fn test_active_cells_follow_cursor() {
        let lattice = open_lattice();
        let log = traversal::bfs(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        // Step 1 is the first dequeue: the start cell.
        let state = reconstruct_grid(&log, Cursor::at(1), &lattice);
        assert_eq!(
            state.active_cells.iter().copied().collect::<Vec<_>>(),
            vec![lattice.start]
        );
    }

    #[test]
    fn test_refold_idempotent() {
        let lattice = open_lattice().with_wall(CellId::new(2, 1));
        let log = shortest_path::dijkstra(
            &lattice.to_graph(),
            &lattice.start.to_node_id(),
            &lattice.end.to_node_id(),
        )
        .unwrap();
        for position in [0, log.len() / 2, log.len() - 1] {
            let first = reconstruct_grid(&log, Cursor::at(position), &lattice);
            let second = reconstruct_grid(&log, Cursor::at(position), &lattice);
            assert_eq!(first, second);
        }
    }
}
