//! Grid lattice inputs for pathfinding.
//!
//! A lattice is a rows x cols 2-D grid with a wall set and fixed start/end
//! cells. Pathfinding algorithms do not know about lattices; `to_graph`
//! lowers one into a unit-weight directed graph whose node ids are the
//! `"row-col"` cell ids, walls excluded. Cell positions are scaled so the A*
//! straight-line heuristic stays meaningful on grids.

use crate::error::{CoreError, CoreResult};
use crate::graph::{GraphEdge, NodePosition, WeightedGraph};
use crate::id::CellId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Layout spacing between adjacent cell centers, in the same coordinate
/// space as graph node positions.
pub const CELL_SPACING: f64 = 50.0;

/// A rows x cols grid with walls and fixed start/end cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Start cell
    pub start: CellId,
    /// End cell
    pub end: CellId,
    /// Wall cells, impassable
    pub walls: IndexSet<CellId>,
}

impl Lattice {
    /// Create a lattice
    ///
    /// # Errors
    ///
    /// Returns error if dimensions are zero, start/end are out of bounds,
    /// or start equals end
    pub fn new(rows: usize, cols: usize, start: CellId, end: CellId) -> CoreResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::Validation {
                field: "lattice".to_string(),
                reason: format!("dimensions must be positive, got {rows}x{cols}"),
            });
        }
        let lattice = Self {
            rows,
            cols,
            start,
            end,
            walls: IndexSet::new(),
        };
        for (name, cell) in [("start", start), ("end", end)] {
            if !lattice.contains(cell) {
                return Err(CoreError::Validation {
                    field: name.to_string(),
                    reason: format!("cell {cell} outside {rows}x{cols} lattice"),
                });
            }
        }
        if start == end {
            return Err(CoreError::Validation {
                field: "end".to_string(),
                reason: "start and end must differ".to_string(),
            });
        }
        Ok(lattice)
    }

    /// Add a wall cell; start and end cells are never walled
    #[must_use]
    pub fn with_wall(mut self, cell: CellId) -> Self {
        self.set_wall(cell, true);
        self
    }

    /// Set or clear a wall
    pub fn set_wall(&mut self, cell: CellId, walled: bool) {
        if cell == self.start || cell == self.end || !self.contains(cell) {
            return;
        }
        if walled {
            self.walls.insert(cell);
        } else {
            self.walls.shift_remove(&cell);
        }
    }

    /// Check whether a cell lies within the lattice bounds
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Check whether a cell is a wall
    #[must_use]
    pub fn is_wall(&self, cell: CellId) -> bool {
        self.walls.contains(&cell)
    }

    /// In-bounds, non-wall 4-neighbours of a cell, in up/down/left/right order
    #[must_use]
    pub fn neighbours(&self, cell: CellId) -> Vec<CellId> {
        let mut out = Vec::with_capacity(4);
        if cell.row > 0 {
            out.push(CellId::new(cell.row - 1, cell.col));
        }
        if cell.row + 1 < self.rows {
            out.push(CellId::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            out.push(CellId::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.cols {
            out.push(CellId::new(cell.row, cell.col + 1));
        }
        out.retain(|c| !self.is_wall(*c));
        out
    }

    /// Lower the lattice into a unit-weight directed graph
    ///
    /// Wall cells get no node; every open cell gets edges to its open
    /// neighbours. Row-major insertion order keeps traversal deterministic.
    #[must_use]
    pub fn to_graph(&self) -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = CellId::new(row, col);
                if self.is_wall(cell) {
                    continue;
                }
                graph.add_node(
                    cell.to_node_id(),
                    NodePosition::new(col as f64 * CELL_SPACING, row as f64 * CELL_SPACING),
                );
            }
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = CellId::new(row, col);
                if self.is_wall(cell) {
                    continue;
                }
                for neighbour in self.neighbours(cell) {
                    // Endpoints are known open cells; insertion cannot fail.
                    let _ = graph.add_edge(GraphEdge::new(
                        cell.to_node_id(),
                        neighbour.to_node_id(),
                        1.0,
                    ));
                }
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lattice() -> Lattice {
        Lattice::new(3, 3, CellId::new(0, 0), CellId::new(2, 2)).unwrap()
    }

    #[test]
    fn test_lattice_new_validates() {
        assert!(Lattice::new(0, 3, CellId::new(0, 0), CellId::new(0, 1)).is_err());
        assert!(Lattice::new(3, 3, CellId::new(5, 0), CellId::new(0, 1)).is_err());
        assert!(Lattice::new(3, 3, CellId::new(0, 0), CellId::new(0, 0)).is_err());
    }

    #[test]
    fn test_walls_never_cover_endpoints() {
        let lattice = sample_lattice()
            .with_wall(CellId::new(0, 0))
            .with_wall(CellId::new(1, 1));
        assert!(!lattice.is_wall(CellId::new(0, 0)));
        assert!(lattice.is_wall(CellId::new(1, 1)));
    }

    #[test]
    fn test_set_wall_toggle() {
        let mut lattice = sample_lattice();
        lattice.set_wall(CellId::new(1, 2), true);
        assert!(lattice.is_wall(CellId::new(1, 2)));
        lattice.set_wall(CellId::new(1, 2), false);
        assert!(!lattice.is_wall(CellId::new(1, 2)));
    }

    #[test]
    fn test_neighbours_corner() {
        let lattice = sample_lattice();
        let n = lattice.neighbours(CellId::new(0, 0));
        assert_eq!(n, vec![CellId::new(1, 0), CellId::new(0, 1)]);
    }

    #[test]
    fn test_neighbours_skip_walls() {
        let lattice = sample_lattice().with_wall(CellId::new(1, 0));
        let n = lattice.neighbours(CellId::new(0, 0));
        assert_eq!(n, vec![CellId::new(0, 1)]);
    }

    #[test]
    fn test_to_graph_excludes_walls() {
        let lattice = sample_lattice().with_wall(CellId::new(1, 1));
        let graph = lattice.to_graph();
        assert_eq!(graph.node_count(), 8);
        assert!(!graph.contains_node(&CellId::new(1, 1).to_node_id()));
        // No edge may touch the wall cell.
        assert!(graph
            .edges
            .iter()
            .all(|e| e.from.as_str() != "1-1" && e.to.as_str() != "1-1"));
    }

    #[test]
    fn test_to_graph_unit_weights() {
        let graph = sample_lattice().to_graph();
        assert!(graph.edges.iter().all(|e| (e.weight - 1.0).abs() < f64::EPSILON));
    }
}
