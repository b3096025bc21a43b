//! ALGOSCOPE State Reconstruction
//!
//! Pure folds from `(step log, cursor)` to a full observable-state snapshot.
//! Reconstruction never re-runs an algorithm: it initializes state from the
//! log's initial input, applies events `[0, cursor]` in order, and returns an
//! owned snapshot. Recomputing from scratch for any cursor yields the same
//! result; there is no hidden accumulation outside the fold.
//!
//! Transient active sets are cleared at the start of every event and
//! repopulated only by that event, so they always reflect the cursor step
//! alone. Visited/sorted/discarded/path sets are cumulative over the prefix.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod grid;
pub mod linear;

pub use graph::{reconstruct_graph, GraphState};
pub use grid::{reconstruct_grid, CellState, GridState};
pub use linear::{reconstruct_linear, LinearState};
