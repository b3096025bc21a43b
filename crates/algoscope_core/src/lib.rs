//! ALGOSCOPE Core Types
//!
//! This crate contains pure types and logic with no I/O: entity identifiers,
//! the algorithm id/category vocabulary, the error taxonomy, and the static
//! input shapes (weighted directed graph, grid lattice) that instrumented
//! algorithms run against.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod grid;
pub mod id;

// Re-exports
pub use algorithm::{AlgorithmCategory, AlgorithmId};
pub use error::{CoreError, CoreResult};
pub use graph::{GraphEdge, NodePosition, WeightedGraph};
pub use grid::Lattice;
pub use id::{CellId, EdgeId, NodeId};
