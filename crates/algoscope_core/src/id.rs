//! Identifiers for graph nodes, graph edges, and grid cells.
//!
//! All identifiers serialize to the same textual forms the step logs use for
//! display: node ids are plain labels, edge ids are `from-to`, cell ids are
//! `row-col`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Graph node identifier - an opaque label such as `"A"` or `"3-4"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from a label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// Directed edge identifier - an ordered `(from, to)` node pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
}

impl EdgeId {
    /// Create an edge id from endpoint node ids
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Grid cell identifier - a `(row, col)` lattice coordinate
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellId {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl CellId {
    /// Create a cell id from coordinates
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert to the node id form (`"row-col"`) used in step logs
    #[must_use]
    pub fn to_node_id(self) -> NodeId {
        NodeId::new(self.to_string())
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let parse = |part: &str| {
            part.parse::<usize>().map_err(|_| CoreError::ParseError {
                message: format!("invalid cell id: {s}"),
            })
        };
        match s.split_once('-') {
            Some((row, col)) => Ok(Self::new(parse(row)?, parse(col)?)),
            None => Err(CoreError::ParseError {
                message: format!("invalid cell id: {s}"),
            }),
        }
    }
}
