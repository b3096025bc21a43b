//! Weighted directed graph inputs.
//!
//! Nodes carry fixed layout positions; the A* heuristic measures straight-line
//! distance between them. Node insertion order is preserved (IndexMap), and
//! selection loops in the instrumented algorithms iterate in that order, which
//! is what pins their tie-breaks.

use crate::error::{CoreError, CoreResult};
use crate::id::{EdgeId, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fixed layout position of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl NodePosition {
    /// Create a position
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A directed weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node
    pub from: NodeId,
    /// Target node
    pub to: NodeId,
    /// Edge weight
    pub weight: f64,
}

impl GraphEdge {
    /// Create an edge
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// The edge's identifier
    #[must_use]
    pub fn id(&self) -> EdgeId {
        EdgeId {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// A weighted directed graph with fixed node positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedGraph {
    /// Nodes and their positions, in insertion order
    pub nodes: IndexMap<NodeId, NodePosition>,
    /// Directed edges, in insertion order
    pub edges: Vec<GraphEdge>,
}

impl WeightedGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Add a node with its layout position
    pub fn add_node(&mut self, id: impl Into<NodeId>, position: NodePosition) {
        self.nodes.insert(id.into(), position);
    }

    /// Add a directed edge
    ///
    /// # Errors
    ///
    /// Returns error if either endpoint is not a known node
    pub fn add_edge(&mut self, edge: GraphEdge) -> CoreResult<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.nodes.contains_key(endpoint) {
                return Err(CoreError::NotFound {
                    kind: "Node".to_string(),
                    id: endpoint.to_string(),
                });
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Check whether a node exists
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Layout position of a node
    #[must_use]
    pub fn position(&self, id: &NodeId) -> Option<&NodePosition> {
        self.nodes.get(id)
    }

    /// Outgoing edges of a node, in insertion order
    pub fn outgoing(&self, id: &NodeId) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| &e.from == id)
    }

    /// Total node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The fixed eight-node demonstration graph
    ///
    /// Node insertion order is A through H; the cheapest A-to-F route is
    /// A-C-G-E-F at total weight 6.
    #[must_use]
    pub fn sample() -> Self {
        let mut graph = Self::new();
        for (id, x, y) in [
            ("A", 100.0, 200.0),
            ("B", 250.0, 100.0),
            ("C", 250.0, 300.0),
            ("D", 450.0, 100.0),
            ("E", 450.0, 300.0),
            ("F", 600.0, 200.0),
            ("G", 350.0, 200.0),
            ("H", 520.0, 200.0),
        ] {
            graph.add_node(id, NodePosition::new(x, y));
        }
        for (from, to, weight) in [
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("B", "D", 5.0),
            ("B", "G", 3.0),
            ("C", "G", 1.0),
            ("C", "E", 8.0),
            ("G", "D", 6.0),
            ("G", "E", 2.0),
            ("D", "F", 3.0),
            ("E", "F", 1.0),
            ("G", "H", 4.0),
            ("H", "F", 2.0),
        ] {
            // Sample data is closed over its own node set.
            let _ = graph.add_edge(GraphEdge::new(from, to, weight));
        }
        graph
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}
