//! Core value types shared by the graph store, the algorithms and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use wgraph_text::{Cost, VertexId};

/// A directed, weighted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail of the edge.
    pub source: VertexId,
    /// Head of the edge.
    pub target: VertexId,
    /// Cost of traversing the edge.
    pub cost: Cost,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub fn new(source: VertexId, target: VertexId, cost: Cost) -> Self {
        Self {
            source,
            target,
            cost,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.cost)
    }
}

/// Which adjacency list of a vertex to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Edges leaving the vertex.
    Outbound,
    /// Edges entering the vertex.
    Inbound,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Outbound => write!(f, "outbound"),
            Direction::Inbound => write!(f, "inbound"),
        }
    }
}
