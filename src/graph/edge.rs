//! Adjacency entries and free-standing weighted edges.
//!
//! [`Edge`] is what a node's adjacency list stores: the neighbor and the cost of reaching it.
//! [`WeightedEdge`] carries both endpoints and is what edge-centric engines (Bellman-Ford,
//! Kruskal) and spanning-tree snapshots work with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// One entry in a node's adjacency list.
///
/// Serialized as `{"node": <id>, "weight": <cost>}`. The field also accepts the name
/// `neighbor` when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The node this entry points to
    #[serde(rename = "node", alias = "neighbor")]
    pub neighbor: NodeId,
    /// Cost of traversing the edge
    pub weight: f64,
}

impl Edge {
    /// Creates a new adjacency entry.
    #[must_use]
    pub const fn new(neighbor: NodeId, weight: f64) -> Self {
        Edge { neighbor, weight }
    }
}

/// An edge with both endpoints, as listed in spanning trees and edge scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Source endpoint
    pub from: NodeId,
    /// Target endpoint
    pub to: NodeId,
    /// Cost of the edge
    pub weight: f64,
}

impl WeightedEdge {
    /// Creates a new weighted edge.
    #[must_use]
    pub const fn new(from: NodeId, to: NodeId, weight: f64) -> Self {
        WeightedEdge { from, to, weight }
    }

    /// Endpoint pair with the smaller id first, identifying the edge regardless of direction.
    #[must_use]
    pub fn undirected_key(&self) -> (NodeId, NodeId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{} (weight: {})", self.from, self.to, self.weight)
    }
}

/// Sum of the weights of a set of edges.
#[must_use]
pub fn total_weight(edges: &[WeightedEdge]) -> f64 {
    edges.iter().map(|edge| edge.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_key_ignores_direction() {
        let forward = WeightedEdge::new(NodeId::new(1), NodeId::new(4), 2.0);
        let backward = WeightedEdge::new(NodeId::new(4), NodeId::new(1), 2.0);
        assert_eq!(forward.undirected_key(), backward.undirected_key());
        assert_eq!(forward.undirected_key(), (NodeId::new(1), NodeId::new(4)));
    }

    #[test]
    fn test_weighted_edge_display() {
        let edge = WeightedEdge::new(NodeId::new(0), NodeId::new(2), 1.5);
        assert_eq!(edge.to_string(), "0→2 (weight: 1.5)");
    }

    #[test]
    fn test_total_weight() {
        let edges = [
            WeightedEdge::new(NodeId::new(0), NodeId::new(1), 1.0),
            WeightedEdge::new(NodeId::new(1), NodeId::new(2), 2.5),
        ];
        assert_eq!(total_weight(&edges), 3.5);
        assert_eq!(total_weight(&[]), 0.0);
    }
}
