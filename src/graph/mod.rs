//! Adjacency-list graph consumed by every graph engine.
//!
//! A [`Graph`] maps each [`NodeId`] to the ordered list of its outgoing [`Edge`]s. Undirected
//! graphs store every edge twice, once under each endpoint, with the same weight. Keys are kept
//! in a `BTreeMap`, so iterating nodes always yields ascending ids; every engine relies on that
//! order for reproducible traces.
//!
//! # Invariants
//!
//! Checked by [`Graph::validate`] before any engine runs:
//!
//! - every `neighbor` referenced by an adjacency entry is itself a node of the graph
//! - every weight is finite
//!
//! Weights may be negative; only Bellman-Ford and Floyd-Warshall give meaningful results for
//! them.
//!
//! # Examples
//!
//! ```rust
//! use algoscope::{Graph, NodeId};
//!
//! let mut graph = Graph::new();
//! graph.add_undirected_edge(NodeId::new(0), NodeId::new(1), 4.0);
//! graph.add_undirected_edge(NodeId::new(1), NodeId::new(2), 1.0);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.neighbors(NodeId::new(1)).len(), 2);
//! assert!(graph.validate().is_ok());
//! ```

mod builders;
mod distance;
mod edge;
mod node;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use distance::Distance;
pub use edge::{total_weight, Edge, WeightedEdge};
pub use node::NodeId;

pub(crate) use node::format_path;

use crate::Result;

/// Weighted adjacency-list graph keyed by node id.
///
/// Serializes transparently as the adjacency map, e.g.
/// `{"0": [{"node": 1, "weight": 1}], "1": [{"node": 0, "weight": 1}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with nodes `0..count` and no edges.
    #[must_use]
    pub fn with_nodes(count: usize) -> Self {
        Graph {
            adjacency: (0..count).map(|id| (NodeId::new(id), Vec::new())).collect(),
        }
    }

    /// Adds a node without edges.
    ///
    /// Returns `false` if the node was already present; its adjacency list is left untouched.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Appends a one-way adjacency entry `from → to`, creating missing endpoints.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.add_node(to);
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, weight));
    }

    /// Appends the adjacency entries `a → b` and `b → a` with the same weight.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of adjacency entries (undirected edges count twice).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `node` is a key of the adjacency map.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterates node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns the adjacency list of `node`, or an empty slice for unknown nodes.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Iterates every adjacency entry as a [`WeightedEdge`], grouped by source in ascending id
    /// order and in adjacency order within a source.
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.adjacency.iter().flat_map(|(&from, edges)| {
            edges
                .iter()
                .map(move |edge| WeightedEdge::new(from, edge.neighbor, edge.weight))
        })
    }

    /// Returns the smallest node id.
    #[must_use]
    pub fn first_node(&self) -> Option<NodeId> {
        self.adjacency.keys().next().copied()
    }

    /// Returns the largest node id.
    #[must_use]
    pub fn last_node(&self) -> Option<NodeId> {
        self.adjacency.keys().next_back().copied()
    }

    /// Checks the adjacency invariants.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if an entry references a node that is not a key
    /// of the graph, or carries a non-finite weight.
    pub fn validate(&self) -> Result<()> {
        for (&from, edges) in &self.adjacency {
            for edge in edges {
                if !self.adjacency.contains_key(&edge.neighbor) {
                    return Err(invalid_input!(
                        "edge {}→{} references node {} which is not part of the graph",
                        from,
                        edge.neighbor,
                        edge.neighbor
                    ));
                }
                if !edge.weight.is_finite() {
                    return Err(invalid_input!(
                        "edge {}→{} has non-finite weight {}",
                        from,
                        edge.neighbor,
                        edge.weight
                    ));
                }
            }
        }
        Ok(())
    }

    /// Ensures `node` exists, naming its role (`"start"`, `"end"`) in the error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the graph is empty or does not contain `node`.
    pub fn require_node(&self, node: NodeId, role: &str) -> Result<()> {
        if self.is_empty() {
            return Err(invalid_input!("graph is empty but a {} node is required", role));
        }
        if !self.contains(node) {
            return Err(invalid_input!(
                "{} node {} is not part of the graph",
                role,
                node
            ));
        }
        Ok(())
    }

    /// Node ids in ascending order, for engines that work on dense matrices.
    ///
    /// The position of a node in the returned vector is its row/column in those matrices.
    #[must_use]
    pub(crate) fn dense_nodes(&self) -> Vec<NodeId> {
        self.nodes().collect()
    }
}

impl From<BTreeMap<NodeId, Vec<Edge>>> for Graph {
    fn from(adjacency: BTreeMap<NodeId, Vec<Edge>>) -> Self {
        Graph { adjacency }
    }
}

/// Position of `node` in an ascending node list produced by [`Graph::dense_nodes`].
pub(crate) fn dense_index(nodes: &[NodeId], node: NodeId) -> Option<usize> {
    nodes.binary_search(&node).ok()
}
