//! Node identifier used by every graph engine.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for nodes
//! within a [`Graph`](crate::graph::Graph). The newtype wrapper provides type safety and
//! prevents accidental confusion between node ids, array indices and step counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a `usize`. Graph generators hand out dense ids `0..N-1`, but the engines
/// do not rely on density: every engine iterates nodes in ascending id order, which is what
/// makes traces reproducible.
///
/// On the wire a `NodeId` is a plain number, both as a value and as a map key, so a graph
/// serializes as `{"0": [{"node": 1, "weight": 4}], ...}`.
///
/// # Examples
///
/// ```rust
/// use algoscope::NodeId;
///
/// let a = NodeId::new(0);
/// let b = NodeId::new(1);
/// assert!(a < b);
/// assert_eq!(b.index(), 1);
/// assert_eq!(b.to_string(), "1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw id value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw node id
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw id value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Absolute difference between two node ids.
    ///
    /// This is the placeholder heuristic used by the A* engine; it has no geometric meaning.
    #[must_use]
    #[inline]
    pub const fn distance_to(self, other: NodeId) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Formats the node id as its bare number, which is how step descriptions refer to nodes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// Joins a node sequence as `a → b → c` for step descriptions.
pub(crate) fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_node_id_ordering() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_set_is_ascending() {
        let set: BTreeSet<NodeId> = [5, 0, 3].into_iter().map(NodeId::new).collect();
        let ordered: Vec<usize> = set.into_iter().map(NodeId::index).collect();
        assert_eq!(ordered, vec![0, 3, 5]);
    }

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 123usize.into();
        assert_eq!(node.index(), 123);
        let value: usize = node.into();
        assert_eq!(value, 123);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(42);
        assert_eq!(format!("{node:?}"), "NodeId(42)");
        assert_eq!(format!("{node}"), "42");
    }

    #[test]
    fn test_distance_to_is_symmetric() {
        let a = NodeId::new(2);
        let b = NodeId::new(7);
        assert_eq!(a.distance_to(b), 5);
        assert_eq!(b.distance_to(a), 5);
        assert_eq!(a.distance_to(a), 0);
    }

    #[test]
    fn test_format_path() {
        let path = [NodeId::new(0), NodeId::new(2), NodeId::new(3)];
        assert_eq!(format_path(&path), "0 → 2 → 3");
        assert_eq!(format_path(&[]), "");
    }
}
