//! Shortest-path trace engines.
//!
//! # Algorithms
//!
//! | Engine | Function | Negative weights | Terminal steps |
//! |--------|----------|------------------|----------------|
//! | Dijkstra | [`dijkstra`] | not supported | `complete` |
//! | Bellman-Ford | [`bellman_ford`] | detected | `complete` (flagged `hasNegativeCycle`) |
//! | A* | [`astar`] | not supported | `complete` or `noPath` |
//! | Floyd-Warshall | [`floyd_warshall()`] | detected | `complete` (flagged `hasNegativeCycle`) |
//!
//! Every single-source engine starts from a distance map holding [`Distance::INFINITY`] for
//! every node except the start, which holds zero. Unreachable nodes keep their infinite
//! distance; that is a regular outcome, not an error.

mod astar;
mod bellman_ford;
mod dijkstra;
pub mod floyd_warshall;

use std::collections::BTreeMap;

use crate::graph::{Distance, Graph, NodeId};

pub use astar::{astar, AStarStep};
pub use bellman_ford::{bellman_ford, BellmanFordStep};
pub use dijkstra::{dijkstra, DijkstraStep};
pub use floyd_warshall::{floyd_warshall, FloydWarshallStep};

/// Tentative distance of every node, keyed by node id.
pub type DistanceMap = BTreeMap<NodeId, Distance>;

/// Predecessor of every node whose distance was improved at least once.
pub type PredecessorMap = BTreeMap<NodeId, NodeId>;

/// Distance map with every node at infinity except `start` at zero.
fn initial_distances(graph: &Graph, start: NodeId) -> DistanceMap {
    graph
        .nodes()
        .map(|node| {
            let distance = if node == start {
                Distance::ZERO
            } else {
                Distance::INFINITY
            };
            (node, distance)
        })
        .collect()
}

/// Distance of `node`, infinity for nodes missing from the map.
fn distance_of(distances: &DistanceMap, node: NodeId) -> Distance {
    distances.get(&node).copied().unwrap_or(Distance::INFINITY)
}

/// Follows `previous` back from `end` until `start`.
///
/// Returns an empty path if the chain breaks before reaching `start` (the end was never
/// reached) or loops (predecessors corrupted by a negative cycle).
#[must_use]
pub fn path_to(previous: &PredecessorMap, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match previous.get(&current) {
            Some(&node) if path.len() <= previous.len() => {
                path.push(node);
                current = node;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_initial_distances() {
        let distances = initial_distances(&Graph::with_nodes(3), n(1));
        assert_eq!(distances[&n(1)], Distance::ZERO);
        assert!(distances[&n(0)].is_infinite());
        assert!(distances[&n(2)].is_infinite());
    }

    #[test]
    fn test_path_to() {
        let previous = PredecessorMap::from([(n(1), n(0)), (n(2), n(1))]);
        assert_eq!(path_to(&previous, n(0), n(2)), vec![n(0), n(1), n(2)]);
        assert_eq!(path_to(&previous, n(0), n(0)), vec![n(0)]);
        assert!(path_to(&previous, n(0), n(3)).is_empty());
    }

    #[test]
    fn test_path_to_stops_on_loop() {
        let previous = PredecessorMap::from([(n(1), n(2)), (n(2), n(1))]);
        assert!(path_to(&previous, n(0), n(1)).is_empty());
    }
}
