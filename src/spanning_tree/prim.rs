use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{total_weight, Distance, Graph, NodeId, WeightedEdge},
    trace::{StepKind, Trace},
    Result,
};

/// One step of Prim's algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PrimStep {
    /// Keys initialized: zero for the start node, infinity elsewhere
    Init {
        /// Start node
        start: NodeId,
        /// Cheapest known connection cost of every node
        keys: BTreeMap<NodeId, Distance>,
    },
    /// `current` had the smallest key among the nodes outside the tree and joined it
    Select {
        /// Selected node
        current: NodeId,
        /// Its key
        key: Distance,
        /// Nodes in the tree
        visited: BTreeSet<NodeId>,
    },
    /// The edge connecting `current` to its parent joined the tree
    AddEdge {
        /// Tree edge, from the parent to the selected node
        edge: WeightedEdge,
        /// Tree edges so far
        mst_edges: Vec<WeightedEdge>,
    },
    /// `neighbor` can be connected more cheaply through `current`
    UpdateKey {
        /// Node just added to the tree
        current: NodeId,
        /// Node outside the tree
        neighbor: NodeId,
        /// New key of `neighbor`
        new_key: Distance,
        /// Keys after the update
        keys: BTreeMap<NodeId, Distance>,
    },
    /// No node outside the tree is connected to it
    Complete {
        /// Tree edges in the order they were added
        mst_edges: Vec<WeightedEdge>,
        /// Sum of the tree edge weights
        total_weight: f64,
        /// Nodes in the tree
        visited: BTreeSet<NodeId>,
    },
}

impl StepKind for PrimStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_update(&self) -> bool {
        matches!(self, PrimStep::UpdateKey { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, PrimStep::Complete { .. })
    }
}

/// Prim's minimum spanning tree grown from `start`.
///
/// Each round selects, by linear scan in ascending id order, the first node outside the tree
/// with the strictly smallest finite key. Nodes that never get a finite key belong to another
/// component and are left out.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed or does not contain
/// `start`.
pub fn prim(graph: &Graph, start: NodeId) -> Result<Trace<PrimStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;

    let mut trace = Trace::new();
    let mut keys: BTreeMap<NodeId, Distance> = graph
        .nodes()
        .map(|node| (node, Distance::INFINITY))
        .collect();
    keys.insert(start, Distance::ZERO);
    let mut parent: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut visited = BTreeSet::new();
    let mut mst_edges = Vec::new();

    trace.record(
        PrimStep::Init {
            start,
            keys: keys.clone(),
        },
        format!("Starting Prim's algorithm from node {start}"),
    );

    while let Some((current, key)) = cheapest_outside(&keys, &visited) {
        visited.insert(current);
        trace.record(
            PrimStep::Select {
                current,
                key,
                visited: visited.clone(),
            },
            format!("Selected node {current} with key {key}"),
        );

        if let Some(&from) = parent.get(&current) {
            let edge = WeightedEdge::new(from, current, key.value());
            mst_edges.push(edge);
            trace.record(
                PrimStep::AddEdge {
                    edge,
                    mst_edges: mst_edges.clone(),
                },
                format!("Added edge {edge} to MST"),
            );
        }

        for edge in graph.neighbors(current) {
            let neighbor = edge.neighbor;
            let new_key = Distance::new(edge.weight);
            let improves = keys.get(&neighbor).is_some_and(|&old| new_key < old);
            if visited.contains(&neighbor) || !improves {
                continue;
            }

            keys.insert(neighbor, new_key);
            parent.insert(neighbor, current);
            trace.record(
                PrimStep::UpdateKey {
                    current,
                    neighbor,
                    new_key,
                    keys: keys.clone(),
                },
                format!("Updated key of node {neighbor} to {new_key} (via {current})"),
            );
        }
    }

    let weight = total_weight(&mst_edges);
    let description = format!(
        "Prim's algorithm completed! MST weight: {weight}, Edges: {}",
        mst_edges
            .iter()
            .map(|edge| format!("{}-{}", edge.from, edge.to))
            .collect::<Vec<_>>()
            .join(", ")
    );
    trace.record(
        PrimStep::Complete {
            mst_edges,
            total_weight: weight,
            visited,
        },
        description,
    );

    Ok(trace)
}

fn cheapest_outside(
    keys: &BTreeMap<NodeId, Distance>,
    visited: &BTreeSet<NodeId>,
) -> Option<(NodeId, Distance)> {
    let mut best: Option<(NodeId, Distance)> = None;
    for (&node, &key) in keys {
        if visited.contains(&node) || !key.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, smallest)| key < smallest) {
            best = Some((node, key));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn complete(trace: &Trace<PrimStep>) -> (&Vec<WeightedEdge>, f64, &BTreeSet<NodeId>) {
        match trace.last().unwrap().kind() {
            PrimStep::Complete {
                mst_edges,
                total_weight,
                visited,
            } => (mst_edges, *total_weight, visited),
            other => panic!("unexpected terminal step {other:?}"),
        }
    }

    #[test]
    fn test_prim_square_with_diagonal() {
        let graph = Graph::from_undirected_edges(
            4,
            &[
                (0, 1, 1.0),
                (1, 2, 2.0),
                (2, 3, 1.0),
                (3, 0, 4.0),
                (0, 2, 3.0),
            ],
        );
        let trace = prim(&graph, n(0)).unwrap();
        let (edges, weight, visited) = complete(&trace);
        assert_eq!(weight, 4.0);
        assert_eq!(edges.len(), 3);
        assert_eq!(visited.len(), 4);
        assert_eq!(
            edges.iter().map(|e| (e.from, e.to)).collect::<Vec<_>>(),
            vec![(n(0), n(1)), (n(1), n(2)), (n(2), n(3))]
        );
    }

    #[test]
    fn test_prim_start_has_no_edge() {
        let trace = prim(&Graph::path(2, 5.0), n(1)).unwrap();
        assert_eq!(
            trace.tags(),
            vec!["init", "select", "updateKey", "select", "addEdge", "complete"]
        );
    }

    #[test]
    fn test_prim_disconnected_leaves_component_out() {
        let graph = Graph::from_undirected_edges(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        let trace = prim(&graph, n(0)).unwrap();
        let (edges, weight, visited) = complete(&trace);
        assert_eq!(edges.len(), 1);
        assert_eq!(weight, 1.0);
        assert_eq!(visited, &BTreeSet::from([n(0), n(1)]));
    }
}
