use std::collections::BTreeMap;

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{dense_index, total_weight, Graph, NodeId, WeightedEdge},
    spanning_tree::union_find::UnionFind,
    trace::{StepKind, Trace},
    Result,
};

/// One step of Kruskal's algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum KruskalStep {
    /// Edges collected, deduplicated and sorted
    Init {
        /// Candidate edges in processing order
        edges: Vec<WeightedEdge>,
    },
    /// `edge` is examined
    Consider {
        /// Edge under examination
        edge: WeightedEdge,
        /// Tree edges so far
        mst_edges: Vec<WeightedEdge>,
    },
    /// `edge` joined two components and was added to the forest
    AddEdge {
        /// Added edge
        edge: WeightedEdge,
        /// Tree edges including `edge`
        mst_edges: Vec<WeightedEdge>,
        /// Number of components left
        components: usize,
    },
    /// Both endpoints of `edge` already were in one component
    Skip {
        /// Rejected edge
        edge: WeightedEdge,
        /// Tree edges so far
        mst_edges: Vec<WeightedEdge>,
    },
    /// All edges processed, or the tree already spans every node
    Complete {
        /// Forest edges in the order they were added
        mst_edges: Vec<WeightedEdge>,
        /// Sum of the forest edge weights
        total_weight: f64,
        /// Number of trees in the forest
        components: usize,
    },
}

impl StepKind for KruskalStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_comparison(&self) -> bool {
        matches!(self, KruskalStep::Consider { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, KruskalStep::Complete { .. })
    }
}

/// Kruskal's minimum spanning forest.
///
/// Adjacency entries are collected in [`Graph::edges`] order and deduplicated by
/// [`WeightedEdge::undirected_key`], keeping the cheapest copy of parallel edges in the slot
/// of the first occurrence. A stable sort by weight
/// then fixes the processing order, so equal weights keep their collection order. Processing
/// stops as soon as the forest holds `V - 1` edges.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed.
pub fn kruskal(graph: &Graph) -> Result<Trace<KruskalStep>> {
    graph.validate()?;

    let nodes = graph.dense_nodes();
    let mut edges = cheapest_edges(graph);
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut trace = Trace::new();
    trace.record(
        KruskalStep::Init {
            edges: edges.clone(),
        },
        format!("Collected {} edges, sorted by weight", edges.len()),
    );

    let target = nodes.len().saturating_sub(1);
    let mut sets = UnionFind::new(nodes.len());
    let mut mst_edges: Vec<WeightedEdge> = Vec::with_capacity(target);

    for edge in edges {
        if mst_edges.len() == target {
            break;
        }

        trace.record(
            KruskalStep::Consider {
                edge,
                mst_edges: mst_edges.clone(),
            },
            format!("Considering edge {edge}"),
        );

        let (Some(a), Some(b)) = (dense_index(&nodes, edge.from), dense_index(&nodes, edge.to))
        else {
            continue;
        };
        if sets.union(a, b) {
            mst_edges.push(edge);
            trace.record(
                KruskalStep::AddEdge {
                    edge,
                    mst_edges: mst_edges.clone(),
                    components: sets.components(),
                },
                format!("Added edge {}→{} to MST (no cycle formed)", edge.from, edge.to),
            );
        } else {
            trace.record(
                KruskalStep::Skip {
                    edge,
                    mst_edges: mst_edges.clone(),
                },
                format!("Skipped edge {}→{} (would create cycle)", edge.from, edge.to),
            );
        }
    }

    let weight = total_weight(&mst_edges);
    let components = sets.components();
    let description = format!(
        "Kruskal's algorithm completed! MST weight: {weight}, {} edges, {components} component(s)",
        mst_edges.len()
    );
    trace.record(
        KruskalStep::Complete {
            mst_edges,
            total_weight: weight,
            components,
        },
        description,
    );

    Ok(trace)
}

/// One edge per endpoint pair, in first-seen order. Parallel edges keep the smallest weight.
fn cheapest_edges(graph: &Graph) -> Vec<WeightedEdge> {
    let mut slots: BTreeMap<(NodeId, NodeId), usize> = BTreeMap::new();
    let mut edges: Vec<WeightedEdge> = Vec::new();
    for edge in graph.edges() {
        match slots.get(&edge.undirected_key()) {
            Some(&slot) => {
                if edge.weight < edges[slot].weight {
                    edges[slot] = edge;
                }
            }
            None => {
                slots.insert(edge.undirected_key(), edges.len());
                edges.push(edge);
            }
        }
    }
    edges
}
