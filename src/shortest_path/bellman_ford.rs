use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{Distance, Graph, NodeId, WeightedEdge},
    shortest_path::{distance_of, initial_distances, DistanceMap, PredecessorMap},
    trace::{StepKind, Trace},
    Result,
};

/// One step of the Bellman-Ford algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BellmanFordStep {
    /// Distances initialized
    Init {
        /// Start node
        start: NodeId,
        /// Tentative distances
        distances: DistanceMap,
    },
    /// A relaxation pass over every edge begins
    IterationStart {
        /// Pass number, starting at 1
        iteration: usize,
        /// Number of passes that will run at most (`V - 1`)
        total: usize,
        /// Tentative distances
        distances: DistanceMap,
    },
    /// One edge was examined
    Relax {
        /// Edge source
        from: NodeId,
        /// Edge target
        to: NodeId,
        /// Edge weight
        weight: f64,
        /// Distance of `to` before the attempt
        current_distance: Distance,
        /// Distance of `to` through `from`
        new_distance: Distance,
        /// Whether the edge improves the distance of `to`
        relaxed: bool,
        /// Tentative distances before the attempt
        distances: DistanceMap,
    },
    /// The distance of `to` improved
    Update {
        /// Edge source
        from: NodeId,
        /// Improved node
        to: NodeId,
        /// New distance of `to`
        new_distance: Distance,
        /// Tentative distances after the update
        distances: DistanceMap,
    },
    /// A full pass changed nothing; the remaining passes are skipped
    EarlyStop {
        /// Pass that produced no update
        iteration: usize,
        /// Converged distances
        distances: DistanceMap,
    },
    /// An edge is still relaxable after `V - 1` passes
    NegativeCycle {
        /// Edge source
        from: NodeId,
        /// Edge target
        to: NodeId,
        /// Edge weight
        weight: f64,
        /// Distances at detection time
        distances: DistanceMap,
    },
    /// The run finished
    Complete {
        /// Final distances; unreliable when `has_negative_cycle` is set
        distances: DistanceMap,
        /// Predecessor of every improved node
        previous: PredecessorMap,
        /// Whether a negative cycle is reachable from the start
        has_negative_cycle: bool,
    },
}

impl StepKind for BellmanFordStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_comparison(&self) -> bool {
        matches!(self, BellmanFordStep::Relax { .. })
    }

    fn is_update(&self) -> bool {
        matches!(self, BellmanFordStep::Update { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, BellmanFordStep::Complete { .. })
    }
}

/// Bellman-Ford single-source shortest paths from `start`, with negative cycle detection.
///
/// Edges are collected once, grouped by source in ascending id order and in adjacency order
/// within a source, and relaxed in that order on each of the `V - 1` passes. A pass without
/// any update ends the passes early. A final scan over all edges records a `negativeCycle`
/// step for every edge that could still be relaxed.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed or does not contain
/// `start`.
pub fn bellman_ford(graph: &Graph, start: NodeId) -> Result<Trace<BellmanFordStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;

    let mut trace = Trace::new();
    let mut distances = initial_distances(graph, start);
    let mut previous = PredecessorMap::new();
    let edges: Vec<WeightedEdge> = graph.edges().collect();
    let total = graph.node_count().saturating_sub(1);

    trace.record(
        BellmanFordStep::Init {
            start,
            distances: distances.clone(),
        },
        format!("Initializing Bellman-Ford from node {start}. All other distances are ∞."),
    );

    for iteration in 1..=total {
        trace.record(
            BellmanFordStep::IterationStart {
                iteration,
                total,
                distances: distances.clone(),
            },
            format!("Iteration {iteration}/{total}: Relaxing all edges"),
        );

        let mut updated = false;
        for edge in &edges {
            let current_distance = distance_of(&distances, edge.to);
            let new_distance = distance_of(&distances, edge.from) + edge.weight;
            let relaxed = new_distance < current_distance;
            trace.record(
                BellmanFordStep::Relax {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                    current_distance,
                    new_distance,
                    relaxed,
                    distances: distances.clone(),
                },
                format!("Checking edge {}→{} (weight: {})", edge.from, edge.to, edge.weight),
            );

            if relaxed {
                distances.insert(edge.to, new_distance);
                previous.insert(edge.to, edge.from);
                updated = true;
                trace.record(
                    BellmanFordStep::Update {
                        from: edge.from,
                        to: edge.to,
                        new_distance,
                        distances: distances.clone(),
                    },
                    format!(
                        "Updated distance to node {}: {new_distance} (via {})",
                        edge.to, edge.from
                    ),
                );
            }
        }

        if !updated {
            trace.record(
                BellmanFordStep::EarlyStop {
                    iteration,
                    distances: distances.clone(),
                },
                format!("No distance changed in iteration {iteration}; distances have converged"),
            );
            break;
        }
    }

    let mut has_negative_cycle = false;
    for edge in &edges {
        let from_distance = distance_of(&distances, edge.from);
        let to_distance = distance_of(&distances, edge.to);
        if from_distance + edge.weight < to_distance {
            has_negative_cycle = true;
            trace.record(
                BellmanFordStep::NegativeCycle {
                    from: edge.from,
                    to: edge.to,
                    weight: edge.weight,
                    distances: distances.clone(),
                },
                format!(
                    "Negative cycle detected! {from_distance} + {} < {to_distance}",
                    edge.weight
                ),
            );
        }
    }

    let description = if has_negative_cycle {
        log::debug!("Bellman-Ford from {start} found a negative weight cycle");
        "Bellman-Ford completed. Graph contains negative weight cycle!".to_string()
    } else {
        format!("Bellman-Ford completed. Shortest distances from node {start} calculated.")
    };
    trace.record(
        BellmanFordStep::Complete {
            distances,
            previous,
            has_negative_cycle,
        },
        description,
    );

    Ok(trace)
}
