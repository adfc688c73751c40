use std::collections::BTreeSet;

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{Distance, Graph, NodeId},
    shortest_path::{distance_of, initial_distances, DistanceMap, PredecessorMap},
    trace::{StepKind, Trace},
    Result,
};

/// One step of Dijkstra's algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DijkstraStep {
    /// Distances initialized
    Start {
        /// Start node
        current: NodeId,
        /// Tentative distances
        distances: DistanceMap,
        /// Settled nodes
        visited: BTreeSet<NodeId>,
    },
    /// `current` was selected as the closest unsettled node and settled
    Explore {
        /// Settled node
        current: NodeId,
        /// Tentative distances
        distances: DistanceMap,
        /// Settled nodes, including `current`
        visited: BTreeSet<NodeId>,
    },
    /// Relaxation attempt of the edge `current → neighbor`
    Compare {
        /// Node being explored
        current: NodeId,
        /// Edge target
        neighbor: NodeId,
        /// Edge weight
        weight: f64,
        /// Distance of `neighbor` before the attempt
        current_distance: Distance,
        /// Distance of `neighbor` through `current`
        new_distance: Distance,
        /// Tentative distances
        distances: DistanceMap,
        /// Settled nodes
        visited: BTreeSet<NodeId>,
    },
    /// The distance of `neighbor` improved
    UpdateDistance {
        /// Node being explored
        current: NodeId,
        /// Improved node
        neighbor: NodeId,
        /// Tentative distances after the update
        distances: DistanceMap,
        /// Settled nodes
        visited: BTreeSet<NodeId>,
    },
    /// No reachable unsettled node remains
    Complete {
        /// Final distances; unreachable nodes stay infinite
        distances: DistanceMap,
        /// Settled nodes
        visited: BTreeSet<NodeId>,
        /// Predecessor on the shortest path of every reached node
        previous: PredecessorMap,
    },
}

impl StepKind for DijkstraStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_comparison(&self) -> bool {
        matches!(self, DijkstraStep::Compare { .. })
    }

    fn is_update(&self) -> bool {
        matches!(self, DijkstraStep::UpdateDistance { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, DijkstraStep::Complete { .. })
    }
}

/// Dijkstra's single-source shortest paths from `start`.
///
/// The next node to settle is found by a linear scan over the unsettled nodes in ascending id
/// order; the first node with the strictly smallest finite distance wins. The run ends when
/// every node is settled or the closest unsettled node is unreachable.
///
/// Negative weights are accepted but the resulting distances are not guaranteed to be
/// shortest.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed or does not contain
/// `start`.
///
/// # Examples
///
/// ```rust
/// use algoscope::{shortest_path::{dijkstra, DijkstraStep}, Graph, NodeId};
///
/// let graph = Graph::from_undirected_edges(3, &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0)]);
/// let trace = dijkstra(&graph, NodeId::new(0))?;
/// if let DijkstraStep::Complete { distances, .. } = trace.last().unwrap().kind() {
///     assert_eq!(distances[&NodeId::new(1)].value(), 3.0);
/// }
/// # Ok::<(), algoscope::Error>(())
/// ```
pub fn dijkstra(graph: &Graph, start: NodeId) -> Result<Trace<DijkstraStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;

    let mut trace = Trace::new();
    let mut distances = initial_distances(graph, start);
    let mut visited = BTreeSet::new();
    let mut previous = PredecessorMap::new();

    trace.record(
        DijkstraStep::Start {
            current: start,
            distances: distances.clone(),
            visited: visited.clone(),
        },
        format!(
            "Starting Dijkstra from node {start}. All distances set to infinity except start node (0)."
        ),
    );

    while let Some(current) = closest_unvisited(&distances, &visited) {
        visited.insert(current);
        let base = distance_of(&distances, current);
        trace.record(
            DijkstraStep::Explore {
                current,
                distances: distances.clone(),
                visited: visited.clone(),
            },
            format!("Exploring node {current} (distance: {base})"),
        );

        for edge in graph.neighbors(current) {
            let neighbor = edge.neighbor;
            if visited.contains(&neighbor) {
                continue;
            }

            let current_distance = distance_of(&distances, neighbor);
            let new_distance = base + edge.weight;
            trace.record(
                DijkstraStep::Compare {
                    current,
                    neighbor,
                    weight: edge.weight,
                    current_distance,
                    new_distance,
                    distances: distances.clone(),
                    visited: visited.clone(),
                },
                format!(
                    "Checking edge {current}→{neighbor} (weight: {})",
                    edge.weight
                ),
            );

            if new_distance < current_distance {
                distances.insert(neighbor, new_distance);
                previous.insert(neighbor, current);
                trace.record(
                    DijkstraStep::UpdateDistance {
                        current,
                        neighbor,
                        distances: distances.clone(),
                        visited: visited.clone(),
                    },
                    format!("Updated distance to node {neighbor}: {new_distance} (via {current})"),
                );
            }
        }
    }

    trace.record(
        DijkstraStep::Complete {
            distances,
            visited,
            previous,
        },
        format!("Dijkstra complete! Shortest distances from node {start} calculated."),
    );

    Ok(trace)
}

/// First unvisited node, in ascending id order, with the strictly smallest finite distance.
fn closest_unvisited(distances: &DistanceMap, visited: &BTreeSet<NodeId>) -> Option<NodeId> {
    let mut best: Option<(NodeId, Distance)> = None;
    for (&node, &distance) in distances {
        if visited.contains(&node) || !distance.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, smallest)| distance < smallest) {
            best = Some((node, distance));
        }
    }
    best.map(|(node, _)| node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn classic() -> Graph {
        Graph::from_undirected_edges(
            4,
            &[
                (0, 1, 4.0),
                (0, 2, 1.0),
                (1, 2, 2.0),
                (1, 3, 5.0),
                (2, 3, 8.0),
            ],
        )
    }

    fn final_distances(trace: &Trace<DijkstraStep>) -> Vec<Distance> {
        match trace.last().unwrap().kind() {
            DijkstraStep::Complete { distances, .. } => distances.values().copied().collect(),
            other => panic!("unexpected terminal step {other:?}"),
        }
    }

    #[test]
    fn test_dijkstra_distances() {
        let trace = dijkstra(&classic(), n(0)).unwrap();
        let expected: Vec<Distance> = [0.0, 3.0, 1.0, 8.0].map(Distance::new).to_vec();
        assert_eq!(final_distances(&trace), expected);
    }

    #[test]
    fn test_dijkstra_predecessors() {
        let trace = dijkstra(&classic(), n(0)).unwrap();
        match trace.last().unwrap().kind() {
            DijkstraStep::Complete { previous, .. } => {
                assert_eq!(previous[&n(1)], n(2));
                assert_eq!(previous[&n(2)], n(0));
                assert_eq!(previous[&n(3)], n(1));
            }
            other => panic!("unexpected terminal step {other:?}"),
        }
    }

    #[test]
    fn test_dijkstra_settle_order() {
        let trace = dijkstra(&classic(), n(0)).unwrap();
        let explored: Vec<NodeId> = trace
            .iter()
            .filter_map(|step| match step.kind() {
                DijkstraStep::Explore { current, .. } => Some(*current),
                _ => None,
            })
            .collect();
        assert_eq!(explored, vec![n(0), n(2), n(1), n(3)]);
    }

    #[test]
    fn test_dijkstra_compare_precedes_every_update() {
        let trace = dijkstra(&classic(), n(0)).unwrap();
        for (i, step) in trace.iter().enumerate() {
            if step.tag() == "updateDistance" {
                assert_eq!(trace[i - 1].tag(), "compare");
            }
        }
        let stats = trace.stats();
        assert!(stats.comparisons >= stats.updates);
    }

    #[test]
    fn test_dijkstra_unreachable_stays_infinite() {
        let graph = Graph::from_directed_edges(3, &[(0, 1, 2.0)]);
        let trace = dijkstra(&graph, n(0)).unwrap();
        let distances = final_distances(&trace);
        assert!(distances[2].is_infinite());
        assert!(trace.is_finished());
    }

    #[test]
    fn test_dijkstra_singleton() {
        let trace = dijkstra(&Graph::with_nodes(1), n(0)).unwrap();
        assert_eq!(trace.tags(), vec!["start", "explore", "complete"]);
    }
}
