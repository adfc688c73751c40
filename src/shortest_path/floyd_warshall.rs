//! All-pairs shortest paths with Floyd-Warshall.
//!
//! Matrices are dense: row and column `r` belong to the `r`-th smallest node id, and the
//! `nodes` field of the `init` step lists the ids in that order. Cell `[i][j]` of `next` holds
//! the first hop on the best known path from `nodes[i]` to `nodes[j]`, or `None` while `j` is
//! unreachable from `i`.
//!
//! The engine runs `n³` relaxations and records a full matrix snapshot with every step, so
//! traces grow fast; callers should keep graphs to a few dozen nodes (see
//! [`crate::EngineLimits::max_floyd_warshall_nodes`]).

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{dense_index, Distance, Graph, NodeId},
    trace::{StepKind, Trace},
    Result,
};

/// Dense distance matrix.
pub type DistanceMatrix = Vec<Vec<Distance>>;

/// Dense next-hop matrix.
pub type NextHopMatrix = Vec<Vec<Option<NodeId>>>;

/// One step of the Floyd-Warshall algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FloydWarshallStep {
    /// Matrix initialized from the direct edges
    Init {
        /// Node id of every matrix row/column
        nodes: Vec<NodeId>,
        /// Initial distances
        matrix: DistanceMatrix,
    },
    /// `intermediate` becomes allowed as an inner vertex of paths
    Iteration {
        /// Intermediate vertex `k`
        intermediate: NodeId,
        /// Distances before this round
        matrix: DistanceMatrix,
    },
    /// The path `i → j` got cheaper by going through `k`
    Update {
        /// Path source
        i: NodeId,
        /// Path target
        j: NodeId,
        /// Intermediate vertex
        k: NodeId,
        /// Previous distance
        old_distance: Distance,
        /// Improved distance
        new_distance: Distance,
        /// Distances after the update
        matrix: DistanceMatrix,
    },
    /// `node` can reach itself at negative cost
    NegativeCycle {
        /// Node on a negative cycle
        node: NodeId,
        /// Its (negative) diagonal entry
        distance: Distance,
        /// Final distances
        matrix: DistanceMatrix,
    },
    /// All rounds done
    Complete {
        /// Node id of every matrix row/column
        nodes: Vec<NodeId>,
        /// Final distances; unreliable when `has_negative_cycle` is set
        matrix: DistanceMatrix,
        /// First hop of every shortest path
        next: NextHopMatrix,
        /// Whether any diagonal entry is negative
        has_negative_cycle: bool,
    },
}

impl StepKind for FloydWarshallStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_update(&self) -> bool {
        matches!(self, FloydWarshallStep::Update { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, FloydWarshallStep::Complete { .. })
    }
}

/// Runs Floyd-Warshall over every pair of nodes.
///
/// The diagonal starts at zero and every adjacency entry `i → j` lowers `[i][j]` to its weight
/// (parallel entries keep the cheapest, a negative self-loop lowers the diagonal). Rounds
/// iterate `k`, then `i`, then `j` in ascending id order, recording an `iteration` step per
/// `k` and an `update` step per improved cell. Afterwards every negative diagonal entry is
/// recorded as a `negativeCycle` step.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed.
pub fn floyd_warshall(graph: &Graph) -> Result<Trace<FloydWarshallStep>> {
    graph.validate()?;

    let nodes = graph.dense_nodes();
    let n = nodes.len();
    let mut matrix: DistanceMatrix = vec![vec![Distance::INFINITY; n]; n];
    let mut next: NextHopMatrix = vec![vec![None; n]; n];

    for (i, &node) in nodes.iter().enumerate() {
        matrix[i][i] = Distance::ZERO;
        next[i][i] = Some(node);
    }
    for edge in graph.edges() {
        let (Some(i), Some(j)) = (dense_index(&nodes, edge.from), dense_index(&nodes, edge.to))
        else {
            continue;
        };
        let weight = Distance::new(edge.weight);
        if weight < matrix[i][j] {
            matrix[i][j] = weight;
            next[i][j] = Some(edge.to);
        }
    }

    let mut trace = Trace::new();
    trace.record(
        FloydWarshallStep::Init {
            nodes: nodes.clone(),
            matrix: matrix.clone(),
        },
        format!("Initialized {n}×{n} distance matrix from direct edges"),
    );

    for k in 0..n {
        trace.record(
            FloydWarshallStep::Iteration {
                intermediate: nodes[k],
                matrix: matrix.clone(),
            },
            format!("Using node {} as intermediate vertex", nodes[k]),
        );

        for i in 0..n {
            if !matrix[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                let through = matrix[i][k] + matrix[k][j];
                if !matrix[k][j].is_finite() || through >= matrix[i][j] {
                    continue;
                }

                let old_distance = matrix[i][j];
                matrix[i][j] = through;
                next[i][j] = next[i][k];
                let (ni, nj, nk) = (nodes[i], nodes[j], nodes[k]);
                trace.record(
                    FloydWarshallStep::Update {
                        i: ni,
                        j: nj,
                        k: nk,
                        old_distance,
                        new_distance: through,
                        matrix: matrix.clone(),
                    },
                    format!(
                        "Updated dist[{ni}][{nj}] = dist[{ni}][{nk}] + dist[{nk}][{nj}] = {through} (was {old_distance})"
                    ),
                );
            }
        }
    }

    let mut has_negative_cycle = false;
    for (i, &node) in nodes.iter().enumerate() {
        let distance = matrix[i][i];
        if distance < Distance::ZERO {
            has_negative_cycle = true;
            trace.record(
                FloydWarshallStep::NegativeCycle {
                    node,
                    distance,
                    matrix: matrix.clone(),
                },
                format!("Negative cycle detected at node {node}! dist[{node}][{node}] = {distance}"),
            );
        }
    }

    let description = if has_negative_cycle {
        log::debug!("Floyd-Warshall found a negative cycle");
        "Floyd-Warshall completed. Graph contains negative cycles!".to_string()
    } else {
        "Floyd-Warshall completed. All-pairs shortest paths calculated.".to_string()
    };
    trace.record(
        FloydWarshallStep::Complete {
            nodes,
            matrix,
            next,
            has_negative_cycle,
        },
        description,
    );

    Ok(trace)
}

/// Rebuilds the path `from → to` by following a next-hop matrix produced by
/// [`floyd_warshall`].
///
/// Returns an empty path if `to` is unreachable from `from`, if either node is not part of
/// `nodes`, or if the hops loop (which only happens around negative cycles).
///
/// # Examples
///
/// ```rust
/// use algoscope::{shortest_path::floyd_warshall::{self, FloydWarshallStep}, Graph, NodeId};
///
/// let graph = Graph::from_directed_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
/// let trace = floyd_warshall::floyd_warshall(&graph)?;
/// if let FloydWarshallStep::Complete { nodes, next, .. } = trace.last().unwrap().kind() {
///     let path = floyd_warshall::reconstruct_path(nodes, next, NodeId::new(0), NodeId::new(2));
///     assert_eq!(path, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);
/// }
/// # Ok::<(), algoscope::Error>(())
/// ```
#[must_use]
pub fn reconstruct_path(
    nodes: &[NodeId],
    next: &[Vec<Option<NodeId>>],
    from: NodeId,
    to: NodeId,
) -> Vec<NodeId> {
    let Some(target) = dense_index(nodes, to) else {
        return Vec::new();
    };

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        let hop = dense_index(nodes, current)
            .and_then(|row| next.get(row))
            .and_then(|row| row.get(target))
            .copied()
            .flatten();
        match hop {
            Some(node) if path.len() <= nodes.len() => {
                path.push(node);
                current = node;
            }
            _ => return Vec::new(),
        }
    }
    path
}
