//! Exact travelling salesman tours by dynamic programming over visited subsets.
//!
//! `dp[mask][last]` is the cheapest walk that starts at the start node, visits exactly the
//! nodes whose bits are set in `mask` and ends at `last`. Bits are dense node positions
//! (`bit r` is the `r`-th smallest id), so both the table and the number of recorded steps
//! grow as `n² · 2ⁿ`.

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{dense_index, format_path, Distance, Graph, NodeId},
    trace::{StepKind, Trace},
    EngineLimits, Result,
};

/// One step of the bitmask TSP.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TspStep {
    /// Symmetric cost matrix built
    Init {
        /// Node id of every bit position
        nodes: Vec<NodeId>,
        /// Start and end of the tour
        start: NodeId,
    },
    /// Base case `dp[{start}][start] = 0`
    DpInit {
        /// Subset holding only the start node
        mask: u32,
        /// Start node
        current_node: NodeId,
        /// Zero
        cost: Distance,
    },
    /// Extending the walk in `dp[mask][last]` to `next` is evaluated
    Consider {
        /// Visited subset before the extension
        mask: u32,
        /// Visited subset including `next`
        new_mask: u32,
        /// Current end of the walk
        last: NodeId,
        /// Node appended to the walk
        next: NodeId,
        /// Cost of the walk before the extension
        current_cost: Distance,
        /// Cost of the edge `last - next`
        edge_cost: f64,
        /// Cost of the extended walk
        new_cost: Distance,
    },
    /// `dp[mask][node]` improved
    #[serde(rename = "updateDP")]
    #[strum(serialize = "updateDP")]
    UpdateDp {
        /// Visited subset
        mask: u32,
        /// End of the walk
        node: NodeId,
        /// New cheapest cost
        new_cost: Distance,
        /// Node before `node` on the walk
        parent: NodeId,
    },
    /// Closing the full walk ending at `last_node` back to the start is evaluated
    FinalConsider {
        /// End of the full walk
        last_node: NodeId,
        /// Cost of the full walk
        cost_to_end: Distance,
        /// Cost of the edge back to the start, infinite if there is none
        return_cost: Distance,
        /// Tour cost
        total_cost: Distance,
    },
    /// The table is complete
    Complete {
        /// Cheapest tour cost, infinite when no Hamiltonian cycle exists
        min_cost: Distance,
        /// Tour starting and ending at the start node, empty when there is none
        path: Vec<NodeId>,
    },
}

impl StepKind for TspStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_comparison(&self) -> bool {
        matches!(self, TspStep::Consider { .. } | TspStep::FinalConsider { .. })
    }

    fn is_update(&self) -> bool {
        matches!(self, TspStep::UpdateDp { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, TspStep::Complete { .. })
    }
}

/// Cheapest Hamiltonian cycle through every node, starting and ending at `start`.
///
/// Edges are treated as undirected: an adjacency entry in either direction makes the pair
/// adjacent, and parallel entries keep the cheapest weight. Masks and walk ends are iterated
/// in ascending order and improvements must be strict, so ties keep the first walk found.
/// When no tour exists (including the single-node graph, which has no edge to close a cycle)
/// the `complete` step reports an infinite cost and an empty path.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed, does not contain
/// `start`, or has more than [`EngineLimits::TSP_HARD_LIMIT`] nodes.
pub fn tsp(graph: &Graph, start: NodeId) -> Result<Trace<TspStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;

    let nodes = graph.dense_nodes();
    let n = nodes.len();
    if n > EngineLimits::TSP_HARD_LIMIT {
        return Err(invalid_input!(
            "TSP supports at most {} nodes, graph has {}",
            EngineLimits::TSP_HARD_LIMIT,
            n
        ));
    }
    let Some(origin) = dense_index(&nodes, start) else {
        return Err(invalid_input!("start node {} is not part of the graph", start));
    };

    let mut cost = vec![vec![f64::INFINITY; n]; n];
    for edge in graph.edges() {
        if let (Some(i), Some(j)) = (dense_index(&nodes, edge.from), dense_index(&nodes, edge.to)) {
            let weight = cost[i][j].min(edge.weight);
            cost[i][j] = weight;
            cost[j][i] = weight;
        }
    }

    let mut trace = Trace::new();
    trace.record(
        TspStep::Init {
            nodes: nodes.clone(),
            start,
        },
        format!("Starting TSP with {n} cities, starting at {start}"),
    );

    let subsets = 1_usize << n;
    let mut dp = vec![vec![Distance::INFINITY; n]; subsets];
    let mut parent: Vec<Vec<Option<usize>>> = vec![vec![None; n]; subsets];

    let base = 1_usize << origin;
    dp[base][origin] = Distance::ZERO;
    trace.record(
        TspStep::DpInit {
            mask: base as u32,
            current_node: start,
            cost: Distance::ZERO,
        },
        format!("DP initialized: dp[{base:b}][{start}] = 0"),
    );

    for mask in 1..subsets {
        for last in 0..n {
            let current_cost = dp[mask][last];
            if mask & (1 << last) == 0 || !current_cost.is_finite() {
                continue;
            }
            for next in 0..n {
                let edge_cost = cost[last][next];
                if mask & (1 << next) != 0 || !edge_cost.is_finite() {
                    continue;
                }

                let new_mask = mask | (1 << next);
                let new_cost = current_cost + edge_cost;
                trace.record(
                    TspStep::Consider {
                        mask: mask as u32,
                        new_mask: new_mask as u32,
                        last: nodes[last],
                        next: nodes[next],
                        current_cost,
                        edge_cost,
                        new_cost,
                    },
                    format!(
                        "Considering path: mask={mask:b} → {}, cost={current_cost} + {edge_cost} = {new_cost}",
                        nodes[next]
                    ),
                );

                if new_cost < dp[new_mask][next] {
                    dp[new_mask][next] = new_cost;
                    parent[new_mask][next] = Some(last);
                    trace.record(
                        TspStep::UpdateDp {
                            mask: new_mask as u32,
                            node: nodes[next],
                            new_cost,
                            parent: nodes[last],
                        },
                        format!("Updated dp[{new_mask:b}][{}] = {new_cost}", nodes[next]),
                    );
                }
            }
        }
    }

    let full = subsets - 1;
    let mut best: Option<(usize, Distance)> = None;
    for last in (0..n).filter(|&last| last != origin) {
        let cost_to_end = dp[full][last];
        let return_cost = Distance::new(cost[last][origin]);
        let total_cost = cost_to_end + return_cost;
        trace.record(
            TspStep::FinalConsider {
                last_node: nodes[last],
                cost_to_end,
                return_cost,
                total_cost,
            },
            format!(
                "Complete path ending at {}: {cost_to_end} + {return_cost} = {total_cost}",
                nodes[last]
            ),
        );
        if total_cost.is_finite() && best.map_or(true, |(_, lowest)| total_cost < lowest) {
            best = Some((last, total_cost));
        }
    }

    match best {
        Some((last, min_cost)) => {
            let path = rebuild_tour(&parent, &nodes, full, last, origin);
            let description = format!(
                "TSP completed! Minimum cost: {min_cost}, Path: {}",
                format_path(&path)
            );
            trace.record(TspStep::Complete { min_cost, path }, description);
        }
        None => {
            log::debug!("TSP found no Hamiltonian cycle through {n} nodes");
            trace.record(
                TspStep::Complete {
                    min_cost: Distance::INFINITY,
                    path: Vec::new(),
                },
                "No Hamiltonian cycle found!",
            );
        }
    }

    Ok(trace)
}

/// Follows the parent table back from `dp[full][last]` and closes the tour at the start.
fn rebuild_tour(
    parent: &[Vec<Option<usize>>],
    nodes: &[NodeId],
    full: usize,
    last: usize,
    origin: usize,
) -> Vec<NodeId> {
    let mut path = Vec::with_capacity(nodes.len() + 1);
    let mut mask = full;
    let mut current = Some(last);
    while let Some(node) = current {
        path.push(nodes[node]);
        current = parent[mask][node];
        mask ^= 1 << node;
    }
    path.reverse();
    path.push(nodes[origin]);
    path
}
