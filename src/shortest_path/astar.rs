use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{format_path, Distance, Graph, NodeId},
    shortest_path::{distance_of, path_to, DistanceMap, PredecessorMap},
    trace::{StepKind, Trace},
    Result,
};

/// One step of an A* search.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AStarStep {
    /// Search initialized with the start node in the open set
    Init {
        /// Start node
        start: NodeId,
        /// Goal node
        goal: NodeId,
        /// Open set
        open_set: BTreeSet<NodeId>,
    },
    /// `current` had the lowest f-score and was moved to the closed set
    Explore {
        /// Expanded node
        current: NodeId,
        /// Cost from the start to `current`
        g_score: Distance,
        /// `g_score` plus the heuristic estimate
        f_score: Distance,
        /// Open set after removing `current`
        open_set: BTreeSet<NodeId>,
        /// Closed set including `current`
        closed_set: BTreeSet<NodeId>,
        /// Cost from the start of every node reached so far
        g_scores: DistanceMap,
    },
    /// The edge `current → neighbor` was evaluated
    CheckNeighbor {
        /// Expanded node
        current: NodeId,
        /// Edge target
        neighbor: NodeId,
        /// Edge weight
        edge_weight: f64,
        /// Cost of reaching `neighbor` through `current`
        tentative_g_score: Distance,
        /// Best known cost of `neighbor` before the check
        current_g_score: Distance,
        /// Open set
        open_set: BTreeSet<NodeId>,
        /// Closed set
        closed_set: BTreeSet<NodeId>,
    },
    /// A cheaper route to `neighbor` was recorded and `neighbor` is in the open set
    Update {
        /// Expanded node
        current: NodeId,
        /// Improved node
        neighbor: NodeId,
        /// New cost from the start
        new_g_score: Distance,
        /// New estimated total cost
        new_f_score: Distance,
        /// Open set including `neighbor`
        open_set: BTreeSet<NodeId>,
        /// Closed set
        closed_set: BTreeSet<NodeId>,
        /// Cost from the start of every node reached so far
        g_scores: DistanceMap,
    },
    /// The goal had the lowest f-score
    Found {
        /// Goal node
        current: NodeId,
        /// Start-to-goal path
        path: Vec<NodeId>,
        /// Cost of `path`
        g_score: Distance,
        /// Open set
        open_set: BTreeSet<NodeId>,
        /// Closed set
        closed_set: BTreeSet<NodeId>,
    },
    /// Search succeeded
    Complete {
        /// Start-to-goal path
        path: Vec<NodeId>,
        /// Cost of `path`
        cost: Distance,
    },
    /// The open set ran empty before the goal was reached
    NoPath {
        /// Goal node
        goal: NodeId,
        /// Open set
        open_set: BTreeSet<NodeId>,
        /// Closed set
        closed_set: BTreeSet<NodeId>,
    },
}

impl StepKind for AStarStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_comparison(&self) -> bool {
        matches!(self, AStarStep::CheckNeighbor { .. })
    }

    fn is_update(&self) -> bool {
        matches!(self, AStarStep::Update { .. })
    }

    fn is_terminal(&self) -> bool {
        matches!(self, AStarStep::Complete { .. } | AStarStep::NoPath { .. })
    }
}

/// Heuristic estimate between two nodes: the absolute difference of their ids.
///
/// This carries no geometric meaning and is not admissible for arbitrary graphs, so the
/// path found is not guaranteed to be the cheapest one. It only matches true costs on graphs
/// whose ids are laid out along unit-weight paths.
fn heuristic(node: NodeId, goal: NodeId) -> f64 {
    node.distance_to(goal) as f64
}

/// A* search from `start` to `goal`, or to the largest node id when `goal` is `None`.
///
/// The node expanded next is the first open node, in ascending id order, with the strictly
/// lowest f-score. Closed nodes are never reopened. The trace ends `found, complete` when the
/// goal is selected for expansion and `noPath` when the open set empties first.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed or does not contain
/// `start` or `goal`.
pub fn astar(graph: &Graph, start: NodeId, goal: Option<NodeId>) -> Result<Trace<AStarStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;
    let goal = match goal {
        Some(goal) => goal,
        None => graph
            .last_node()
            .ok_or_else(|| invalid_input!("graph is empty but a goal node is required"))?,
    };
    graph.require_node(goal, "goal")?;

    let mut trace = Trace::new();
    let mut open_set = BTreeSet::from([start]);
    let mut closed_set = BTreeSet::new();
    let mut came_from = PredecessorMap::new();
    let mut g_scores = DistanceMap::from([(start, Distance::ZERO)]);
    let mut f_scores: BTreeMap<NodeId, Distance> =
        BTreeMap::from([(start, Distance::new(heuristic(start, goal)))]);

    trace.record(
        AStarStep::Init {
            start,
            goal,
            open_set: open_set.clone(),
        },
        format!("Starting A* search from {start} to {goal}"),
    );

    while let Some(current) = lowest_f_score(&open_set, &f_scores) {
        let g_score = distance_of(&g_scores, current);

        if current == goal {
            let path = path_to(&came_from, start, goal);
            let description = format!(
                "Found path to {current}! Cost: {g_score}, Path: {}",
                format_path(&path)
            );
            trace.record(
                AStarStep::Found {
                    current,
                    path: path.clone(),
                    g_score,
                    open_set: open_set.clone(),
                    closed_set: closed_set.clone(),
                },
                description,
            );
            trace.record(
                AStarStep::Complete {
                    path,
                    cost: g_score,
                },
                format!("A* complete. Shortest path cost from {start} to {goal} is {g_score}"),
            );
            return Ok(trace);
        }

        open_set.remove(&current);
        closed_set.insert(current);
        let f_score = distance_of(&f_scores, current);
        trace.record(
            AStarStep::Explore {
                current,
                g_score,
                f_score,
                open_set: open_set.clone(),
                closed_set: closed_set.clone(),
                g_scores: g_scores.clone(),
            },
            format!("Exploring node {current} (g={g_score}, f={f_score})"),
        );

        for edge in graph.neighbors(current) {
            let neighbor = edge.neighbor;
            if closed_set.contains(&neighbor) {
                continue;
            }

            let tentative_g_score = g_score + edge.weight;
            let current_g_score = distance_of(&g_scores, neighbor);
            trace.record(
                AStarStep::CheckNeighbor {
                    current,
                    neighbor,
                    edge_weight: edge.weight,
                    tentative_g_score,
                    current_g_score,
                    open_set: open_set.clone(),
                    closed_set: closed_set.clone(),
                },
                format!(
                    "Checking neighbor {neighbor}: {g_score} + {} = {tentative_g_score}",
                    edge.weight
                ),
            );

            if tentative_g_score < current_g_score {
                let new_f_score = tentative_g_score + heuristic(neighbor, goal);
                came_from.insert(neighbor, current);
                g_scores.insert(neighbor, tentative_g_score);
                f_scores.insert(neighbor, new_f_score);
                open_set.insert(neighbor);
                trace.record(
                    AStarStep::Update {
                        current,
                        neighbor,
                        new_g_score: tentative_g_score,
                        new_f_score,
                        open_set: open_set.clone(),
                        closed_set: closed_set.clone(),
                        g_scores: g_scores.clone(),
                    },
                    format!(
                        "Updated scores for {neighbor}: g={tentative_g_score}, f={new_f_score}"
                    ),
                );
            }
        }
    }

    log::debug!("A* found no path from {start} to {goal}");
    trace.record(
        AStarStep::NoPath {
            goal,
            open_set,
            closed_set,
        },
        format!("No path found from {start} to target node {goal}!"),
    );

    Ok(trace)
}

/// First open node, in ascending id order, with the strictly lowest f-score.
fn lowest_f_score(
    open_set: &BTreeSet<NodeId>,
    f_scores: &BTreeMap<NodeId, Distance>,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, Distance)> = None;
    for &node in open_set {
        let f_score = distance_of(f_scores, node);
        if best.map_or(true, |(_, lowest)| f_score < lowest) {
            best = Some((node, f_score));
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

    #[test]
    fn test_astar_finds_path_on_line() {
        let graph = Graph::path(4, 1.0);
        let trace = astar(&graph, n(0), Some(n(3))).unwrap();
        let tags = trace.tags();
        assert_eq!(&tags[tags.len() - 2..], &["found", "complete"]);
        match trace.last().unwrap().kind() {
            AStarStep::Complete { path, cost } => {
                assert_eq!(path, &vec![n(0), n(1), n(2), n(3)]);
                assert_eq!(*cost, Distance::new(3.0));
            }
            other => panic!("unexpected terminal step {other:?}"),
        }
    }

    #[test]
    fn test_astar_default_goal_is_largest_id() {
        let graph = Graph::path(3, 2.0);
        let trace = astar(&graph, n(0), None).unwrap();
        match trace[0].kind() {
            AStarStep::Init { goal, .. } => assert_eq!(*goal, n(2)),
            other => panic!("unexpected step {other:?}"),
        }
        assert_eq!(trace.last().unwrap().tag(), "complete");
    }

    #[test]
    fn test_astar_no_path() {
        let graph = Graph::from_directed_edges(3, &[(0, 1, 1.0)]);
        let trace = astar(&graph, n(0), Some(n(2))).unwrap();
        assert_eq!(trace.last().unwrap().tag(), "noPath");
        assert!(!trace.tags().contains(&"found"));
        match trace.last().unwrap().kind() {
            AStarStep::NoPath { closed_set, .. } => {
                assert_eq!(closed_set, &BTreeSet::from([n(0), n(1)]));
            }
            other => panic!("unexpected terminal step {other:?}"),
        }
    }

    #[test]
    fn test_astar_start_is_goal() {
        let trace = astar(&Graph::with_nodes(2), n(1), Some(n(1))).unwrap();
        assert_eq!(trace.tags(), vec!["init", "found", "complete"]);
    }

    #[test]
    fn test_astar_grid() {
        let grid = Graph::grid(3, 3);
        let trace = astar(&grid, n(0), Some(n(8))).unwrap();
        match trace.last().unwrap().kind() {
            AStarStep::Complete { path, cost } => {
                assert_eq!(*cost, Distance::new(4.0));
                assert_eq!(path.first(), Some(&n(0)));
                assert_eq!(path.last(), Some(&n(8)));
                assert_eq!(path.len(), 5);
            }
            other => panic!("unexpected terminal step {other:?}"),
        }
    }

    #[test]
    fn test_astar_rejects_unknown_goal() {
        assert!(astar(&Graph::with_nodes(2), n(0), Some(n(4))).is_err());
    }
}
