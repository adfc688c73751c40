use std::collections::{BTreeSet, VecDeque};

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{Graph, NodeId},
    trace::{StepKind, Trace},
    Result,
};

/// One step of a breadth-first search.
///
/// `visited` holds every node discovered so far (nodes are marked on enqueue), `frontier` the
/// queue contents front to back and `order` the nodes dequeued so far.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum BfsStep {
    /// The start node is marked and enqueued
    Start {
        /// Node being handled
        current: NodeId,
        /// Nodes marked so far
        visited: BTreeSet<NodeId>,
        /// Queue contents, front first
        frontier: Vec<NodeId>,
        /// Nodes dequeued so far, in order
        order: Vec<NodeId>,
    },
    /// `current` was dequeued at BFS depth `level`
    Explore {
        /// Node being handled
        current: NodeId,
        /// Distance in edges from the start node
        level: usize,
        /// Nodes marked so far
        visited: BTreeSet<NodeId>,
        /// Queue contents, front first
        frontier: Vec<NodeId>,
        /// Nodes dequeued so far, in order
        order: Vec<NodeId>,
    },
    /// `discovered` was reached from `current` for the first time and enqueued
    Discover {
        /// Node being handled
        current: NodeId,
        /// Newly discovered node
        discovered: NodeId,
        /// Nodes marked so far
        visited: BTreeSet<NodeId>,
        /// Queue contents, front first
        frontier: Vec<NodeId>,
        /// Nodes dequeued so far, in order
        order: Vec<NodeId>,
    },
    /// The frontier is empty
    Complete {
        /// Number of BFS levels reached
        levels: usize,
        /// Nodes marked so far
        visited: BTreeSet<NodeId>,
        /// Nodes dequeued so far, in order
        order: Vec<NodeId>,
    },
}

impl StepKind for BfsStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_terminal(&self) -> bool {
        matches!(self, BfsStep::Complete { .. })
    }
}

/// Breadth-first search from `start`.
///
/// Neighbors are discovered in adjacency order. A node is enqueued at most once, since it is
/// marked visited at the moment it is enqueued.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed or does not contain
/// `start`.
///
/// # Examples
///
/// ```rust
/// use algoscope::{traversal::bfs, Graph, NodeId};
///
/// let graph = Graph::path(3, 1.0);
/// let trace = bfs(&graph, NodeId::new(0))?;
/// assert_eq!(trace.tags().last(), Some(&"complete"));
/// # Ok::<(), algoscope::Error>(())
/// ```
pub fn bfs(graph: &Graph, start: NodeId) -> Result<Trace<BfsStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;

    let mut trace = Trace::new();
    let mut visited = BTreeSet::from([start]);
    let mut queue = VecDeque::from([(start, 0_usize)]);
    let mut order = Vec::new();

    let frontier = |queue: &VecDeque<(NodeId, usize)>| -> Vec<NodeId> {
        queue.iter().map(|&(node, _)| node).collect()
    };

    trace.record(
        BfsStep::Start {
            current: start,
            visited: visited.clone(),
            frontier: frontier(&queue),
            order: order.clone(),
        },
        format!("Starting BFS from node {start}"),
    );

    let mut deepest = 0;
    while let Some((current, level)) = queue.pop_front() {
        order.push(current);
        deepest = deepest.max(level);
        trace.record(
            BfsStep::Explore {
                current,
                level,
                visited: visited.clone(),
                frontier: frontier(&queue),
                order: order.clone(),
            },
            format!("Exploring node {current} (level {level})"),
        );

        for edge in graph.neighbors(current) {
            let discovered = edge.neighbor;
            if !visited.insert(discovered) {
                continue;
            }
            queue.push_back((discovered, level + 1));
            trace.record(
                BfsStep::Discover {
                    current,
                    discovered,
                    visited: visited.clone(),
                    frontier: frontier(&queue),
                    order: order.clone(),
                },
                format!("Discovered neighbor {discovered} from {current}"),
            );
        }
    }

    let levels = deepest + 1;
    trace.record(
        BfsStep::Complete {
            levels,
            visited: visited.clone(),
            order,
        },
        format!(
            "BFS complete! Visited {} nodes across {levels} level(s)",
            visited.len()
        ),
    );

    Ok(trace)
}
