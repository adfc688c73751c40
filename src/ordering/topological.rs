use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{format_path, Graph, NodeId},
    trace::{StepKind, Trace},
    Result,
};

/// One step of Kahn's topological sort.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TopologicalStep {
    /// In-degrees computed
    Init {
        /// Number of incoming adjacency entries of every node
        in_degree: BTreeMap<NodeId, usize>,
    },
    /// `node` reached in-degree zero and joined the queue
    Enqueue {
        /// Enqueued node
        node: NodeId,
        /// Queue contents, front first
        queue: Vec<NodeId>,
    },
    /// `current` was dequeued and appended to the order
    Process {
        /// Dequeued node
        current: NodeId,
        /// Order so far
        result: Vec<NodeId>,
        /// Queue contents after the dequeue
        queue: Vec<NodeId>,
        /// Processed nodes
        visited: BTreeSet<NodeId>,
    },
    /// The edge `current → neighbor` was removed
    Reduce {
        /// Processed node
        current: NodeId,
        /// Edge target
        neighbor: NodeId,
        /// In-degree of `neighbor` after the removal
        new_degree: usize,
        /// In-degrees after the removal
        in_degree: BTreeMap<NodeId, usize>,
    },
    /// The queue emptied before every node was processed; `result` is not a valid order
    Cycle {
        /// Nodes processed before the queue emptied
        result: Vec<NodeId>,
        /// Nodes left with a positive in-degree
        remaining: BTreeSet<NodeId>,
    },
    /// Every node was processed
    Complete {
        /// Topological order
        result: Vec<NodeId>,
        /// Processed nodes
        visited: BTreeSet<NodeId>,
    },
}

impl StepKind for TopologicalStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_terminal(&self) -> bool {
        matches!(
            self,
            TopologicalStep::Complete { .. } | TopologicalStep::Cycle { .. }
        )
    }
}

/// Kahn's algorithm over the directed adjacency entries of `graph`.
///
/// The queue is seeded with every zero in-degree node in ascending id order. Processing a node
/// removes its outgoing entries in adjacency order and enqueues every neighbor whose in-degree
/// drops to zero. Parallel entries count separately, so a neighbor is enqueued once, when its
/// last incoming entry is removed.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed.
pub fn topological_sort(graph: &Graph) -> Result<Trace<TopologicalStep>> {
    graph.validate()?;

    let mut in_degree: BTreeMap<NodeId, usize> = graph.nodes().map(|node| (node, 0)).collect();
    for edge in graph.edges() {
        *in_degree.entry(edge.to).or_default() += 1;
    }

    let mut trace = Trace::new();
    trace.record(
        TopologicalStep::Init {
            in_degree: in_degree.clone(),
        },
        "Calculated in-degree for all nodes",
    );

    let mut queue = VecDeque::new();
    for (&node, &degree) in &in_degree {
        if degree == 0 {
            queue.push_back(node);
            trace.record(
                TopologicalStep::Enqueue {
                    node,
                    queue: queue.iter().copied().collect(),
                },
                format!("Node {node} has in-degree 0, added to queue"),
            );
        }
    }

    let mut result = Vec::with_capacity(in_degree.len());
    let mut visited = BTreeSet::new();
    while let Some(current) = queue.pop_front() {
        result.push(current);
        visited.insert(current);
        trace.record(
            TopologicalStep::Process {
                current,
                result: result.clone(),
                queue: queue.iter().copied().collect(),
                visited: visited.clone(),
            },
            format!("Processing node {current}, added to topological order"),
        );

        for edge in graph.neighbors(current) {
            let neighbor = edge.neighbor;
            let Some(degree) = in_degree.get_mut(&neighbor) else {
                continue;
            };
            *degree = degree.saturating_sub(1);
            let new_degree = *degree;
            trace.record(
                TopologicalStep::Reduce {
                    current,
                    neighbor,
                    new_degree,
                    in_degree: in_degree.clone(),
                },
                format!("Reduced in-degree of node {neighbor} to {new_degree}"),
            );

            if new_degree == 0 && !visited.contains(&neighbor) && !queue.contains(&neighbor) {
                queue.push_back(neighbor);
                trace.record(
                    TopologicalStep::Enqueue {
                        node: neighbor,
                        queue: queue.iter().copied().collect(),
                    },
                    format!("Node {neighbor} now has in-degree 0, added to queue"),
                );
            }
        }
    }

    if result.len() < in_degree.len() {
        let remaining: BTreeSet<NodeId> = in_degree
            .keys()
            .filter(|node| !visited.contains(node))
            .copied()
            .collect();
        log::debug!(
            "topological sort stopped with {} of {} nodes, graph has a cycle",
            result.len(),
            in_degree.len()
        );
        trace.record(
            TopologicalStep::Cycle { result, remaining },
            "Graph contains a cycle! Not all nodes processed.",
        );
    } else {
        let description = format!("Topological sort completed: [{}]", format_path(&result));
        trace.record(TopologicalStep::Complete { result, visited }, description);
    }

    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: usize) -> NodeId {
        NodeId::new(id)
    }

    fn order(trace: &Trace<TopologicalStep>) -> Option<Vec<NodeId>> {
        match trace.last().unwrap().kind() {
            TopologicalStep::Complete { result, .. } => Some(result.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_topological_dag() {
        let graph = Graph::from_directed_edges(
            6,
            &[
                (5, 2, 1.0),
                (5, 0, 1.0),
                (4, 0, 1.0),
                (4, 1, 1.0),
                (2, 3, 1.0),
                (3, 1, 1.0),
            ],
        );
        let trace = topological_sort(&graph).unwrap();
        assert_eq!(order(&trace), Some(vec![n(4), n(5), n(2), n(0), n(3), n(1)]));
    }

    #[test]
    fn test_topological_seed_order_is_ascending() {
        let trace = topological_sort(&Graph::with_nodes(3)).unwrap();
        let enqueued: Vec<NodeId> = trace
            .iter()
            .filter_map(|step| match step.kind() {
                TopologicalStep::Enqueue { node, .. } => Some(*node),
                _ => None,
            })
            .collect();
        assert_eq!(enqueued, vec![n(0), n(1), n(2)]);
        assert_eq!(order(&trace), Some(vec![n(0), n(1), n(2)]));
    }

    #[test]
    fn test_topological_cycle() {
        let graph = Graph::from_directed_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0), (2, 3, 1.0)]);
        let trace = topological_sort(&graph).unwrap();
        match trace.last().unwrap().kind() {
            TopologicalStep::Cycle { result, remaining } => {
                assert_eq!(result, &vec![n(0)]);
                assert_eq!(remaining, &BTreeSet::from([n(1), n(2), n(3)]));
            }
            other => panic!("unexpected terminal step {other:?}"),
        }
        assert!(!trace.tags().contains(&"complete"));
    }

    #[test]
    fn test_topological_parallel_entries() {
        let graph = Graph::from_directed_edges(2, &[(0, 1, 1.0), (0, 1, 2.0)]);
        let trace = topological_sort(&graph).unwrap();
        assert_eq!(order(&trace), Some(vec![n(0), n(1)]));
        let enqueues = trace.iter().filter(|s| s.tag() == "enqueue").count();
        assert_eq!(enqueues, 2);
    }
}
