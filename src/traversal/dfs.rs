use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strum::IntoStaticStr;

use crate::{
    graph::{format_path, Graph, NodeId},
    trace::{StepKind, Trace},
    Result,
};

/// One step of an iterative depth-first search.
#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum DfsStep {
    /// The start node is pushed onto the empty stack
    Start {
        /// Start node
        current: NodeId,
        /// Nodes visited so far
        visited: BTreeSet<NodeId>,
        /// Stack contents, bottom first
        stack: Vec<NodeId>,
    },
    /// `current` was popped and visited for the first time
    Visit {
        /// Popped node
        current: NodeId,
        /// Nodes visited so far, including `current`
        visited: BTreeSet<NodeId>,
        /// Stack contents after the pop, bottom first
        stack: Vec<NodeId>,
    },
    /// An unvisited neighbor of `current` was pushed
    Push {
        /// Node whose neighbor was pushed
        current: NodeId,
        /// Pushed neighbor
        pushed: NodeId,
        /// Nodes visited so far
        visited: BTreeSet<NodeId>,
        /// Stack contents after the push, bottom first
        stack: Vec<NodeId>,
    },
    /// The target was visited; the search stops here
    Found {
        /// Target node
        target: NodeId,
        /// Start-to-target path following the first-discoverer parents
        path: Vec<NodeId>,
        /// Nodes visited so far
        visited: BTreeSet<NodeId>,
    },
    /// The stack ran empty without visiting the target
    NotFound {
        /// Target node
        target: NodeId,
        /// Every node reachable from the start
        visited: BTreeSet<NodeId>,
    },
    /// The search finished
    Complete {
        /// Nodes visited
        visited: BTreeSet<NodeId>,
    },
}

impl StepKind for DfsStep {
    fn tag(&self) -> &'static str {
        self.into()
    }

    fn is_terminal(&self) -> bool {
        matches!(self, DfsStep::Complete { .. } | DfsStep::NotFound { .. })
    }
}

/// Depth-first search from `start`, optionally stopping at `target`.
///
/// Unvisited neighbors are pushed in reverse adjacency order, so they are popped and visited in
/// adjacency order. A node can sit on the stack more than once; it is only visited on its
/// first pop. Its parent is the node that pushed it first and is never overwritten.
///
/// With a target, the trace ends `found, complete` if the target is visited and `notFound`
/// otherwise. Without a target it ends with `complete` once the stack is empty.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if the graph is malformed or does not contain
/// `start` or `target`.
pub fn dfs(graph: &Graph, start: NodeId, target: Option<NodeId>) -> Result<Trace<DfsStep>> {
    graph.validate()?;
    graph.require_node(start, "start")?;
    if let Some(target) = target {
        graph.require_node(target, "target")?;
    }

    let mut trace = Trace::new();
    let mut visited = BTreeSet::new();
    let mut stack = vec![start];
    let mut parent: BTreeMap<NodeId, NodeId> = BTreeMap::new();

    trace.record(
        DfsStep::Start {
            current: start,
            visited: visited.clone(),
            stack: stack.clone(),
        },
        format!("Starting DFS from node {start}"),
    );

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        trace.record(
            DfsStep::Visit {
                current,
                visited: visited.clone(),
                stack: stack.clone(),
            },
            format!("Visiting node {current}"),
        );

        if target == Some(current) {
            let path = reconstruct_path(&parent, start, current);
            let description = format!(
                "Found target node {current}! Path: {}",
                format_path(&path)
            );
            trace.record(
                DfsStep::Found {
                    target: current,
                    path,
                    visited: visited.clone(),
                },
                description,
            );
            break;
        }

        for edge in graph.neighbors(current).iter().rev() {
            let pushed = edge.neighbor;
            if visited.contains(&pushed) {
                continue;
            }
            stack.push(pushed);
            parent.entry(pushed).or_insert(current);
            trace.record(
                DfsStep::Push {
                    current,
                    pushed,
                    visited: visited.clone(),
                    stack: stack.clone(),
                },
                format!("Pushing neighbor {pushed} to stack"),
            );
        }
    }

    match target {
        Some(target) if !visited.contains(&target) => {
            log::debug!("DFS target {target} is not reachable from {start}");
            trace.record(
                DfsStep::NotFound { target, visited },
                format!("Target node {target} not reachable from {start}"),
            );
        }
        _ => {
            let description = format!("DFS completed. Visited {} nodes.", visited.len());
            trace.record(DfsStep::Complete { visited }, description);
        }
    }

    Ok(trace)
}

/// Walks the parent map back from `end` to `start`.
///
/// Every parent was visited before its child was pushed, so the walk always reaches `start`.
fn reconstruct_path(
    parent: &BTreeMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match parent.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Vec::new(),
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

    fn visits(trace: &Trace<DfsStep>) -> Vec<NodeId> {
        trace
            .iter()
            .filter_map(|step| match step.kind() {
                DfsStep::Visit { current, .. } => Some(*current),
                _ => None,
            })
            .collect()
    }

    /// 0 → {1, 2}, 1 → {3}, 2 → {3}
    fn diamond() -> Graph {
        Graph::from_directed_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)])
    }

    #[test]
    fn test_dfs_visits_in_adjacency_order() {
        let trace = dfs(&diamond(), n(0), None).unwrap();
        assert_eq!(visits(&trace), vec![n(0), n(1), n(3), n(2)]);
        assert_eq!(trace.last().unwrap().tag(), "complete");
    }

    #[test]
    fn test_dfs_pushes_in_reverse() {
        let trace = dfs(&diamond(), n(0), None).unwrap();
        match trace[3].kind() {
            DfsStep::Push { pushed, stack, .. } => {
                assert_eq!(*pushed, n(1));
                assert_eq!(stack, &vec![n(2), n(1)]);
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn test_dfs_found_then_complete() {
        let trace = dfs(&diamond(), n(0), Some(n(3))).unwrap();
        let tags = trace.tags();
        assert_eq!(&tags[tags.len() - 2..], &["found", "complete"]);
        match trace[trace.len() - 2].kind() {
            DfsStep::Found { path, .. } => assert_eq!(path, &vec![n(0), n(1), n(3)]),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn test_dfs_first_discoverer_is_parent() {
        // 0 pushes 2 before 1 visits it; the path to 2 goes straight from 0
        let graph = Graph::from_directed_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]);
        let trace = dfs(&graph, n(0), Some(n(2))).unwrap();
        assert_eq!(visits(&trace), vec![n(0), n(1), n(2)]);
        match trace[trace.len() - 2].kind() {
            DfsStep::Found { path, .. } => assert_eq!(path, &vec![n(0), n(2)]),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn test_dfs_start_is_target() {
        let trace = dfs(&diamond(), n(0), Some(n(0))).unwrap();
        assert_eq!(trace.tags(), vec!["start", "visit", "found", "complete"]);
    }

    #[test]
    fn test_dfs_not_found() {
        let graph = Graph::from_directed_edges(3, &[(0, 1, 1.0)]);
        let trace = dfs(&graph, n(0), Some(n(2))).unwrap();
        assert_eq!(trace.last().unwrap().tag(), "notFound");
        assert!(trace.is_finished());
    }

    #[test]
    fn test_dfs_rejects_unknown_target() {
        assert!(dfs(&diamond(), n(0), Some(n(9))).is_err());
    }
}
