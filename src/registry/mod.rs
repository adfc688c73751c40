//! Name-based dispatch to the trace engines.
//!
//! The [`Registry`] is built once, is immutable afterwards, and is passed by reference to
//! whatever dispatches runs. It maps every [`AlgorithmName`] to its engine and its static
//! [`AlgorithmMetadata`], checks the input shape and the configured [`EngineLimits`], and
//! wraps the resulting trace in a [`StepList`].
//!
//! # Examples
//!
//! ```rust
//! use algoscope::{AlgorithmInput, AlgorithmName, Graph, NodeId, Registry, RunParams};
//!
//! let registry = Registry::new();
//!
//! let steps = registry.run(
//!     AlgorithmName::Quick,
//!     &AlgorithmInput::from(vec![5.0, 3.0, 8.0, 1.0]),
//!     &RunParams::default(),
//! )?;
//! assert_eq!(steps.last_tag(), Some("complete"));
//!
//! let graph = Graph::grid(3, 3);
//! let params = RunParams::new().with_start(NodeId::new(0)).with_end(NodeId::new(8));
//! let steps = registry.run_named("AStar", &AlgorithmInput::from(graph), &params)?;
//! assert!(steps.is_finished());
//! # Ok::<(), algoscope::Error>(())
//! ```

mod metadata;

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

pub use metadata::{AlgorithmFamily, AlgorithmMetadata, AlgorithmName};

use crate::{
    graph::{Graph, NodeId},
    ordering::{self, TopologicalStep, TspStep},
    shortest_path::{self, AStarStep, BellmanFordStep, DijkstraStep, FloydWarshallStep},
    sorting::{self, SortStep},
    spanning_tree::{self, KruskalStep, PrimStep},
    trace::{Trace, TraceStats},
    traversal::{self, BfsStep, DfsStep},
    EngineLimits, Error, Result,
};

/// Data an algorithm runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlgorithmInput {
    /// Values for a sorting engine
    Array(Vec<f64>),
    /// Graph for a graph engine
    Graph(Graph),
}

impl AlgorithmInput {
    /// Number of array elements or graph nodes.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            AlgorithmInput::Array(values) => values.len(),
            AlgorithmInput::Graph(graph) => graph.node_count(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AlgorithmInput::Array(_) => "array",
            AlgorithmInput::Graph(_) => "graph",
        }
    }
}

impl From<Vec<f64>> for AlgorithmInput {
    fn from(values: Vec<f64>) -> Self {
        AlgorithmInput::Array(values)
    }
}

impl From<&[f64]> for AlgorithmInput {
    fn from(values: &[f64]) -> Self {
        AlgorithmInput::Array(values.to_vec())
    }
}

impl From<Graph> for AlgorithmInput {
    fn from(graph: Graph) -> Self {
        AlgorithmInput::Graph(graph)
    }
}

/// Optional start and end nodes of a graph run.
///
/// Without a start, engines that need one begin at the smallest node id. Without an end, DFS
/// explores the whole component and A* targets the largest node id. Engines that do not use
/// a parameter ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Start node
    pub start: Option<NodeId>,
    /// End (target) node
    pub end: Option<NodeId>,
}

impl RunParams {
    /// Creates parameters with neither start nor end.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start node.
    #[must_use]
    pub fn with_start(mut self, start: NodeId) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end node.
    #[must_use]
    pub fn with_end(mut self, end: NodeId) -> Self {
        self.end = Some(end);
        self
    }
}

/// The trace of one registry run, typed by engine.
///
/// Serializes as the bare array of steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StepList {
    /// Any of the six sorting engines
    Sorting(Trace<SortStep<f64>>),
    /// Breadth-first search
    Bfs(Trace<BfsStep>),
    /// Depth-first search
    Dfs(Trace<DfsStep>),
    /// Dijkstra
    Dijkstra(Trace<DijkstraStep>),
    /// Bellman-Ford
    BellmanFord(Trace<BellmanFordStep>),
    /// A*
    AStar(Trace<AStarStep>),
    /// Floyd-Warshall
    FloydWarshall(Trace<FloydWarshallStep>),
    /// Prim
    Prim(Trace<PrimStep>),
    /// Kruskal
    Kruskal(Trace<KruskalStep>),
    /// Topological sort
    Topological(Trace<TopologicalStep>),
    /// Travelling salesman
    Tsp(Trace<TspStep>),
}

/// Evaluates `$body` with `$trace` bound to the inner trace of any [`StepList`] variant.
macro_rules! with_trace {
    ($list:expr, $trace:ident => $body:expr) => {
        match $list {
            StepList::Sorting($trace) => $body,
            StepList::Bfs($trace) => $body,
            StepList::Dfs($trace) => $body,
            StepList::Dijkstra($trace) => $body,
            StepList::BellmanFord($trace) => $body,
            StepList::AStar($trace) => $body,
            StepList::FloydWarshall($trace) => $body,
            StepList::Prim($trace) => $body,
            StepList::Kruskal($trace) => $body,
            StepList::Topological($trace) => $body,
            StepList::Tsp($trace) => $body,
        }
    };
}

impl StepList {
    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        with_trace!(self, trace => trace.len())
    }

    /// Returns `true` if the list holds no steps. Never the case for a registry run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        with_trace!(self, trace => trace.is_empty())
    }

    /// Statistics over the whole trace.
    #[must_use]
    pub fn stats(&self) -> TraceStats {
        with_trace!(self, trace => trace.stats())
    }

    /// Tags of all steps, in order.
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        with_trace!(self, trace => trace.tags())
    }

    /// Tag of the final step.
    #[must_use]
    pub fn last_tag(&self) -> Option<&'static str> {
        with_trace!(self, trace => trace.last().map(|step| step.tag()))
    }

    /// `(tag, description)` of every step, in order.
    #[must_use]
    pub fn summaries(&self) -> Vec<(&'static str, &str)> {
        with_trace!(self, trace => trace.iter().map(|step| (step.tag(), step.description())).collect())
    }

    /// Returns `true` if the trace ends with a terminal step.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        with_trace!(self, trace => trace.is_finished())
    }
}

type Engine = fn(&AlgorithmInput, &RunParams) -> Result<StepList>;

#[derive(Clone, Copy)]
struct Entry {
    metadata: AlgorithmMetadata,
    engine: Engine,
}

/// Immutable lookup table from algorithm name to engine and metadata.
#[derive(Clone)]
pub struct Registry {
    entries: BTreeMap<AlgorithmName, Entry>,
    limits: EngineLimits,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("algorithms", &self.entries.keys().collect::<Vec<_>>())
            .field("limits", &self.limits)
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry holding every algorithm, guarded by [`EngineLimits::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(EngineLimits::default())
    }

    /// Creates a registry holding every algorithm, guarded by `limits`.
    #[must_use]
    pub fn with_limits(limits: EngineLimits) -> Self {
        let entries = AlgorithmName::iter()
            .map(|name| {
                let entry = Entry {
                    metadata: name.metadata(),
                    engine: engine_for(name),
                };
                (name, entry)
            })
            .collect();
        Registry { entries, limits }
    }

    /// The limits checked before every run.
    #[must_use]
    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    /// Registered algorithms in canonical order.
    pub fn algorithms(&self) -> impl Iterator<Item = &AlgorithmMetadata> + '_ {
        self.entries.values().map(|entry| &entry.metadata)
    }

    /// Metadata of `name`.
    #[must_use]
    pub fn metadata(&self, name: AlgorithmName) -> Option<&AlgorithmMetadata> {
        self.entries.get(&name).map(|entry| &entry.metadata)
    }

    /// Resolves an identifier such as `"BellmanFord"` (any ASCII case).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] carrying `name` unchanged if no algorithm matches.
    pub fn resolve(&self, name: &str) -> Result<AlgorithmName> {
        name.parse::<AlgorithmName>()
            .ok()
            .filter(|parsed| self.entries.contains_key(parsed))
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
    }

    /// Runs `name` on `input`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] if `name` is not registered, or
    /// [`Error::InvalidInput`] if the input has the wrong shape for the algorithm, exceeds
    /// the configured limits, or is rejected by the engine. No step is produced on error.
    pub fn run(
        &self,
        name: AlgorithmName,
        input: &AlgorithmInput,
        params: &RunParams,
    ) -> Result<StepList> {
        let entry = self
            .entries
            .get(&name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))?;

        self.check_input(name, input)?;
        log::debug!(
            "running {} on {} with {} element(s)",
            name,
            input.kind(),
            input.size()
        );

        let steps = (entry.engine)(input, params)?;
        log::debug!("{} finished with {} step(s)", name, steps.len());
        Ok(steps)
    }

    /// Resolves `name` with [`Registry::resolve`], then runs it.
    ///
    /// # Errors
    ///
    /// See [`Registry::resolve`] and [`Registry::run`].
    pub fn run_named(
        &self,
        name: &str,
        input: &AlgorithmInput,
        params: &RunParams,
    ) -> Result<StepList> {
        let name = self.resolve(name)?;
        self.run(name, input, params)
    }

    fn check_input(&self, name: AlgorithmName, input: &AlgorithmInput) -> Result<()> {
        let family = name.family();
        match input {
            AlgorithmInput::Array(_) if family.takes_graph() => {
                Err(invalid_input!("{} needs a graph, got an array", name))
            }
            AlgorithmInput::Graph(_) if !family.takes_graph() => {
                Err(invalid_input!("{} needs an array, got a graph", name))
            }
            AlgorithmInput::Array(values) => {
                if values.len() > self.limits.max_array_len {
                    return Err(invalid_input!(
                        "array of {} elements exceeds the limit of {}",
                        values.len(),
                        self.limits.max_array_len
                    ));
                }
                if let Some(position) = values.iter().position(|value| !value.is_finite()) {
                    return Err(invalid_input!(
                        "array value at index {} is not finite ({})",
                        position,
                        values[position]
                    ));
                }
                Ok(())
            }
            AlgorithmInput::Graph(graph) => {
                let nodes = graph.node_count();
                let limit = match name {
                    AlgorithmName::FloydWarshall => self
                        .limits
                        .max_floyd_warshall_nodes
                        .min(self.limits.max_graph_nodes),
                    AlgorithmName::Tsp => self.limits.max_tsp_nodes.min(self.limits.max_graph_nodes),
                    _ => self.limits.max_graph_nodes,
                };
                if nodes > limit {
                    return Err(invalid_input!(
                        "{} accepts at most {} nodes, graph has {}",
                        name,
                        limit,
                        nodes
                    ));
                }
                graph.validate()
            }
        }
    }
}

fn engine_for(name: AlgorithmName) -> Engine {
    match name {
        AlgorithmName::Bubble => |input, _| sort_with(input, sorting::bubble_sort),
        AlgorithmName::Selection => |input, _| sort_with(input, sorting::selection_sort),
        AlgorithmName::Insertion => |input, _| sort_with(input, sorting::insertion_sort),
        AlgorithmName::Merge => |input, _| sort_with(input, sorting::merge_sort),
        AlgorithmName::Quick => |input, _| sort_with(input, sorting::quick_sort),
        AlgorithmName::Heap => |input, _| sort_with(input, sorting::heap_sort),
        AlgorithmName::Bfs => |input, params| {
            let graph = expect_graph(input)?;
            traversal::bfs(graph, start_node(graph, params)?).map(StepList::Bfs)
        },
        AlgorithmName::Dfs => |input, params| {
            let graph = expect_graph(input)?;
            traversal::dfs(graph, start_node(graph, params)?, params.end).map(StepList::Dfs)
        },
        AlgorithmName::Dijkstra => |input, params| {
            let graph = expect_graph(input)?;
            shortest_path::dijkstra(graph, start_node(graph, params)?).map(StepList::Dijkstra)
        },
        AlgorithmName::BellmanFord => |input, params| {
            let graph = expect_graph(input)?;
            shortest_path::bellman_ford(graph, start_node(graph, params)?)
                .map(StepList::BellmanFord)
        },
        AlgorithmName::AStar => |input, params| {
            let graph = expect_graph(input)?;
            shortest_path::astar(graph, start_node(graph, params)?, params.end)
                .map(StepList::AStar)
        },
        AlgorithmName::FloydWarshall => |input, _| {
            shortest_path::floyd_warshall(expect_graph(input)?).map(StepList::FloydWarshall)
        },
        AlgorithmName::Prim => |input, params| {
            let graph = expect_graph(input)?;
            spanning_tree::prim(graph, start_node(graph, params)?).map(StepList::Prim)
        },
        AlgorithmName::Kruskal => |input, _| {
            spanning_tree::kruskal(expect_graph(input)?).map(StepList::Kruskal)
        },
        AlgorithmName::Topological => |input, _| {
            ordering::topological_sort(expect_graph(input)?).map(StepList::Topological)
        },
        AlgorithmName::Tsp => |input, params| {
            let graph = expect_graph(input)?;
            ordering::tsp(graph, start_node(graph, params)?).map(StepList::Tsp)
        },
    }
}

fn sort_with(
    input: &AlgorithmInput,
    engine: fn(&[f64]) -> Trace<SortStep<f64>>,
) -> Result<StepList> {
    match input {
        AlgorithmInput::Array(values) => Ok(StepList::Sorting(engine(values))),
        AlgorithmInput::Graph(_) => Err(invalid_input!("sorting engines need an array")),
    }
}

fn expect_graph(input: &AlgorithmInput) -> Result<&Graph> {
    match input {
        AlgorithmInput::Graph(graph) => Ok(graph),
        AlgorithmInput::Array(_) => Err(invalid_input!("graph engines need a graph")),
    }
}

/// The requested start node, or the smallest node id.
fn start_node(graph: &Graph, params: &RunParams) -> Result<NodeId> {
    match params.start {
        Some(start) => Ok(start),
        None => graph
            .first_node()
            .ok_or_else(|| invalid_input!("graph is empty but a start node is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_every_algorithm_is_registered() {
        let registry = Registry::new();
        let names: Vec<AlgorithmName> = registry.algorithms().map(|meta| meta.name).collect();
        assert_eq!(names, AlgorithmName::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_every_algorithm_runs() {
        let registry = Registry::new();
        let array = AlgorithmInput::from(vec![4.0, 2.0, 7.0, 1.0]);
        let graph = AlgorithmInput::from(classic());
        for name in AlgorithmName::iter() {
            let input = if name.family().takes_graph() {
                &graph
            } else {
                &array
            };
            let steps = registry.run(name, input, &RunParams::default()).unwrap();
            assert!(!steps.is_empty(), "{name} produced no steps");
            assert!(steps.is_finished(), "{name} did not finish");
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        let registry = Registry::new();
        let err = registry
            .run_named("Shell", &AlgorithmInput::from(vec![1.0]), &RunParams::default())
            .unwrap_err();
        assert_eq!(err, Error::UnknownAlgorithm("Shell".to_string()));
    }

    #[test]
    fn test_shape_mismatch() {
        let registry = Registry::new();
        let err = registry
            .run(
                AlgorithmName::Bfs,
                &AlgorithmInput::from(vec![1.0, 2.0]),
                &RunParams::default(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        let err = registry
            .run(
                AlgorithmName::Bubble,
                &AlgorithmInput::from(classic()),
                &RunParams::default(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_nan_rejected() {
        let registry = Registry::new();
        let err = registry
            .run(
                AlgorithmName::Quick,
                &AlgorithmInput::from(vec![1.0, f64::NAN]),
                &RunParams::default(),
            )
            .unwrap_err();
        assert!(err.message().contains("NaN"));
    }

    #[test]
    fn test_infinite_values_rejected() {
        let registry = Registry::new();
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = registry
                .run(
                    AlgorithmName::Bubble,
                    &AlgorithmInput::from(vec![3.0, value, 1.0]),
                    &RunParams::default(),
                )
                .unwrap_err();
            assert!(matches!(err, Error::InvalidInput { .. }));
            assert!(err.message().contains("index 1"));
        }
    }

    #[test]
    fn test_limits() {
        let registry = Registry::with_limits(EngineLimits::strict());
        let grid = AlgorithmInput::from(Graph::grid(3, 3));
        assert!(registry
            .run(AlgorithmName::Tsp, &grid, &RunParams::default())
            .is_err());
        assert!(registry
            .run(AlgorithmName::Bfs, &grid, &RunParams::default())
            .is_ok());

        let long = AlgorithmInput::from(vec![1.0; 65]);
        assert!(registry
            .run(AlgorithmName::Bubble, &long, &RunParams::default())
            .is_err());
    }

    #[test]
    fn test_empty_graph_needs_start() {
        let registry = Registry::new();
        let err = registry
            .run(
                AlgorithmName::Dijkstra,
                &AlgorithmInput::from(Graph::new()),
                &RunParams::default(),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));

        // Engines without a start node accept the empty graph
        assert!(registry
            .run(
                AlgorithmName::Kruskal,
                &AlgorithmInput::from(Graph::new()),
                &RunParams::default(),
            )
            .is_ok());
    }

    #[test]
    fn test_step_list_serializes_as_array() {
        let registry = Registry::new();
        let steps = registry
            .run(
                AlgorithmName::Bubble,
                &AlgorithmInput::from(vec![2.0, 1.0]),
                &RunParams::default(),
            )
            .unwrap();
        let json = serde_json::to_value(&steps).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), steps.len());
        assert_eq!(array[0]["type"], "start");
        assert_eq!(array.last().unwrap()["array"], serde_json::json!([1.0, 2.0]));
    }
}
