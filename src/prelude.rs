//! # algoscope Prelude
//!
//! Re-exports the registry, the graph model, the trace types and every engine entry point, so
//! a single glob import is enough for most uses.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all algoscope operations
pub use crate::Error;

/// The result type used throughout algoscope
pub use crate::Result;

/// Size limits checked by the registry
pub use crate::EngineLimits;

// ================================================================================================
// Registry
// ================================================================================================

pub use crate::registry::{
    AlgorithmFamily, AlgorithmInput, AlgorithmMetadata, AlgorithmName, Registry, RunParams,
    StepList,
};

// ================================================================================================
// Graph Model
// ================================================================================================

pub use crate::graph::{Distance, Edge, Graph, NodeId, WeightedEdge};

// ================================================================================================
// Traces
// ================================================================================================

pub use crate::trace::{Step, StepKind, Trace, TraceStats};

// ================================================================================================
// Engines
// ================================================================================================

pub use crate::ordering::{topological_sort, tsp, TopologicalStep, TspStep};
pub use crate::shortest_path::{
    astar, bellman_ford, dijkstra, floyd_warshall, AStarStep, BellmanFordStep, DijkstraStep,
    FloydWarshallStep,
};
pub use crate::sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort, SortStep,
};
pub use crate::spanning_tree::{kruskal, prim, KruskalStep, PrimStep};
pub use crate::traversal::{bfs, dfs, BfsStep, DfsStep};
