// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # algoscope
//!
//! Trace-generating implementations of classic sorting and graph algorithms, built for
//! step-by-step visualization.
//!
//! Every engine runs its algorithm to completion and returns a [`trace::Trace`]: an ordered,
//! immutable list of steps, one per primitive operation (a comparison, a swap, a relaxation, an
//! enqueue...). Each step carries a full snapshot of the state a renderer needs, so a player
//! can jump to any position and draw it without replaying earlier steps.
//!
//! ## Features
//!
//! - **Sorting** - Bubble, Selection, Insertion, Merge, Quick and Heap sort
//! - **Traversal** - BFS and DFS with optional target
//! - **Shortest paths** - Dijkstra, Bellman-Ford with negative cycle detection, A*,
//!   Floyd-Warshall
//! - **Spanning trees** - Prim and Kruskal (with union-find)
//! - **Ordering** - Kahn's topological sort and an exact bitmask-DP travelling salesman
//! - **Registry** - name-based dispatch with static complexity metadata and size limits
//!
//! ## Quick Start
//!
//! ```rust
//! use algoscope::prelude::*;
//!
//! let registry = Registry::new();
//! let steps = registry.run_named(
//!     "Merge",
//!     &AlgorithmInput::from(vec![5.0, 2.0, 9.0, 1.0]),
//!     &RunParams::default(),
//! )?;
//!
//! for (tag, description) in steps.summaries() {
//!     println!("{tag:>12}  {description}");
//! }
//! println!("{} comparisons", steps.stats().comparisons);
//! # Ok::<(), algoscope::Error>(())
//! ```
//!
//! Engines can also be called directly, in which case the trace keeps its concrete step type:
//!
//! ```rust
//! use algoscope::{shortest_path::{bellman_ford, BellmanFordStep}, Graph, NodeId};
//!
//! let graph = Graph::from_directed_edges(2, &[(0, 1, -1.0), (1, 0, -1.0)]);
//! let trace = bellman_ford(&graph, NodeId::new(0))?;
//! assert!(matches!(
//!     trace.last().unwrap().kind(),
//!     BellmanFordStep::Complete { has_negative_cycle: true, .. }
//! ));
//! # Ok::<(), algoscope::Error>(())
//! ```
//!
//! ## Outcomes and Errors
//!
//! Malformed input (a dangling neighbor id, a missing start node, a non-finite array value,
//! a graph above the configured [`EngineLimits`]) fails with [`Error::InvalidInput`] before
//! any step is produced. An unknown algorithm identifier fails with [`Error::UnknownAlgorithm`].
//!
//! Well-formed inputs without a solution are not errors. They end the trace with a dedicated
//! terminal step: `noPath` (A*), `notFound` (DFS), `cycle` (topological sort), or a `complete`
//! step flagged `hasNegativeCycle` (Bellman-Ford, Floyd-Warshall).
//!
//! ## Determinism
//!
//! Nodes are always iterated in ascending id order and neighbors in adjacency order, so the
//! same input and parameters always produce the same trace.

#[macro_use]
pub(crate) mod error;

/// Size limits enforced by the registry.
pub mod config;

/// Adjacency-list graph, node ids, edges and distances.
pub mod graph;

/// Ordering and combinatorial engines: topological sort and TSP.
pub mod ordering;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use algoscope::prelude::*;
///
/// let trace = quick_sort(&[3, 1, 2]);
/// assert_eq!(trace.last().map(|step| step.tag()), Some("complete"));
/// ```
pub mod prelude;

/// Name-based dispatch and algorithm metadata.
pub mod registry;

/// Shortest-path engines: Dijkstra, Bellman-Ford, A*, Floyd-Warshall.
pub mod shortest_path;

/// Sorting engines.
pub mod sorting;

/// Minimum spanning tree engines: Prim and Kruskal.
pub mod spanning_tree;

/// Generic trace buffer shared by every engine.
pub mod trace;

/// Traversal engines: BFS and DFS.
pub mod traversal;

/// `algoscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `algoscope` Error type
///
/// Either the input could not be traced ([`Error::InvalidInput`]) or the requested algorithm
/// does not exist ([`Error::UnknownAlgorithm`]).
pub use error::Error;

pub use config::EngineLimits;
pub use graph::{Distance, Edge, Graph, NodeId, WeightedEdge};
pub use registry::{
    AlgorithmFamily, AlgorithmInput, AlgorithmMetadata, AlgorithmName, Registry, RunParams,
    StepList,
};
pub use trace::{Step, StepKind, Trace, TraceStats};
