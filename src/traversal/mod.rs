//! Graph traversal trace engines.
//!
//! # Algorithms
//!
//! - [`bfs`] - Breadth-first search over a FIFO frontier, marking nodes visited on enqueue
//! - [`dfs`] - Iterative depth-first search over an explicit stack, with an optional target
//!
//! Both engines only follow adjacency entries, so on a disconnected graph they cover the
//! component of the start node and nothing else.

mod bfs;
mod dfs;

pub use bfs::{bfs, BfsStep};
pub use dfs::{dfs, DfsStep};
