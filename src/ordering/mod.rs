//! Ordering and combinatorial trace engines.
//!
//! - [`topological_sort`] - Kahn's algorithm, reporting a `cycle` step when no complete order
//!   exists
//! - [`tsp`] - exact travelling salesman tour via dynamic programming over node subsets

mod topological;
mod tsp;

pub use topological::{topological_sort, TopologicalStep};
pub use tsp::{tsp, TspStep};
