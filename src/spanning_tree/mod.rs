//! Minimum spanning tree trace engines.
//!
//! # Algorithms
//!
//! - [`prim`] - grows one tree from a start node, selecting the cheapest connecting node by
//!   linear scan
//! - [`kruskal`] - processes deduplicated edges by ascending weight, joining components with
//!   a union-find
//!
//! Both treat the graph as undirected. On a disconnected graph Prim covers only the start
//! node's component, while Kruskal returns a spanning forest. Neither situation is an error.
//! On a connected graph both report the same total weight.

mod kruskal;
mod prim;
mod union_find;

pub use kruskal::{kruskal, KruskalStep};
pub use prim::{prim, PrimStep};
