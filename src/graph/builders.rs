//! Deterministic graph shapes.
//!
//! These builders produce graphs that satisfy the [`Graph`] invariants with dense ids
//! `0..N-1`. They are used by the CLI, the benchmarks and the tests; random generation is left
//! to the caller.

use crate::graph::{Graph, NodeId};

impl Graph {
    /// Builds a `rows × cols` grid with unit weights.
    ///
    /// Node `i` sits at row `i / cols`, column `i % cols`. Each node lists its neighbors in the
    /// order right, down, left, up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algoscope::{Graph, NodeId};
    ///
    /// let grid = Graph::grid(2, 3);
    /// assert_eq!(grid.node_count(), 6);
    /// // Corner node 0 has a right and a down neighbor
    /// assert_eq!(grid.neighbors(NodeId::new(0)).len(), 2);
    /// ```
    #[must_use]
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut graph = Graph::with_nodes(rows * cols);
        for id in 0..rows * cols {
            let (row, col) = (id / cols, id % cols);
            let node = NodeId::new(id);
            if col + 1 < cols {
                graph.add_edge(node, NodeId::new(id + 1), 1.0);
            }
            if row + 1 < rows {
                graph.add_edge(node, NodeId::new(id + cols), 1.0);
            }
            if col > 0 {
                graph.add_edge(node, NodeId::new(id - 1), 1.0);
            }
            if row > 0 {
                graph.add_edge(node, NodeId::new(id - cols), 1.0);
            }
        }
        graph
    }

    /// Builds an undirected star: node 0 is connected to every other node with `weight`.
    #[must_use]
    pub fn star(count: usize, weight: f64) -> Self {
        let mut graph = Graph::with_nodes(count);
        for leaf in 1..count {
            graph.add_undirected_edge(NodeId::new(0), NodeId::new(leaf), weight);
        }
        graph
    }

    /// Builds an undirected path `0 - 1 - ... - (count-1)` with uniform `weight`.
    #[must_use]
    pub fn path(count: usize, weight: f64) -> Self {
        let mut graph = Graph::with_nodes(count);
        for id in 1..count {
            graph.add_undirected_edge(NodeId::new(id - 1), NodeId::new(id), weight);
        }
        graph
    }

    /// Builds a graph with nodes `0..count` from `(a, b, weight)` triples, storing each edge
    /// under both endpoints.
    #[must_use]
    pub fn from_undirected_edges(count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Graph::with_nodes(count);
        for &(a, b, weight) in edges {
            graph.add_undirected_edge(NodeId::new(a), NodeId::new(b), weight);
        }
        graph
    }

    /// Builds a graph with nodes `0..count` from one-way `(from, to, weight)` triples.
    #[must_use]
    pub fn from_directed_edges(count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut graph = Graph::with_nodes(count);
        for &(from, to, weight) in edges {
            graph.add_edge(NodeId::new(from), NodeId::new(to), weight);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_neighbor_order() {
        let grid = Graph::grid(3, 3);
        let center: Vec<usize> = grid
            .neighbors(NodeId::new(4))
            .iter()
            .map(|edge| edge.neighbor.index())
            .collect();
        assert_eq!(center, vec![5, 7, 3, 1]);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_grid_degenerate() {
        assert!(Graph::grid(0, 5).is_empty());
        let single = Graph::grid(1, 1);
        assert_eq!(single.node_count(), 1);
        assert_eq!(single.entry_count(), 0);
    }

    #[test]
    fn test_star() {
        let star = Graph::star(5, 2.0);
        assert_eq!(star.node_count(), 5);
        assert_eq!(star.neighbors(NodeId::new(0)).len(), 4);
        assert_eq!(star.neighbors(NodeId::new(3)).len(), 1);
        assert_eq!(star.entry_count(), 8);
    }

    #[test]
    fn test_path() {
        let path = Graph::path(4, 1.0);
        assert_eq!(path.entry_count(), 6);
        assert_eq!(path.neighbors(NodeId::new(0)).len(), 1);
        assert_eq!(path.neighbors(NodeId::new(1)).len(), 2);
    }

    #[test]
    fn test_edge_list_builders() {
        let undirected = Graph::from_undirected_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)]);
        assert_eq!(undirected.entry_count(), 4);

        let directed = Graph::from_directed_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)]);
        assert_eq!(directed.entry_count(), 2);
        assert!(directed.neighbors(NodeId::new(2)).is_empty());
        assert_eq!(directed.node_count(), 3);
    }
}
