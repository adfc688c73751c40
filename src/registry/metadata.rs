//! Static descriptions of the registered algorithms.

use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Identifier of every algorithm the registry can run.
///
/// Parsing accepts the identifiers in any ASCII case (`"bellmanford"`, `"AStar"`, `"bfs"`);
/// displaying yields the canonical form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum AlgorithmName {
    /// Bubble sort
    Bubble,
    /// Selection sort
    Selection,
    /// Insertion sort
    Insertion,
    /// Merge sort
    Merge,
    /// Quick sort
    Quick,
    /// Heap sort
    Heap,
    /// Breadth-first search
    #[strum(serialize = "BFS")]
    #[serde(rename = "BFS")]
    Bfs,
    /// Depth-first search
    #[strum(serialize = "DFS")]
    #[serde(rename = "DFS")]
    Dfs,
    /// Dijkstra's shortest paths
    Dijkstra,
    /// Bellman-Ford shortest paths
    BellmanFord,
    /// A* search
    AStar,
    /// Floyd-Warshall all-pairs shortest paths
    FloydWarshall,
    /// Prim's minimum spanning tree
    Prim,
    /// Kruskal's minimum spanning tree
    Kruskal,
    /// Kahn's topological sort
    Topological,
    /// Bitmask DP travelling salesman
    #[strum(serialize = "TSP")]
    #[serde(rename = "TSP")]
    Tsp,
}

/// Grouping of algorithms by what they compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "title_case")]
pub enum AlgorithmFamily {
    /// Takes an array
    Sorting,
    /// BFS and DFS
    Traversal,
    /// Dijkstra, Bellman-Ford, A*, Floyd-Warshall
    ShortestPath,
    /// Prim and Kruskal
    SpanningTree,
    /// Topological sort and TSP
    Ordering,
}

impl AlgorithmFamily {
    /// Returns `true` if algorithms of this family run on a graph rather than an array.
    #[must_use]
    pub fn takes_graph(self) -> bool {
        !matches!(self, AlgorithmFamily::Sorting)
    }
}

/// Informational data about an algorithm, independent of any run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmMetadata {
    /// Identifier
    pub name: AlgorithmName,
    /// Family
    pub family: AlgorithmFamily,
    /// Asymptotic running time
    pub time: &'static str,
    /// Asymptotic extra space
    pub space: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Main data structure driving the algorithm
    pub data_structure: &'static str,
}

impl AlgorithmName {
    /// The family this algorithm belongs to.
    #[must_use]
    pub fn family(self) -> AlgorithmFamily {
        match self {
            AlgorithmName::Bubble
            | AlgorithmName::Selection
            | AlgorithmName::Insertion
            | AlgorithmName::Merge
            | AlgorithmName::Quick
            | AlgorithmName::Heap => AlgorithmFamily::Sorting,
            AlgorithmName::Bfs | AlgorithmName::Dfs => AlgorithmFamily::Traversal,
            AlgorithmName::Dijkstra
            | AlgorithmName::BellmanFord
            | AlgorithmName::AStar
            | AlgorithmName::FloydWarshall => AlgorithmFamily::ShortestPath,
            AlgorithmName::Prim | AlgorithmName::Kruskal => AlgorithmFamily::SpanningTree,
            AlgorithmName::Topological | AlgorithmName::Tsp => AlgorithmFamily::Ordering,
        }
    }

    /// Returns `true` if the engine reads [`crate::RunParams::start`].
    #[must_use]
    pub fn uses_start(self) -> bool {
        self.family().takes_graph()
            && !matches!(
                self,
                AlgorithmName::FloydWarshall | AlgorithmName::Kruskal | AlgorithmName::Topological
            )
    }

    /// Returns `true` if the engine reads [`crate::RunParams::end`].
    #[must_use]
    pub fn uses_end(self) -> bool {
        matches!(self, AlgorithmName::Dfs | AlgorithmName::AStar)
    }

    /// Static metadata of this algorithm.
    #[must_use]
    pub fn metadata(self) -> AlgorithmMetadata {
        let (time, space, description, data_structure) = match self {
            AlgorithmName::Bubble => (
                "O(n²)",
                "O(1)",
                "Repeatedly compares and swaps adjacent elements",
                "Array",
            ),
            AlgorithmName::Selection => (
                "O(n²)",
                "O(1)",
                "Finds minimum element and places it at the beginning",
                "Array",
            ),
            AlgorithmName::Insertion => (
                "O(n²)",
                "O(1)",
                "Builds sorted array one element at a time",
                "Array",
            ),
            AlgorithmName::Merge => (
                "O(n log n)",
                "O(n)",
                "Divide and conquer algorithm using merging",
                "Auxiliary Array",
            ),
            AlgorithmName::Quick => (
                "O(n log n)",
                "O(log n)",
                "Partition-based divide and conquer",
                "Call Stack",
            ),
            AlgorithmName::Heap => (
                "O(n log n)",
                "O(1)",
                "In-place sort on a binary max-heap",
                "Binary Heap",
            ),
            AlgorithmName::Bfs => (
                "O(V + E)",
                "O(V)",
                "Explores all neighbors at current depth before moving deeper. Ideal for finding shortest paths in unweighted graphs.",
                "Queue (FIFO)",
            ),
            AlgorithmName::Dfs => (
                "O(V + E)",
                "O(V)",
                "Explores as far as possible along each branch before backtracking. Good for topology sorting, cycle detection.",
                "Stack (LIFO)",
            ),
            AlgorithmName::Dijkstra => (
                "O(E log V)",
                "O(V)",
                "Finds shortest paths from source to all vertices in weighted graphs with non-negative edges.",
                "Priority Queue",
            ),
            AlgorithmName::BellmanFord => (
                "O(VE)",
                "O(V)",
                "Finds shortest paths in weighted graphs with negative edges. Can detect negative cycles.",
                "Array",
            ),
            AlgorithmName::AStar => (
                "O(E)",
                "O(V)",
                "Best-first search using heuristics to find shortest path to goal. More efficient than Dijkstra.",
                "Priority Queue",
            ),
            AlgorithmName::FloydWarshall => (
                "O(V³)",
                "O(V²)",
                "Finds shortest paths between all pairs of vertices. Works with negative edges (no negative cycles).",
                "Adjacency Matrix",
            ),
            AlgorithmName::Prim => (
                "O(E log V)",
                "O(V)",
                "Finds Minimum Spanning Tree (MST) by growing tree from starting node.",
                "Priority Queue",
            ),
            AlgorithmName::Kruskal => (
                "O(E log E)",
                "O(V)",
                "Finds MST by sorting edges and adding them without forming cycles.",
                "Union-Find",
            ),
            AlgorithmName::Topological => (
                "O(V + E)",
                "O(V)",
                "Linear ordering of vertices in DAG such that for every directed edge u→v, u comes before v.",
                "Queue",
            ),
            AlgorithmName::Tsp => (
                "O(n²2ⁿ)",
                "O(n2ⁿ)",
                "Finds shortest Hamiltonian cycle visiting all cities exactly once (NP-hard problem).",
                "DP Table",
            ),
        };

        AlgorithmMetadata {
            name: self,
            family: self.family(),
            time,
            space,
            description,
            data_structure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_names_round_trip() {
        for name in AlgorithmName::iter() {
            assert_eq!(AlgorithmName::from_str(&name.to_string()), Ok(name));
        }
        assert_eq!(AlgorithmName::COUNT, 16);
    }

    #[test]
    fn test_canonical_names() {
        let names: Vec<String> = AlgorithmName::iter().map(|name| name.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Bubble",
                "Selection",
                "Insertion",
                "Merge",
                "Quick",
                "Heap",
                "BFS",
                "DFS",
                "Dijkstra",
                "BellmanFord",
                "AStar",
                "FloydWarshall",
                "Prim",
                "Kruskal",
                "Topological",
                "TSP"
            ]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("bellmanford".parse(), Ok(AlgorithmName::BellmanFord));
        assert_eq!("bfs".parse(), Ok(AlgorithmName::Bfs));
        assert_eq!("Tsp".parse(), Ok(AlgorithmName::Tsp));
        assert!("Shell".parse::<AlgorithmName>().is_err());
    }

    #[test]
    fn test_families() {
        assert_eq!(AlgorithmName::Heap.family(), AlgorithmFamily::Sorting);
        assert_eq!(AlgorithmName::AStar.family(), AlgorithmFamily::ShortestPath);
        assert!(AlgorithmName::Kruskal.family().takes_graph());
        assert!(!AlgorithmName::Kruskal.uses_start());
        assert!(AlgorithmName::Prim.uses_start());
        assert!(AlgorithmName::Dfs.uses_end());
    }

    #[test]
    fn test_metadata() {
        let meta = AlgorithmName::FloydWarshall.metadata();
        assert_eq!(meta.time, "O(V³)");
        assert_eq!(meta.space, "O(V²)");
        assert_eq!(meta.data_structure, "Adjacency Matrix");
        assert_eq!(AlgorithmName::Merge.metadata().time, "O(n log n)");
        assert_eq!(AlgorithmFamily::ShortestPath.to_string(), "Shortest Path");
    }
}
