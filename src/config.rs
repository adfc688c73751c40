//! Size limits applied by the registry before an engine runs
//!
//! Every engine records one step per primitive operation, so the length of a trace grows with
//! the algorithm's complexity: quadratic for the simple sorts, cubic for Floyd-Warshall and
//! `n² · 2ⁿ` for the bitmask TSP. The limits in this module keep traces within what a
//! step-by-step animation can reasonably replay.

/// Input size limits enforced by [`crate::Registry`] before dispatching a run.
///
/// The engines themselves accept any conforming input (apart from the TSP engine, which
/// rejects graphs above [`EngineLimits::TSP_HARD_LIMIT`] because its subset table cannot be
/// represented beyond that). Guarding against oversized inputs is the registry's job, and the
/// values used for it live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    /// Longest array accepted by the sorting engines
    pub max_array_len: usize,

    /// Largest node count accepted by any graph engine
    pub max_graph_nodes: usize,

    /// Largest node count accepted by Floyd-Warshall (cubic step count)
    pub max_floyd_warshall_nodes: usize,

    /// Largest node count accepted by the bitmask TSP (exponential step count and memory)
    pub max_tsp_nodes: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_array_len: 512,
            max_graph_nodes: 256,
            max_floyd_warshall_nodes: 48,
            max_tsp_nodes: 12,
        }
    }
}

impl EngineLimits {
    /// Number of nodes beyond which the TSP subset table cannot be built at all.
    pub const TSP_HARD_LIMIT: usize = 20;

    /// Creates a configuration sized for classroom demos
    ///
    /// Keeps every trace short enough to be stepped through by hand.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_array_len: 64,
            max_graph_nodes: 32,
            max_floyd_warshall_nodes: 16,
            max_tsp_nodes: 8,
        }
    }

    /// Creates a configuration that only keeps the hard TSP ceiling
    ///
    /// **Warning**: Floyd-Warshall and TSP traces explode quickly; use only for offline
    /// trace generation where memory is not a concern.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            max_array_len: usize::MAX,
            max_graph_nodes: usize::MAX,
            max_floyd_warshall_nodes: usize::MAX,
            max_tsp_nodes: Self::TSP_HARD_LIMIT,
        }
    }
}
