use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// algoscope - step-by-step traces of sorting and graph algorithms
#[derive(Debug, Parser)]
#[command(name = "algoscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List registered algorithms with their complexity.
    List {
        /// Show only one family: sorting, traversal, shortest-path, spanning-tree, ordering.
        #[arg(long)]
        family: Option<String>,
    },

    /// Show the metadata of a single algorithm.
    Info {
        /// Algorithm identifier (e.g., Quick, BFS, BellmanFord). Case-insensitive.
        #[arg(value_name = "ALGORITHM")]
        algorithm: String,
    },

    /// Run an algorithm and print its trace.
    Run(RunArgs),
}

/// Input selection and limits for `run`.
#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Algorithm identifier (e.g., Merge, Dijkstra, TSP). Case-insensitive.
    #[arg(value_name = "ALGORITHM")]
    pub algorithm: String,

    /// Comma separated values to sort (e.g., 5,3,8,1).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, group = "input")]
    pub array: Option<Vec<f64>>,

    /// JSON adjacency map to run a graph algorithm on.
    #[arg(long, value_name = "FILE", group = "input")]
    pub graph: Option<PathBuf>,

    /// Generate a ROWSxCOLS grid with unit weights (e.g., 4x5).
    #[arg(long, value_name = "ROWSxCOLS", group = "input")]
    pub grid: Option<String>,

    /// Generate an undirected star with N nodes centered on node 0.
    #[arg(long, value_name = "N", group = "input")]
    pub star: Option<usize>,

    /// Start node for graph algorithms (defaults to the smallest id).
    #[arg(long)]
    pub start: Option<usize>,

    /// Target node for DFS and A*.
    #[arg(long)]
    pub end: Option<usize>,

    /// Size limits preset: strict, default, or permissive.
    #[arg(long, default_value = "default")]
    pub limits: String,

    /// Print at most this many steps (the final step is always shown).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print only the statistics, not the steps.
    #[arg(long)]
    pub stats: bool,
}
