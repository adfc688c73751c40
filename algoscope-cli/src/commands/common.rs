use std::path::Path;

use algoscope::{AlgorithmFamily, AlgorithmInput, EngineLimits, Graph, NodeId, RunParams};
use anyhow::{bail, Context};

use crate::app::RunArgs;

/// Parse a family filter such as `shortest-path` or `ShortestPath`.
pub fn parse_family(name: &str) -> anyhow::Result<AlgorithmFamily> {
    let normalized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    Ok(match normalized.as_str() {
        "sorting" => AlgorithmFamily::Sorting,
        "traversal" => AlgorithmFamily::Traversal,
        "shortestpath" => AlgorithmFamily::ShortestPath,
        "spanningtree" => AlgorithmFamily::SpanningTree,
        "ordering" => AlgorithmFamily::Ordering,
        _ => bail!(
            "unknown family '{name}' (expected sorting, traversal, shortest-path, spanning-tree or ordering)"
        ),
    })
}

/// Resolve a `--limits` preset.
pub fn parse_limits(name: &str) -> anyhow::Result<EngineLimits> {
    match name.to_ascii_lowercase().as_str() {
        "strict" => Ok(EngineLimits::strict()),
        "default" => Ok(EngineLimits::default()),
        "permissive" => Ok(EngineLimits::permissive()),
        _ => bail!("unknown limits preset '{name}' (expected strict, default or permissive)"),
    }
}

/// Load a JSON adjacency map such as `{"0": [{"node": 1, "weight": 2}], "1": []}`.
pub fn load_graph(path: &Path) -> anyhow::Result<Graph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse graph: {}", path.display()))
}

/// Parse a `ROWSxCOLS` grid size.
pub fn parse_grid(spec: &str) -> anyhow::Result<(usize, usize)> {
    let Some((rows, cols)) = spec.split_once(['x', 'X']) else {
        bail!("grid size must look like ROWSxCOLS, got '{spec}'");
    };
    let rows = rows
        .trim()
        .parse()
        .with_context(|| format!("invalid grid row count '{rows}'"))?;
    let cols = cols
        .trim()
        .parse()
        .with_context(|| format!("invalid grid column count '{cols}'"))?;
    Ok((rows, cols))
}

/// Build the registry input from whichever input flag was given.
///
/// Generated graphs are checked against `limits` before any node is allocated.
pub fn build_input(args: &RunArgs, limits: &EngineLimits) -> anyhow::Result<AlgorithmInput> {
    if let Some(values) = &args.array {
        return Ok(AlgorithmInput::from(values.clone()));
    }
    if let Some(path) = &args.graph {
        return Ok(AlgorithmInput::from(load_graph(path)?));
    }
    if let Some(grid) = &args.grid {
        let (rows, cols) = parse_grid(grid)?;
        let nodes = rows
            .checked_mul(cols)
            .with_context(|| format!("grid {rows}x{cols} has too many nodes"))?;
        check_generated_size(nodes, limits)?;
        return Ok(AlgorithmInput::from(Graph::grid(rows, cols)));
    }
    if let Some(count) = args.star {
        check_generated_size(count, limits)?;
        return Ok(AlgorithmInput::from(Graph::star(count, 1.0)));
    }
    bail!("no input given; use --array, --graph, --grid or --star")
}

fn check_generated_size(nodes: usize, limits: &EngineLimits) -> anyhow::Result<()> {
    if nodes > limits.max_graph_nodes {
        bail!(
            "generated graph would have {nodes} nodes, the limit is {} (see --limits)",
            limits.max_graph_nodes
        );
    }
    Ok(())
}

/// Collect `--start` and `--end` into run parameters.
pub fn build_params(args: &RunArgs) -> RunParams {
    RunParams {
        start: args.start.map(NodeId::new),
        end: args.end.map(NodeId::new),
    }
}
