//! Integration tests for name-based dispatch and the JSON wire format.

use algoscope::prelude::*;
use serde_json::{json, Value};

const DIJKSTRA_GRAPH: &str = r#"{
    "0": [{"node": 1, "weight": 4}, {"node": 2, "weight": 1}],
    "1": [{"node": 0, "weight": 4}, {"node": 2, "weight": 2}, {"node": 3, "weight": 5}],
    "2": [{"node": 0, "weight": 1}, {"node": 1, "weight": 2}, {"node": 3, "weight": 8}],
    "3": [{"node": 1, "weight": 5}, {"node": 2, "weight": 8}]
}"#;

fn parse_graph(json: &str) -> Graph {
    serde_json::from_str(json).expect("graph fixture is valid JSON")
}

fn to_json(steps: &StepList) -> Vec<Value> {
    match serde_json::to_value(steps).expect("steps serialize") {
        Value::Array(steps) => steps,
        other => panic!("expected an array, got {other}"),
    }
}

#[test]
fn test_graph_parses_from_adjacency_json() {
    let graph = parse_graph(DIJKSTRA_GRAPH);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.entry_count(), 10);
    assert!(graph.validate().is_ok());
    assert_eq!(graph.neighbors(NodeId::new(1))[2], Edge::new(NodeId::new(3), 5.0));
}

#[test]
fn test_dijkstra_wire_format() -> Result<()> {
    let registry = Registry::new();
    let steps = registry.run_named(
        "Dijkstra",
        &AlgorithmInput::from(parse_graph(DIJKSTRA_GRAPH)),
        &RunParams::new().with_start(NodeId::new(0)),
    )?;

    let steps = to_json(&steps);
    assert_eq!(steps[0]["type"], "start");
    assert_eq!(steps[0]["distances"]["1"], "Infinity");
    assert_eq!(steps[0]["distances"]["0"], json!(0.0));
    assert!(steps[0]["description"].is_string());

    let last = steps.last().expect("non-empty");
    assert_eq!(last["type"], "complete");
    assert_eq!(
        last["distances"],
        json!({"0": 0.0, "1": 3.0, "2": 1.0, "3": 8.0})
    );
    assert!(steps.iter().any(|step| step["type"] == "updateDistance"));
    Ok(())
}

#[test]
fn test_sorting_wire_format() -> Result<()> {
    let registry = Registry::new();
    let steps = registry.run(
        AlgorithmName::Quick,
        &AlgorithmInput::from(vec![3.0, 1.0, 2.0]),
        &RunParams::default(),
    )?;

    for step in to_json(&steps) {
        assert!(step["array"].is_array(), "{step}");
        if step["type"] == "compare" || step["type"] == "swap" {
            assert_eq!(step["indices"].as_array().map(Vec::len), Some(2));
        }
    }
    Ok(())
}

#[test]
fn test_tsp_update_tag() -> Result<()> {
    let registry = Registry::new();
    let graph = Graph::from_undirected_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
    let steps = registry.run(
        AlgorithmName::Tsp,
        &AlgorithmInput::from(graph),
        &RunParams::default(),
    )?;
    assert!(steps.tags().contains(&"updateDP"));
    assert!(to_json(&steps).iter().any(|step| step["type"] == "updateDP"));
    Ok(())
}

#[test]
fn test_names_resolve_case_insensitively() -> Result<()> {
    let registry = Registry::new();
    assert_eq!(registry.resolve("bellmanford")?, AlgorithmName::BellmanFord);
    assert_eq!(registry.resolve("bfs")?, AlgorithmName::Bfs);
    assert_eq!(registry.resolve("TSP")?, AlgorithmName::Tsp);
    assert_eq!(AlgorithmName::Tsp.to_string(), "TSP");
    assert_eq!(AlgorithmName::AStar.to_string(), "AStar");
    Ok(())
}

#[test]
fn test_unknown_name_keeps_identifier() {
    let registry = Registry::new();
    let err = registry
        .run_named("Bogo", &AlgorithmInput::from(vec![2.0, 1.0]), &RunParams::default())
        .unwrap_err();
    assert_eq!(err, Error::UnknownAlgorithm("Bogo".to_string()));
}

#[test]
fn test_metadata_for_every_algorithm() {
    let registry = Registry::new();
    assert_eq!(registry.algorithms().count(), 16);

    let kruskal = registry
        .metadata(AlgorithmName::Kruskal)
        .expect("kruskal is registered");
    assert_eq!(kruskal.time, "O(E log E)");
    assert_eq!(kruskal.data_structure, "Union-Find");
    assert_eq!(kruskal.family, AlgorithmFamily::SpanningTree);

    let json = serde_json::to_value(kruskal).expect("metadata serializes");
    assert_eq!(json["dataStructure"], "Union-Find");
    assert_eq!(json["family"], "spanningTree");
}

#[test]
fn test_dangling_neighbor_rejected_before_any_step() {
    let registry = Registry::new();
    let graph = parse_graph(r#"{"0": [{"node": 1, "weight": 1}, {"node": 9, "weight": 1}], "1": []}"#);
    for name in [
        AlgorithmName::Bfs,
        AlgorithmName::Dijkstra,
        AlgorithmName::Kruskal,
        AlgorithmName::Topological,
    ] {
        let err = registry
            .run(name, &AlgorithmInput::from(graph.clone()), &RunParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }), "{name}");
    }
}

#[test]
fn test_missing_start_rejected() {
    let registry = Registry::new();
    let err = registry
        .run(
            AlgorithmName::Prim,
            &AlgorithmInput::from(Graph::path(3, 1.0)),
            &RunParams::new().with_start(NodeId::new(7)),
        )
        .unwrap_err();
    assert!(err.message().contains("start node 7"));
}

#[test]
fn test_tsp_limit_enforced() {
    let registry = Registry::new();
    let limit = registry.limits().max_tsp_nodes;
    let oversized = AlgorithmInput::from(Graph::star(limit + 1, 1.0));
    assert!(registry
        .run(AlgorithmName::Tsp, &oversized, &RunParams::default())
        .is_err());

    let fits = AlgorithmInput::from(Graph::star(limit.min(6), 1.0));
    assert!(registry
        .run(AlgorithmName::Tsp, &fits, &RunParams::default())
        .is_ok());
}

#[test]
fn test_unused_params_ignored() -> Result<()> {
    let registry = Registry::new();
    let params = RunParams::new()
        .with_start(NodeId::new(0))
        .with_end(NodeId::new(1));
    let with_params = registry.run(
        AlgorithmName::Merge,
        &AlgorithmInput::from(vec![2.0, 1.0, 3.0]),
        &params,
    )?;
    let without = registry.run(
        AlgorithmName::Merge,
        &AlgorithmInput::from(vec![2.0, 1.0, 3.0]),
        &RunParams::default(),
    )?;
    assert_eq!(with_params, without);
    Ok(())
}
