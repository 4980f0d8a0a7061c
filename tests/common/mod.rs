//! Shared test infrastructure

pub mod probes;

use healthgraph::DependencyGraph;

/// Build node identifiers from string literals
pub fn node_ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Build edge pairs from string literals
pub fn edge_pairs(edges: &[(&str, &str)]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect()
}

/// The Database/API/Cache scenario graph
pub fn scenario_graph() -> DependencyGraph {
    DependencyGraph::build(
        node_ids(&["Database", "API", "Cache"]),
        edge_pairs(&[("Database", "API"), ("Cache", "API")]),
    )
    .expect("scenario graph is valid")
}
