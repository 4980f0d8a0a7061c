//! Graphviz DOT rendering of the colored dependency graph

use super::GraphRenderer;
use crate::core::graph::DependencyGraph;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Fill color for healthy nodes
const COLOR_HEALTHY: &str = "#2e7d32";
/// Fill color for failed nodes
const COLOR_FAILED: &str = "#c62828";
/// Fill color for nodes without a status entry
const COLOR_UNKNOWN: &str = "#9e9e9e";

/// Renders the dependency graph as Graphviz DOT text
#[derive(Debug, Clone, Default)]
pub struct DotRenderer;

impl DotRenderer {
    /// Create a DOT renderer
    pub fn new() -> Self {
        Self
    }

    fn fill_color(status_class: Option<&&'static str>) -> &'static str {
        match status_class.copied() {
            Some("healthy") => COLOR_HEALTHY,
            Some("failed") => COLOR_FAILED,
            _ => COLOR_UNKNOWN,
        }
    }
}

impl GraphRenderer for DotRenderer {
    fn render(
        &self,
        graph: &DependencyGraph,
        status_classes: &BTreeMap<String, &'static str>,
    ) -> String {
        let mut out = String::from("digraph health {\n");
        out.push_str("  rankdir=LR;\n");
        out.push_str("  node [shape=box, style=filled, fontcolor=white];\n");

        for node in graph.node_ids() {
            let color = Self::fill_color(status_classes.get(node));
            let _ = writeln!(
                out,
                "  {} [fillcolor=\"{}\"];",
                quote_identifier(node),
                color
            );
        }

        for edge in graph.edges() {
            let _ = writeln!(
                out,
                "  {} -> {};",
                quote_identifier(&edge.from),
                quote_identifier(&edge.to)
            );
        }

        out.push_str("}\n");
        out
    }
}

/// Quote a node identifier for DOT, escaping embedded quotes
fn quote_identifier(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}
