//! Breadth-first traversal planning
//!
//! The planner computes a deterministic visitation order over the dependency
//! graph: a breadth-first walk starting from the whole root set, with ties
//! between same-depth nodes broken by lexical order. The order is sequencing
//! metadata for logging and display; the set of nodes to probe is always every
//! declared node, so nodes unreachable from the root set are appended at the
//! end in lexical order.

use super::model::DependencyGraph;
use crate::utils::error::{Result, ServiceError};
use std::collections::HashSet;
use tracing::debug;

/// Compute the deterministic check order for a graph
///
/// Fails with `NoRootNodes` when the root set is empty. Given acyclicity is
/// validated up front, a non-empty graph always has at least one node with
/// in-degree zero, so this error is reachable only for an empty node set.
pub fn plan(graph: &DependencyGraph) -> Result<Vec<String>> {
    let roots = graph.roots();
    if roots.is_empty() {
        return Err(ServiceError::NoRootNodes);
    }

    let mut order: Vec<String> = Vec::with_capacity(graph.len());
    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.len());

    // Roots come back sorted; walk layer by layer, sorting each layer so
    // same-depth nodes always appear in lexical order.
    let mut layer: Vec<&str> = roots;
    for node in &layer {
        visited.insert(node);
    }

    while !layer.is_empty() {
        let mut next: Vec<&str> = Vec::new();
        for node in layer.drain(..) {
            order.push(node.to_string());
            for successor in graph.successors(node) {
                if visited.insert(successor.as_str()) {
                    next.push(successor.as_str());
                }
            }
        }
        next.sort_unstable();
        layer = next;
    }

    // Completeness: every declared node is probed even when the walk cannot
    // reach it. Leftovers are appended in lexical order.
    let mut unreached: Vec<&str> = graph
        .node_ids()
        .iter()
        .map(String::as_str)
        .filter(|node| !visited.contains(node))
        .collect();
    unreached.sort_unstable();
    order.extend(unreached.into_iter().map(String::from));

    debug!(order = ?order, "planned check order");
    Ok(order)
}
