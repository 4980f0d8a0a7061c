//! Dependency graph construction and validation
//!
//! The graph is a pure data structure: nodes are opaque string identifiers,
//! edges are directed `(from, to)` pairs meaning "to depends on from". Edge
//! endpoints must reference declared nodes and node identifiers must be unique;
//! both are validated at construction time. Acyclicity is checked separately
//! before any traversal or probing.

use crate::utils::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// A directed dependency edge: `to` depends on `from`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The dependency
    pub from: String,
    /// The dependent
    pub to: String,
}

impl Edge {
    /// Create an edge from a `(from, to)` pair
    pub fn new<S: Into<String>>(from: S, to: S) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A validated directed dependency graph
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// Node identifiers in declaration order
    nodes: Vec<String>,
    /// Declared edges, repeats preserved
    edges: Vec<Edge>,
    /// Outgoing adjacency, `from -> [to, ...]`
    adjacency: HashMap<String, Vec<String>>,
    /// Incoming edge counts per node
    in_degrees: HashMap<String, usize>,
}

impl DependencyGraph {
    /// Build a graph from declared nodes and edges
    ///
    /// Fails with `InvalidGraph` when `nodes` contains a repeated identifier or
    /// an edge references an identifier not present in `nodes`. Duplicate edges
    /// are tolerated; they must not break traversal.
    pub fn build(nodes: Vec<String>, edges: Vec<(String, String)>) -> Result<Self> {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::with_capacity(nodes.len());
        let mut in_degrees: HashMap<String, usize> = HashMap::with_capacity(nodes.len());

        for node in &nodes {
            if adjacency.contains_key(node) {
                return Err(ServiceError::invalid_graph(format!(
                    "duplicate node: {}",
                    node
                )));
            }
            adjacency.insert(node.clone(), Vec::new());
            in_degrees.insert(node.clone(), 0);
        }

        let mut declared = Vec::with_capacity(edges.len());
        for (from, to) in edges {
            if !adjacency.contains_key(&from) {
                return Err(ServiceError::invalid_graph(format!(
                    "unknown endpoint: {}",
                    from
                )));
            }
            if !in_degrees.contains_key(&to) {
                return Err(ServiceError::invalid_graph(format!(
                    "unknown endpoint: {}",
                    to
                )));
            }

            if let Some(targets) = adjacency.get_mut(&from) {
                targets.push(to.clone());
            }
            in_degrees.entry(to.clone()).and_modify(|d| *d += 1);
            declared.push(Edge { from, to });
        }

        Ok(Self {
            nodes,
            edges: declared,
            adjacency,
            in_degrees,
        })
    }

    /// Number of declared nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Declared node identifiers in declaration order
    pub fn node_ids(&self) -> &[String] {
        &self.nodes
    }

    /// Declared edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Incoming edge count for a node; zero for unknown identifiers
    pub fn in_degree(&self, node: &str) -> usize {
        self.in_degrees.get(node).copied().unwrap_or(0)
    }

    /// Direct dependents of a node
    pub fn successors(&self, node: &str) -> &[String] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Nodes with no incoming edges, sorted for determinism
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self
            .nodes
            .iter()
            .filter(|node| self.in_degree(node) == 0)
            .map(String::as_str)
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Cycle detection via Kahn's algorithm, O(V+E)
    pub fn is_acyclic(&self) -> bool {
        self.unprocessed_after_kahn().is_empty()
    }

    /// Fail with `CyclicGraph` if the graph contains a cycle
    ///
    /// The error names the nodes that remain on a cycle so callers can report
    /// which part of the input is malformed.
    pub fn ensure_acyclic(&self) -> Result<()> {
        let mut remaining = self.unprocessed_after_kahn();
        if remaining.is_empty() {
            return Ok(());
        }
        remaining.sort_unstable();
        Err(ServiceError::CyclicGraph(remaining.join(", ")))
    }

    /// Run Kahn's algorithm and return the nodes it could not process
    ///
    /// An empty result means every node was ordered, i.e. the graph is a DAG.
    fn unprocessed_after_kahn(&self) -> Vec<String> {
        let mut degrees = self.in_degrees.clone();
        let mut queue: VecDeque<&str> = self
            .nodes
            .iter()
            .filter(|node| self.in_degree(node) == 0)
            .map(String::as_str)
            .collect();

        let mut processed = 0usize;
        while let Some(node) = queue.pop_front() {
            processed += 1;
            for successor in self.successors(node) {
                if let Some(degree) = degrees.get_mut(successor) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(successor);
                    }
                }
            }
        }

        if processed == self.nodes.len() {
            return Vec::new();
        }
        degrees
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(node, _)| node)
            .collect()
    }
}
