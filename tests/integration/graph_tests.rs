//! Graph validation integration tests
//!
//! Exercise graph construction, validation, and traversal through the
//! public API.

#[cfg(test)]
mod tests {
    use crate::common::{edge_pairs, node_ids, scenario_graph};
    use healthgraph::{plan, DependencyGraph, ServiceError};

    /// Valid inputs build an acyclic graph
    #[test]
    fn test_valid_input_builds_acyclic_graph() {
        let graph = scenario_graph();
        assert!(graph.is_acyclic());
        assert!(graph.ensure_acyclic().is_ok());
        assert_eq!(graph.len(), 3);
    }

    /// A deep chain stays acyclic and plans root-first
    #[test]
    fn test_chain_plans_in_dependency_order() {
        let graph = DependencyGraph::build(
            node_ids(&["d", "c", "b", "a"]),
            edge_pairs(&[("a", "b"), ("b", "c"), ("c", "d")]),
        )
        .unwrap();

        assert_eq!(plan(&graph).unwrap(), vec!["a", "b", "c", "d"]);
    }

    /// Unknown edge endpoints are rejected at build time
    #[test]
    fn test_unknown_endpoint_rejected() {
        let result = DependencyGraph::build(node_ids(&["A"]), edge_pairs(&[("A", "B")]));
        assert!(matches!(result.unwrap_err(), ServiceError::InvalidGraph(_)));
    }

    /// Duplicate node identifiers are rejected at build time
    #[test]
    fn test_duplicate_node_rejected() {
        let result = DependencyGraph::build(node_ids(&["A", "B", "A"]), vec![]);
        assert!(matches!(result.unwrap_err(), ServiceError::InvalidGraph(_)));
    }

    /// Larger cycles are detected, not just two-node ones
    #[test]
    fn test_three_node_cycle_detected() {
        let graph = DependencyGraph::build(
            node_ids(&["A", "B", "C"]),
            edge_pairs(&[("A", "B"), ("B", "C"), ("C", "A")]),
        )
        .unwrap();

        assert!(!graph.is_acyclic());
        assert!(matches!(
            graph.ensure_acyclic().unwrap_err(),
            ServiceError::CyclicGraph(_)
        ));
    }

    /// The planner covers every declared node exactly once
    #[test]
    fn test_plan_covers_all_nodes_once() {
        let graph = DependencyGraph::build(
            node_ids(&["a", "b", "c", "d", "lonely"]),
            edge_pairs(&[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]),
        )
        .unwrap();

        let order = plan(&graph).unwrap();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(order.len(), graph.len());
        assert_eq!(sorted.len(), graph.len());
    }
}
