//! Error handling integration tests
//!
//! Tests for error types and their HTTP status mapping. These tests verify
//! that errors flow correctly through the boundary.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use healthgraph::ServiceError;

    /// Graph validation failures map to 400
    #[test]
    fn test_invalid_graph_maps_to_bad_request() {
        let err = ServiceError::invalid_graph("duplicate node: A");
        assert_eq!(err.error_response().status().as_u16(), 400);
        assert!(err.is_validation());
    }

    /// Cycles map to 400
    #[test]
    fn test_cyclic_graph_maps_to_bad_request() {
        let err = ServiceError::CyclicGraph("A, B".to_string());
        assert_eq!(err.error_response().status().as_u16(), 400);
        assert!(err.is_validation());
    }

    /// Empty graphs map to 400
    #[test]
    fn test_no_root_nodes_maps_to_bad_request() {
        let err = ServiceError::NoRootNodes;
        assert_eq!(err.error_response().status().as_u16(), 400);
    }

    /// Request timeouts map to 504
    #[test]
    fn test_request_timeout_maps_to_gateway_timeout() {
        let err = ServiceError::RequestTimeout("health check exceeded 30s".to_string());
        assert_eq!(err.error_response().status().as_u16(), 504);
        assert!(!err.is_validation());
    }

    /// The defensive aggregator invariant maps to 500
    #[test]
    fn test_duplicate_component_maps_to_internal_error() {
        let err = ServiceError::DuplicateComponent("Database".to_string());
        assert_eq!(err.error_response().status().as_u16(), 500);
    }

    /// Configuration errors map to 500
    #[test]
    fn test_config_error_maps_to_internal_error() {
        let err = ServiceError::config("bad yaml");
        assert_eq!(err.error_response().status().as_u16(), 500);
    }

    /// Error display preserves the detail message
    #[test]
    fn test_error_display_includes_detail() {
        let err = ServiceError::invalid_graph("unknown endpoint: ghost");
        assert!(err.to_string().contains("unknown endpoint: ghost"));
    }
}
