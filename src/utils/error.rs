//! Error handling for the health check service
//!
//! This module defines all error types used throughout the service.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Malformed graph input (duplicate node, unknown edge endpoint)
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// The dependency graph contains a cycle
    #[error("Graph contains a cycle: {0}")]
    CyclicGraph(String),

    /// The graph has no root nodes (empty node set)
    #[error("Graph has no root nodes")]
    NoRootNodes,

    /// Two probe results reported the same component
    #[error("Duplicate component in results: {0}")]
    DuplicateComponent(String),

    /// The whole request exceeded its latency bound
    #[error("Request timed out: {0}")]
    RequestTimeout(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            ServiceError::InvalidGraph(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_GRAPH",
                self.to_string(),
            ),
            ServiceError::CyclicGraph(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "CYCLIC_GRAPH",
                self.to_string(),
            ),
            ServiceError::NoRootNodes => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "NO_ROOT_NODES",
                self.to_string(),
            ),
            ServiceError::DuplicateComponent(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DUPLICATE_COMPONENT",
                self.to_string(),
            ),
            ServiceError::RequestTimeout(_) => (
                actix_web::http::StatusCode::GATEWAY_TIMEOUT,
                "REQUEST_TIMEOUT",
                self.to_string(),
            ),
            ServiceError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            ServiceError::Serialization(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "SERIALIZATION_ERROR",
                "Serialization failed".to_string(),
            ),
            ServiceError::Yaml(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Configuration parsing failed".to_string(),
            ),
            ServiceError::Io(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                "IO operation failed".to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

impl ServiceError {
    /// Invalid graph input with a detail message
    pub fn invalid_graph<S: Into<String>>(message: S) -> Self {
        Self::InvalidGraph(message.into())
    }

    /// Configuration error with a detail message
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Server error with a detail message
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Whether this error is a client-side validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidGraph(_) | ServiceError::CyclicGraph(_) | ServiceError::NoRootNodes
        )
    }
}
