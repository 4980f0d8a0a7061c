//! Service liveness and version endpoints
//!
//! These endpoints report on the service itself, not on a submitted graph;
//! load balancers and monitoring systems poll them.

use crate::server::routes::ApiResponse;
use actix_web::{web, HttpResponse, Result as ActixResult};
use std::borrow::Cow;
use tracing::debug;

/// Configure liveness routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Basic health check endpoint
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatusPayload {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}

/// Version and build metadata endpoint
async fn version_info() -> ActixResult<HttpResponse> {
    debug!("Version info requested");

    let version = VersionPayload {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(version)))
}

/// Liveness payload
#[derive(Debug, serde::Serialize)]
pub struct HealthStatusPayload {
    /// Service status
    pub status: Cow<'static, str>,
    /// Current timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Service version
    pub version: Cow<'static, str>,
}

/// Build metadata payload
#[derive(Debug, serde::Serialize)]
pub struct VersionPayload {
    /// Crate version
    pub version: Cow<'static, str>,
    /// Unix timestamp of the build
    pub build_time: Cow<'static, str>,
    /// Git commit hash
    pub git_hash: Cow<'static, str>,
    /// Rust toolchain version
    pub rust_version: Cow<'static, str>,
}
