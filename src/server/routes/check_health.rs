//! Graph health check endpoint
//!
//! `POST /check_health` accepts a component graph, probes every component
//! concurrently, and returns the consolidated report. Validation failures
//! (duplicate nodes, unknown endpoints, cycles, empty graphs) reject the
//! request before any probe runs; individual probe failures are part of a
//! normal `200` response with a DEGRADED report.

use crate::core::graph::{plan, DependencyGraph};
use crate::core::report::{aggregate, HealthReport};
use crate::core::scheduler::{run_all, SchedulerOptions};
use crate::render::{render_report_page, DotRenderer, GraphRenderer};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Configure the check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/check_health", web::post().to(check_health));
}

/// Request payload: the component graph to check
#[derive(Debug, Clone, Deserialize)]
pub struct CheckHealthRequest {
    /// Component identifiers
    pub nodes: Vec<String>,
    /// Dependency edges as `[from, to]` pairs
    pub edges: Vec<(String, String)>,
}

/// JSON response payload
#[derive(Debug, Clone, Serialize)]
pub struct CheckHealthResponse {
    /// The consolidated health report
    pub report: HealthReport,
    /// Dependency-aware sequencing order of the check
    pub check_order: Vec<String>,
    /// Graphviz DOT rendering of the colored graph
    pub graph_dot: String,
}

/// Rendering selection
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// `json` forces the JSON payload instead of the HTML page
    pub format: Option<String>,
}

/// Handle a health check request
pub async fn check_health(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<RenderQuery>,
    body: web::Json<CheckHealthRequest>,
) -> Result<HttpResponse> {
    let request_timeout = state.config.server().request_timeout();

    let response =
        match tokio::time::timeout(request_timeout, run_check(&state, body.into_inner())).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(ServiceError::RequestTimeout(format!(
                    "health check exceeded {}s",
                    request_timeout.as_secs()
                )))
            }
        };

    if wants_json(&req, &query) {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(response)));
    }

    let page = render_report_page(&response.report, &response.graph_dot, &response.check_order);
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(page))
}

/// Run the core flow: build, validate, plan, probe, aggregate
async fn run_check(state: &AppState, request: CheckHealthRequest) -> Result<CheckHealthResponse> {
    let graph = DependencyGraph::build(request.nodes, request.edges)?;
    graph.ensure_acyclic()?;
    let order = plan(&graph)?;

    info!(
        nodes = graph.len(),
        edges = graph.edges().len(),
        "checking component graph"
    );

    let probe_config = state.config.probe();
    let options = SchedulerOptions {
        max_concurrency: probe_config.max_concurrency,
        probe_timeout: probe_config.timeout(),
    };

    let started = Instant::now();
    let results = run_all(&order, Arc::clone(&state.probe), &options).await;
    let report = aggregate(results, started.elapsed())?;

    info!(
        overall = report.overall.as_str(),
        failed = report.summary.failed_components,
        total_secs = report.total_duration.as_secs_f64(),
        "health check finished"
    );

    let graph_dot = DotRenderer::new().render(&graph, &report.status_classes());
    Ok(CheckHealthResponse {
        report,
        check_order: order,
        graph_dot,
    })
}

/// Whether the caller asked for the JSON payload
fn wants_json(req: &HttpRequest, query: &RenderQuery) -> bool {
    if query.format.as_deref() == Some("json") {
        return true;
    }
    req.headers()
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}
