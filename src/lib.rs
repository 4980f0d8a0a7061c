//! # HealthGraph
//!
//! Dependency-aware health check service. Accepts a component graph (nodes
//! plus directed dependency edges), probes every component concurrently, and
//! produces a consolidated health report with a colorable rendering of the
//! dependency graph.
//!
//! ## Features
//!
//! - **Validated graphs**: duplicate nodes, unknown edge endpoints, and cycles
//!   are rejected before any probe runs
//! - **Concurrent probing**: bounded fan-out with per-probe timeouts; wall
//!   time tracks the slowest probe, not the sum
//! - **Deterministic reports**: aggregation is keyed by component and
//!   order-independent; probe failures degrade the report instead of failing
//!   the request
//! - **Pluggable probes**: the engine depends only on the `ProbeExecutor`
//!   trait; the bundled simulated probe takes an explicit seed for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use healthgraph::core::{aggregate, plan, run_all, DependencyGraph, SchedulerOptions, SimulatedProbe};
//! use std::sync::Arc;
//! use std::time::Instant;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let graph = DependencyGraph::build(
//!         vec!["Database".into(), "API".into(), "Cache".into()],
//!         vec![
//!             ("Database".into(), "API".into()),
//!             ("Cache".into(), "API".into()),
//!         ],
//!     )?;
//!     graph.ensure_acyclic()?;
//!
//!     let order = plan(&graph)?;
//!     let probe = Arc::new(SimulatedProbe::from_config(&Default::default()));
//!
//!     let started = Instant::now();
//!     let results = run_all(&order, probe, &SchedulerOptions::default()).await;
//!     let report = aggregate(results, started.elapsed())?;
//!
//!     println!("{}", report.overall.as_str());
//!     Ok(())
//! }
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use healthgraph::config::Config;
//! use healthgraph::server::server::HttpServer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/healthgraph.yaml").await?;
//!     let server = HttpServer::new(&config)?;
//!     server.start().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod render;
pub mod server;
pub mod utils;

// Re-export the primary surface
pub use crate::config::Config;
pub use crate::core::{
    aggregate, plan, run_all, DependencyGraph, Edge, HealthReport, OverallStatus, ProbeExecutor,
    ProbeResult, ProbeStatus, ReportSummary, SchedulerOptions, SimulatedProbe,
};
pub use crate::render::{DotRenderer, GraphRenderer};
pub use crate::utils::error::{Result, ServiceError};
