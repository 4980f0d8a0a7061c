//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::probe::ProbeExecutor;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across threads. The
/// probe executor is the injected capability the check handler fans out over;
/// swapping it never touches the engine.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Probe executor invoked once per graph node
    pub probe: Arc<dyn ProbeExecutor>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config, probe: Arc<dyn ProbeExecutor>) -> Self {
        Self {
            config: Arc::new(config),
            probe,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
