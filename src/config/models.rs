//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default request timeout in seconds
pub fn default_request_timeout() -> u64 {
    30
}

/// Default per-probe timeout in milliseconds
pub fn default_probe_timeout_ms() -> u64 {
    5000
}

/// Default maximum concurrent probes
pub fn default_max_concurrency() -> usize {
    16
}

/// Default simulated probe latency lower bound in milliseconds
pub fn default_latency_min_ms() -> u64 {
    50
}

/// Default simulated probe latency upper bound in milliseconds
pub fn default_latency_max_ms() -> u64 {
    500
}

/// Default simulated probe success rate
pub fn default_success_rate() -> f64 {
    0.8
}

/// Root configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Probe configuration
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl ServiceConfig {
    /// Validate the whole configuration tree
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate()?;
        self.probe.validate()?;
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            request_timeout_secs: default_request_timeout(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Whole-request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Server port cannot be 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("Request timeout cannot be 0".to_string());
        }
        Ok(())
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Whether CORS headers are emitted
    #[serde(default)]
    pub enabled: bool,
    /// Allowed origins; `*` allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: vec![],
        }
    }
}

impl CorsConfig {
    /// Whether any origin is allowed
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Per-probe timeout in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
    /// Maximum probes in flight; `0` means one slot per node
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Simulated probe latency lower bound in milliseconds
    #[serde(default = "default_latency_min_ms")]
    pub latency_min_ms: u64,
    /// Simulated probe latency upper bound in milliseconds
    #[serde(default = "default_latency_max_ms")]
    pub latency_max_ms: u64,
    /// Simulated probe success probability, `0.0` to `1.0`
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
    /// Fixed random seed for deterministic simulated outcomes
    pub seed: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_probe_timeout_ms(),
            max_concurrency: default_max_concurrency(),
            latency_min_ms: default_latency_min_ms(),
            latency_max_ms: default_latency_max_ms(),
            success_rate: default_success_rate(),
            seed: None,
        }
    }
}

impl ProbeConfig {
    /// Per-probe timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Validate probe configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_ms == 0 {
            return Err("Probe timeout cannot be 0".to_string());
        }
        if self.latency_min_ms > self.latency_max_ms {
            return Err("Probe latency lower bound exceeds upper bound".to_string());
        }
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err("Probe success rate must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}
