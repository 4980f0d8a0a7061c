//! Configuration management
//!
//! This module handles loading and validation of all service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { service };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load defaults, then apply environment overrides
    ///
    /// `HEALTHGRAPH_HOST` and `HEALTHGRAPH_PORT` override the server binding.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides on top of the current values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("HEALTHGRAPH_HOST") {
            self.service.server.host = host;
        }
        if let Ok(port) = std::env::var("HEALTHGRAPH_PORT") {
            self.service.server.port = port.parse().map_err(|e| {
                ServiceError::config(format!("Invalid HEALTHGRAPH_PORT: {}", e))
            })?;
        }
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get probe configuration
    pub fn probe(&self) -> &ProbeConfig {
        &self.service.probe
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.service.validate().map_err(ServiceError::Config)
    }
}
