//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::core::probe::SimulatedProbe;
use crate::server::routes;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_cors::Cors;
use actix_web::{
    middleware::{DefaultHeaders, Logger},
    web, App, HttpServer as ActixHttpServer,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// The probe executor is the simulated probe built from the probe
    /// configuration section; `with_state` swaps in a different executor.
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let probe = Arc::new(SimulatedProbe::from_config(config.probe()));
        let state = AppState::new(config.clone(), probe);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Create a server around an existing application state
    pub fn with_state(config: &Config, state: AppState) -> Self {
        Self {
            config: config.server().clone(),
            state,
        }
    }

    /// Create the Actix-web application
    pub(crate) fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors_config = &state.config.server().cors;
        let mut cors = Cors::default();

        if cors_config.enabled {
            if cors_config.allows_all_origins() {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_config.allowed_origins {
                    cors = cors.allowed_origin(origin);
                }
            }
        }

        // Malformed JSON and missing keys come back as 400 with the standard
        // error envelope instead of the default plain-text body.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                actix_web::HttpResponse::BadRequest().json(ApiResponse::error(message)),
            )
            .into()
        });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "HealthGraph")))
            .configure(routes::health::configure_routes)
            .configure(routes::check_health::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);
        let workers = self.config.workers;

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()));
        if let Some(workers) = workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| ServiceError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn format_bind_error(error: std::io::Error, bind_addr: &str) -> ServiceError {
        warn!("Failed to bind {}: {}", bind_addr, error);
        match error.kind() {
            std::io::ErrorKind::AddrInUse => ServiceError::server(format!(
                "Address {} already in use; is another instance running?",
                bind_addr
            )),
            std::io::ErrorKind::PermissionDenied => ServiceError::server(format!(
                "Permission denied binding {}; ports below 1024 need elevated privileges",
                bind_addr
            )),
            _ => ServiceError::server(format!("Failed to bind {}: {}", bind_addr, error)),
        }
    }
}
