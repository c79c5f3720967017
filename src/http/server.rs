//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the culture handler
//! - Wire up middleware (tracing, request ID, timeout, localization)
//! - Bind server to listener and stop on shutdown

use axum::{middleware, routing::any, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ConfigError, LocaleConfig};
use crate::config::validation::validate_config;
use crate::http::middleware::localization::{localization_middleware, LocalizationState};
use crate::http::response::culture_handler;

/// HTTP server exposing culture negotiation.
pub struct HttpServer {
    router: Router,
    config: LocaleConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: LocaleConfig) -> Result<Self, ConfigError> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        let state = Arc::new(LocalizationState::from_config(&config.localization)?);

        tracing::info!(
            supported_cultures = ?config.localization.supported_cultures,
            default_culture = %config.localization.default_culture,
            excluded_routes = state.exclusions.len(),
            providers = state.providers.len(),
            "Localization configured"
        );

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &LocaleConfig, state: Arc<LocalizationState>) -> Router {
        Router::new()
            .route("/{*path}", any(culture_handler))
            .route("/", any(culture_handler))
            .layer(middleware::from_fn_with_state(state, localization_middleware))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// A clone of the router, e.g. for driving it without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &LocaleConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
