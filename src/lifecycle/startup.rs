//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration and build the server
//! - Start the metrics endpoint when enabled
//! - Bind the listener and serve until a shutdown signal

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::LocaleConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

/// Run the service with `config` until SIGINT/SIGTERM.
pub async fn run(config: LocaleConfig) -> Result<(), Box<dyn std::error::Error>> {
    let server = HttpServer::new(config)?;
    let config = server.config().clone();

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on(signals::wait_for_signal());

    server.run(listener, server_shutdown).await?;
    Ok(())
}
