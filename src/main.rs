//! locale-gate server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ request ID ─▶ timeout
//!                                                   │
//!                                                   ▼
//!                                     ┌──────────────────────────┐
//!                                     │ localization middleware  │
//!                                     │  excluded? ──yes──▶ skip │
//!                                     │      │ no                │
//!                                     │      ▼                   │
//!                                     │  ProviderChain           │
//!                                     │   query → route          │
//!                                     └────────────┬─────────────┘
//!                                                  ▼
//!     Client Response ◀── Content-Language ◀── culture handler
//! ```

use std::path::PathBuf;

use clap::Parser;

use locale_gate::config::{load_config, LocaleConfig};
use locale_gate::lifecycle::startup;
use locale_gate::observability::logging;

#[derive(Parser)]
#[command(name = "locale-gate")]
#[command(about = "Resolve the culture of every incoming request", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => LocaleConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!("locale-gate v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        config_file = ?args.config,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
