use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use locale_gate::config::{load_config, LocaleConfig};
use locale_gate::culture::cookie::{make_cookie_value, parse_cookie_value};
use locale_gate::http::LocalizationState;
use locale_gate::routing::is_excluded;
use locale_gate::RequestContext;

#[derive(Parser)]
#[command(name = "locale-cli")]
#[command(about = "Check culture resolution against a locale-gate config", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a path skips culture resolution
    Excluded {
        path: String,
    },
    /// Resolve the culture pair for a request
    Resolve {
        path: String,

        /// Raw Accept-Language header value
        #[arg(short, long, default_value = "")]
        accept_language: String,

        /// Raw culture cookie value, e.g. "c=fr-FR|uic=fr-FR"
        #[arg(long)]
        cookie: Option<String>,

        /// Raw query string without the leading '?'
        #[arg(short, long)]
        query: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LocaleConfig::default(),
    };

    let output = match cli.command {
        Commands::Excluded { path } => {
            let excluded = is_excluded(&config.localization.excluded_routes, &path)?;
            json!({ "path": path, "excluded": excluded })
        }
        Commands::Resolve {
            path,
            accept_language,
            cookie,
            query,
        } => {
            let state = LocalizationState::from_config(&config.localization)?;
            if state.exclusions.is_excluded(&path) {
                json!({ "path": path, "excluded": true })
            } else {
                let resolution = {
                    let ctx = RequestContext::new(&path)
                        .with_accept_language(&accept_language)
                        .with_cookie_locales(cookie.as_deref().and_then(parse_cookie_value))
                        .with_query(query.as_deref());
                    state.providers.resolve(&ctx)
                };
                json!({
                    "path": path,
                    "excluded": false,
                    "culture": resolution.culture.culture,
                    "ui_culture": resolution.culture.ui_culture,
                    "source": resolution.source,
                    "cookie": make_cookie_value(&resolution.culture),
                })
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
