//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::culture::cookie::DEFAULT_COOKIE_NAME;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LocaleConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Culture negotiation settings.
    pub localization: LocalizationConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Culture negotiation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Supported cultures in matching order (e.g., ["en-US", "fr-FR"]).
    pub supported_cultures: Vec<String>,

    /// Fallback content culture.
    pub default_culture: String,

    /// Fallback UI culture.
    pub default_ui_culture: String,

    /// Position of the culture code in the `/`-split request path.
    pub culture_parameter_index: usize,

    /// Name of the culture cookie.
    pub cookie_name: String,

    /// Regular expressions for paths that skip culture resolution.
    pub excluded_routes: Vec<String>,

    /// Query string provider settings.
    pub query_string: QueryStringConfig,
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self {
            supported_cultures: vec!["en-US".to_string()],
            default_culture: "en-US".to_string(),
            default_ui_culture: "en-US".to_string(),
            culture_parameter_index: 1,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            excluded_routes: Vec::new(),
            query_string: QueryStringConfig::default(),
        }
    }
}

/// Query string culture provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryStringConfig {
    /// Consult the query string before the route provider.
    pub enabled: bool,

    /// Key carrying the content culture.
    pub culture_key: String,

    /// Key carrying the UI culture.
    pub ui_culture_key: String,
}

impl Default for QueryStringConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            culture_key: "culture".to_string(),
            ui_culture_key: "ui-culture".to_string(),
        }
    }
}
