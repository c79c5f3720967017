//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate culture identifiers and exclusion patterns
//! - Validate value ranges and addresses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LocaleConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::LocaleConfig;
use crate::culture::locale::is_culture_name;
use crate::routing::exclusion::ExclusionRules;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a culture name (expected `xx` or `xx-YY`)")]
    InvalidCulture { field: &'static str, value: String },

    #[error("localization.supported_cultures: `{0}` is listed more than once")]
    DuplicateCulture(String),

    #[error("localization.excluded_routes: {0}")]
    InvalidExclusion(String),

    #[error("{field}: `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &LocaleConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let localization = &config.localization;

    for (field, value) in [
        ("localization.default_culture", &localization.default_culture),
        ("localization.default_ui_culture", &localization.default_ui_culture),
    ] {
        if !is_culture_name(value) {
            errors.push(ValidationError::InvalidCulture {
                field,
                value: value.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for culture in &localization.supported_cultures {
        if !is_culture_name(culture) {
            errors.push(ValidationError::InvalidCulture {
                field: "localization.supported_cultures",
                value: culture.clone(),
            });
        } else if !seen.insert(culture.as_str()) {
            errors.push(ValidationError::DuplicateCulture(culture.clone()));
        }
    }

    if let Err(e) = ExclusionRules::new(&localization.excluded_routes) {
        errors.push(ValidationError::InvalidExclusion(e.to_string()));
    }

    if localization.cookie_name.trim().is_empty() {
        errors.push(ValidationError::Empty("localization.cookie_name"));
    }

    let query = &localization.query_string;
    if query.enabled {
        if query.culture_key.is_empty() {
            errors.push(ValidationError::Empty("localization.query_string.culture_key"));
        }
        if query.ui_culture_key.is_empty() {
            errors.push(ValidationError::Empty("localization.query_string.ui_culture_key"));
        }
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
