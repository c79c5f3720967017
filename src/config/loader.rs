//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LocaleConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::exclusion::ExclusionError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Exclusion rules: {0}")]
    Exclusion(#[from] ExclusionError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LocaleConfig, ConfigError> {
    let config: LocaleConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LocaleConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[listener]
bind_address = "127.0.0.1:3000"

[localization]
supported_cultures = ["en-US", "fr-FR"]
default_culture = "fr-FR"
default_ui_culture = "en-US"
culture_parameter_index = 2
excluded_routes = ["^/api/"]

[localization.query_string]
enabled = true
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
        assert_eq!(config.localization.supported_cultures, vec!["en-US", "fr-FR"]);
        assert_eq!(config.localization.default_ui_culture, "en-US");
        assert_eq!(config.localization.culture_parameter_index, 2);
        assert!(config.localization.query_string.enabled);
        assert_eq!(config.localization.query_string.culture_key, "culture");
        assert_eq!(config.localization.cookie_name, ".AspNetCore.Culture");
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.localization.default_culture, "en-US");
        assert_eq!(config.localization.culture_parameter_index, 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[localization\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_exclusion_rejected_at_load() {
        let err = parse_config("[localization]\nexcluded_routes = [\"(\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().starts_with("Validation failed: "));
    }
}
