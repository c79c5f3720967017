//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LocaleConfig (validated, immutable)
//!     → LocalizationOptions + ExclusionRules, shared via Arc
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::LocaleConfig;
pub use schema::ListenerConfig;
pub use schema::LocalizationConfig;
pub use schema::ObservabilityConfig;
pub use schema::QueryStringConfig;
