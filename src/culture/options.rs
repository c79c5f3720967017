//! Static localization settings shared by every request.

use crate::config::schema::LocalizationConfig;
use crate::culture::context::ResolvedCulture;
use crate::culture::locale::Culture;

/// Immutable localization settings, built once at startup.
#[derive(Debug, Clone)]
pub struct LocalizationOptions {
    pub supported_cultures: Vec<Culture>,
    pub default_culture: String,
    pub default_ui_culture: String,
    pub culture_parameter_index: usize,
    pub cookie_name: String,
}

impl LocalizationOptions {
    pub fn from_config(config: &LocalizationConfig) -> Self {
        Self {
            supported_cultures: config
                .supported_cultures
                .iter()
                .map(|name| Culture::new(name.as_str()))
                .collect(),
            default_culture: config.default_culture.clone(),
            default_ui_culture: config.default_ui_culture.clone(),
            culture_parameter_index: config.culture_parameter_index,
            cookie_name: config.cookie_name.clone(),
        }
    }

    /// The configured fallback pair.
    pub fn default_pair(&self) -> ResolvedCulture {
        ResolvedCulture::new(&self.default_culture, &self.default_ui_culture)
    }

    /// Supported culture with exactly this name.
    pub fn supported(&self, name: &str) -> Option<&Culture> {
        self.supported_cultures.iter().find(|c| c.name() == name)
    }
}

impl Default for LocalizationOptions {
    fn default() -> Self {
        Self::from_config(&LocalizationConfig::default())
    }
}
