//! Query-string culture provider.
//!
//! Reads `?culture=fr-FR&ui-culture=en-US`. When only one key is present it
//! stands in for the other. Values must name a supported culture. Keys and
//! values are both form-decoded, so `ui%2Dculture` is the `ui-culture` key.

use std::sync::Arc;

use crate::config::schema::QueryStringConfig;
use crate::culture::context::{CultureSource, RequestContext, Resolution, ResolvedCulture};
use crate::culture::options::LocalizationOptions;
use crate::culture::provider::CultureProvider;

#[derive(Debug, Clone)]
pub struct QueryStringCultureProvider {
    options: Arc<LocalizationOptions>,
    culture_key: String,
    ui_culture_key: String,
}

impl QueryStringCultureProvider {
    pub fn new(options: Arc<LocalizationOptions>, config: &QueryStringConfig) -> Self {
        Self {
            options,
            culture_key: config.culture_key.clone(),
            ui_culture_key: config.ui_culture_key.clone(),
        }
    }

    fn lookup(&self, query: &str) -> (Option<String>, Option<String>) {
        let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
            Ok(pairs) => pairs,
            Err(error) => {
                tracing::debug!(%error, "unreadable query string");
                return (None, None);
            }
        };

        let mut culture = None;
        let mut ui_culture = None;
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            if key == self.culture_key {
                culture = Some(value);
            } else if key == self.ui_culture_key {
                ui_culture = Some(value);
            }
        }
        (culture, ui_culture)
    }
}

impl CultureProvider for QueryStringCultureProvider {
    fn name(&self) -> &'static str {
        "query_string"
    }

    fn determine(&self, request: &RequestContext<'_>) -> Option<Resolution> {
        let (culture, ui_culture) = match self.lookup(request.query?) {
            (Some(c), Some(uic)) => (c, uic),
            (Some(c), None) => (c.clone(), c),
            (None, Some(uic)) => (uic.clone(), uic),
            (None, None) => return None,
        };

        if self.options.supported(&culture).is_none()
            || self.options.supported(&ui_culture).is_none()
        {
            tracing::debug!(%culture, %ui_culture, "query string names unsupported culture");
            return None;
        }

        Some(Resolution::new(
            ResolvedCulture::new(culture, ui_culture),
            CultureSource::QueryString,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::culture::locale::Culture;

    fn provider() -> QueryStringCultureProvider {
        let options = LocalizationOptions {
            supported_cultures: vec![Culture::new("en-US"), Culture::new("fr-FR")],
            ..LocalizationOptions::default()
        };
        QueryStringCultureProvider::new(Arc::new(options), &QueryStringConfig::default())
    }

    #[test]
    fn test_both_keys() {
        let request = RequestContext::new("/x").with_query(Some("culture=fr-FR&ui-culture=en-US"));
        let resolution = provider().determine(&request).unwrap();
        assert_eq!(resolution.culture, ResolvedCulture::new("fr-FR", "en-US"));
        assert_eq!(resolution.source, CultureSource::QueryString);
    }

    #[test]
    fn test_single_key_stands_in() {
        let request = RequestContext::new("/x").with_query(Some("page=2&ui-culture=fr-FR"));
        let resolution = provider().determine(&request).unwrap();
        assert_eq!(resolution.culture, ResolvedCulture::uniform("fr-FR"));
    }

    #[test]
    fn test_unsupported_or_missing_is_none() {
        let provider = provider();
        assert!(provider.determine(&RequestContext::new("/x")).is_none());
        assert!(provider
            .determine(&RequestContext::new("/x").with_query(Some("page=2")))
            .is_none());
        assert!(provider
            .determine(&RequestContext::new("/x").with_query(Some("culture=ja-JP")))
            .is_none());
        // Only exact names are accepted here.
        assert!(provider
            .determine(&RequestContext::new("/x").with_query(Some("culture=fr")))
            .is_none());
    }

    #[test]
    fn test_percent_encoded_value() {
        let request = RequestContext::new("/").with_query(Some("culture=en%2DUS"));
        let resolution = provider().determine(&request).unwrap();
        assert_eq!(resolution.culture, ResolvedCulture::uniform("en-US"));
    }

    #[test]
    fn test_percent_encoded_key() {
        let request = RequestContext::new("/").with_query(Some("ui%2Dculture=fr-FR"));
        let resolution = provider().determine(&request).unwrap();
        assert_eq!(resolution.culture, ResolvedCulture::uniform("fr-FR"));
        assert_eq!(resolution.source, CultureSource::QueryString);
    }

    #[test]
    fn test_empty_value_is_ignored() {
        let request = RequestContext::new("/").with_query(Some("culture=&ui-culture=fr-FR"));
        let resolution = provider().determine(&request).unwrap();
        assert_eq!(resolution.culture, ResolvedCulture::uniform("fr-FR"));
    }
}
