//! Per-request inputs and outputs of culture resolution.

use serde::Serialize;

use crate::culture::cookie::ParsedCookieLocales;

/// What a culture provider sees of the incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext<'a> {
    /// Request path, e.g. `/en/about`.
    pub path: &'a str,
    /// Raw `Accept-Language` header value; empty when absent.
    pub accept_language: &'a str,
    /// Candidate codes decoded from the culture cookie.
    pub cookie_locales: Option<ParsedCookieLocales>,
    /// Raw query string without the leading `?`.
    pub query: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_accept_language(mut self, accept_language: &'a str) -> Self {
        self.accept_language = accept_language;
        self
    }

    #[must_use]
    pub fn with_cookie_locales(mut self, cookie_locales: Option<ParsedCookieLocales>) -> Self {
        self.cookie_locales = cookie_locales;
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: Option<&'a str>) -> Self {
        self.query = query;
        self
    }
}

/// The culture pair governing a request.
///
/// Stored in request extensions for downstream handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCulture {
    /// Culture used to select localized content.
    pub culture: String,
    /// Culture used to select UI strings.
    pub ui_culture: String,
}

impl ResolvedCulture {
    pub fn new(culture: impl Into<String>, ui_culture: impl Into<String>) -> Self {
        Self {
            culture: culture.into(),
            ui_culture: ui_culture.into(),
        }
    }

    /// Both cultures set to the same value.
    pub fn uniform(culture: impl Into<String>) -> Self {
        let culture = culture.into();
        Self {
            ui_culture: culture.clone(),
            culture,
        }
    }
}

/// Which signal decided the resolved culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CultureSource {
    /// Well-formed culture segment in the path.
    Path,
    /// Path segment present but not culture-shaped.
    PathFallback,
    QueryString,
    Cookie,
    Header,
    Default,
}

impl CultureSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::PathFallback => "path_fallback",
            Self::QueryString => "query_string",
            Self::Cookie => "cookie",
            Self::Header => "header",
            Self::Default => "default",
        }
    }
}

/// A resolved culture together with the signal that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub culture: ResolvedCulture,
    pub source: CultureSource,
}

impl Resolution {
    pub fn new(culture: ResolvedCulture, source: CultureSource) -> Self {
        Self { culture, source }
    }
}
