//! Route-based culture resolution.
//!
//! # Resolution Order
//! ```text
//! path longer than "/"
//!     → segment at culture_parameter_index
//!     → culture-shaped?  yes: (segment, segment)
//!                        no:  (default_culture, default_ui_culture)
//!
//! path is "/" or empty
//!     → default_culture
//!     → overwritten by first supported culture named in Accept-Language
//!     → overwritten by first supported culture named in the cookie
//!     → (locale, locale)
//! ```
//!
//! # Design Decisions
//! - A culture-shaped path segment is trusted as-is, even when it is not
//!   in the supported set
//! - Accept-Language tokens are compared verbatim: no trimming and no
//!   quality value stripping, so `en;q=0.9` never matches `en`
//! - Cookie is evaluated after the header and always overwrites it

use std::sync::Arc;

use crate::culture::context::{CultureSource, RequestContext, Resolution, ResolvedCulture};
use crate::culture::locale::{is_path_culture, Culture};
use crate::culture::options::LocalizationOptions;
use crate::culture::provider::CultureProvider;

/// Resolves the culture from the request path, falling back to the
/// `Accept-Language` header and the culture cookie on the root path.
#[derive(Debug, Clone)]
pub struct RouteCultureProvider {
    options: Arc<LocalizationOptions>,
}

impl RouteCultureProvider {
    pub fn new(options: Arc<LocalizationOptions>) -> Self {
        Self { options }
    }

    /// Resolve the culture pair for a request.
    pub fn resolve(&self, request: &RequestContext<'_>) -> ResolvedCulture {
        self.negotiate(request).culture
    }

    /// Resolve the culture pair and report which signal decided it.
    pub fn negotiate(&self, request: &RequestContext<'_>) -> Resolution {
        if request.path.len() <= 1 {
            return self.infer(request);
        }

        let segment = request
            .path
            .split('/')
            .nth(self.options.culture_parameter_index);

        match segment {
            Some(culture) if is_path_culture(culture) => {
                Resolution::new(ResolvedCulture::uniform(culture), CultureSource::Path)
            }
            _ => Resolution::new(self.options.default_pair(), CultureSource::PathFallback),
        }
    }

    fn infer(&self, request: &RequestContext<'_>) -> Resolution {
        let supported = &self.options.supported_cultures;
        let mut locale = self.options.default_culture.as_str();
        let mut source = CultureSource::Default;

        let tokens: Vec<&str> = request.accept_language.split(',').collect();
        if let Some(culture) = Culture::first_match(supported, &tokens) {
            locale = culture.name();
            source = CultureSource::Header;
        }

        if let Some(cookie) = &request.cookie_locales {
            if let Some(culture) = Culture::first_match(supported, &cookie.candidates()) {
                locale = culture.name();
                source = CultureSource::Cookie;
            }
        }

        Resolution::new(ResolvedCulture::uniform(locale), source)
    }
}

impl CultureProvider for RouteCultureProvider {
    fn name(&self) -> &'static str {
        "route"
    }

    fn determine(&self, request: &RequestContext<'_>) -> Option<Resolution> {
        Some(self.negotiate(request))
    }
}
