//! Localization middleware.
//! Skips excluded routes, resolves the culture pair and attaches it to the request.
//! A culture chosen through the query string is persisted in the culture cookie.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{CONTENT_LANGUAGE, SET_COOKIE},
        HeaderValue, Request,
    },
    middleware::Next,
    response::Response,
};

use crate::config::LocalizationConfig;
use crate::culture::cookie::set_cookie_value;
use crate::culture::{
    CultureSource, LocalizationOptions, ProviderChain, QueryStringCultureProvider,
    RouteCultureProvider,
};
use crate::http::request::request_context;
use crate::observability::metrics;
use crate::routing::{ExclusionError, ExclusionRules};

/// State required for culture negotiation.
#[derive(Clone, Debug)]
pub struct LocalizationState {
    pub options: Arc<LocalizationOptions>,
    pub exclusions: Arc<ExclusionRules>,
    pub providers: ProviderChain,
}

impl LocalizationState {
    /// Compile exclusion rules and assemble the provider chain.
    pub fn from_config(config: &LocalizationConfig) -> Result<Self, ExclusionError> {
        let options = Arc::new(LocalizationOptions::from_config(config));
        let exclusions = Arc::new(ExclusionRules::new(&config.excluded_routes)?);

        let mut providers = ProviderChain::new(options.default_pair());
        if config.query_string.enabled {
            providers = providers.with_provider(Arc::new(QueryStringCultureProvider::new(
                options.clone(),
                &config.query_string,
            )));
        }
        providers = providers.with_provider(Arc::new(RouteCultureProvider::new(options.clone())));

        Ok(Self {
            options,
            exclusions,
            providers,
        })
    }
}

pub async fn localization_middleware(
    State(state): State<Arc<LocalizationState>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // 1. Excluded routes bypass resolution entirely.
    if state.exclusions.is_excluded(req.uri().path()) {
        tracing::debug!(path = %req.uri().path(), "route excluded from culture resolution");
        metrics::record_excluded();
        return next.run(req).await;
    }

    // 2. Resolve
    let resolution = {
        let ctx = request_context(&req, &state.options.cookie_name);
        state.providers.resolve(&ctx)
    };

    tracing::debug!(
        path = %req.uri().path(),
        culture = %resolution.culture.culture,
        ui_culture = %resolution.culture.ui_culture,
        source = resolution.source.as_str(),
        "culture resolved"
    );
    metrics::record_resolution(resolution.source);

    // 3. Attach for downstream handlers
    let content_language = HeaderValue::from_str(&resolution.culture.culture).ok();
    let persist = match resolution.source {
        CultureSource::QueryString => HeaderValue::from_str(&set_cookie_value(
            &state.options.cookie_name,
            &resolution.culture,
        ))
        .ok(),
        _ => None,
    };
    req.extensions_mut().insert(resolution.culture);

    let mut response = next.run(req).await;
    if let Some(value) = content_language {
        response
            .headers_mut()
            .entry(CONTENT_LANGUAGE)
            .or_insert(value);
    }
    // 4. Remember an explicit query choice for later requests
    if let Some(value) = persist {
        response.headers_mut().append(SET_COOKIE, value);
    }
    response
}
