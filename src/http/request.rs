//! Request inspection.
//!
//! # Responsibilities
//! - Extract the culture-relevant parts of a request (path, Accept-Language,
//!   culture cookie, query string)
//!
//! # Design Decisions
//! - Missing or non-UTF-8 headers read as empty
//! - An unreadable culture cookie is an absent signal, never an error

use axum::{
    body::Body,
    http::{header::ACCEPT_LANGUAGE, Request},
};

use crate::culture::cookie::{cookie_value, parse_cookie_value};
use crate::culture::RequestContext;

/// Build the culture request context for `request`.
pub fn request_context<'a>(request: &'a Request<Body>, cookie_name: &str) -> RequestContext<'a> {
    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let cookie_locales = cookie_value(request.headers(), cookie_name).and_then(|raw| {
        let parsed = parse_cookie_value(raw);
        if parsed.is_none() {
            tracing::debug!(cookie = %cookie_name, "ignoring malformed culture cookie");
        }
        parsed
    });

    RequestContext::new(request.uri().path())
        .with_accept_language(accept_language)
        .with_cookie_locales(cookie_locales)
        .with_query(request.uri().query())
}
