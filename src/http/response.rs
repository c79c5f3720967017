//! Response handlers.
//!
//! # Responsibilities
//! - Report the culture the middleware attached to a request
//!
//! # Design Decisions
//! - Excluded requests carry no culture and report `excluded: true`

use axum::{body::Body, http::Request, Json};
use serde::Serialize;

use crate::culture::ResolvedCulture;

/// Body returned by [`culture_handler`].
#[derive(Debug, Clone, Serialize)]
pub struct CultureReport {
    pub path: String,
    pub excluded: bool,
    pub culture: Option<String>,
    pub ui_culture: Option<String>,
}

/// Echo the resolved culture of the request as JSON.
pub async fn culture_handler(request: Request<Body>) -> Json<CultureReport> {
    let resolved = request.extensions().get::<ResolvedCulture>();

    Json(CultureReport {
        path: request.uri().path().to_string(),
        excluded: resolved.is_none(),
        culture: resolved.map(|c| c.culture.clone()),
        ui_culture: resolved.map(|c| c.ui_culture.clone()),
    })
}
