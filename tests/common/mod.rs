//! Shared utilities for integration tests.

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use locale_gate::config::LocaleConfig;
use locale_gate::HttpServer;
use serde_json::Value;
use tower::ServiceExt;

/// Config used across tests: three cultures, distinct default UI culture.
pub fn test_config() -> LocaleConfig {
    let mut config = LocaleConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.localization.supported_cultures =
        vec!["en-US".into(), "fr-FR".into(), "de-DE".into()];
    config.localization.default_culture = "en-US".into();
    config.localization.default_ui_culture = "en-GB".into();
    config.localization.excluded_routes = vec!["^/api/".into(), r"\.(css|js)$".into()];
    config
}

#[allow(dead_code)]
pub fn router(config: LocaleConfig) -> Router {
    HttpServer::new(config).unwrap().router()
}

/// Send a request through the router and decode the JSON body.
#[allow(dead_code)]
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, headers, body)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}
