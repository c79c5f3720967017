//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locale_resolutions_total` (counter): resolved requests by `source`
//! - `locale_excluded_requests_total` (counter): requests skipped by exclusion rules

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::culture::CultureSource;

/// Install the Prometheus recorder and its scrape endpoint.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_resolution(source: CultureSource) {
    counter!("locale_resolutions_total", "source" => source.as_str()).increment(1);
}

pub fn record_excluded() {
    counter!("locale_excluded_requests_total").increment(1);
}
