//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Middleware and providers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution and exclusion counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, culture, source)
//! - Request ID set by tower-http and visible in trace spans
//! - Metrics are cheap counters; a no-op when no recorder is installed

pub mod logging;
pub mod metrics;
