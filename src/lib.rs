//! Request culture negotiation for HTTP services.
//!
//! Decides which culture governs a request (path segment, Accept-Language,
//! culture cookie, optional query string) and which paths skip the decision.

pub mod config;
pub mod culture;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::LocaleConfig;
pub use culture::{CultureProvider, RequestContext, ResolvedCulture, RouteCultureProvider};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{is_excluded, ExclusionRules};
