//! Culture negotiation subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path, Accept-Language, cookie, query)
//!     → context.rs (RequestContext)
//!     → provider.rs (ProviderChain, first provider with an opinion wins)
//!         → query.rs  (optional, ?culture=...)
//!         → route.rs  (path segment, then header/cookie on "/")
//!     → ResolvedCulture (culture, ui_culture)
//! ```
//!
//! # Design Decisions
//! - Options are built once at startup and shared via Arc
//! - Providers are pure: same request, same answer
//! - Resolution never fails; the worst case is the configured default

pub mod context;
pub mod cookie;
pub mod locale;
pub mod options;
pub mod provider;
pub mod query;
pub mod route;

pub use context::{CultureSource, RequestContext, Resolution, ResolvedCulture};
pub use cookie::ParsedCookieLocales;
pub use locale::Culture;
pub use options::LocalizationOptions;
pub use provider::{CultureProvider, ProviderChain};
pub use query::QueryStringCultureProvider;
pub use route::RouteCultureProvider;
