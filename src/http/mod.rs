//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + request ID + timeout layers)
//!     → middleware/localization.rs (exclusion check, culture resolution)
//!     → request.rs (path, Accept-Language, cookie, query)
//!     → response.rs (handler, Content-Language)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use middleware::{localization_middleware, LocalizationState};
pub use server::HttpServer;
