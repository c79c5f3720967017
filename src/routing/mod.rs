//! Routing subsystem: which paths take part in culture resolution.
//!
//! # Data Flow
//! ```text
//! Rule compilation (at startup):
//!     excluded_routes: Vec<String>
//!     → matcher.rs (compile PatternMatcher per rule)
//!     → exclusion.rs (freeze as immutable ExclusionRules)
//!
//! Incoming request path
//!     → ExclusionRules::is_excluded
//!     → excluded: skip culture resolution
//! ```
//!
//! # Design Decisions
//! - Rules compiled at startup, immutable at runtime
//! - Deterministic: same input always gives the same answer
//! - First match wins (configured order)

pub mod exclusion;
pub mod matcher;

pub use exclusion::{is_excluded, ExclusionError, ExclusionRules};
