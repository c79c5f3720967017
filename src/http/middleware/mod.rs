//! Request middleware.

pub mod localization;

pub use localization::{localization_middleware, LocalizationState};
