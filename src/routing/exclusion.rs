//! Route exclusion from culture resolution.
//!
//! # Responsibilities
//! - Decide whether a request path bypasses culture resolution
//! - Surface malformed patterns as configuration errors
//!
//! # Design Decisions
//! - Rules are evaluated in order, first match wins
//! - A malformed rule is never skipped: the path it should exclude would
//!   silently go through resolution
//! - `ExclusionRules` compiles once at startup and is read-only afterwards

use thiserror::Error;

use crate::routing::matcher::{AnyMatcher, PathMatcher, PatternMatcher};

/// Errors raised by exclusion rules.
#[derive(Debug, Error)]
pub enum ExclusionError {
    /// A rule is not a valid regular expression.
    #[error("invalid exclusion pattern #{index} `{pattern}`: {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

fn compile(index: usize, pattern: &str) -> Result<PatternMatcher, ExclusionError> {
    PatternMatcher::new(pattern).map_err(|source| ExclusionError::InvalidPattern {
        index,
        pattern: pattern.to_string(),
        source,
    })
}

/// Returns true if any rule matches somewhere in `path`.
///
/// Rules are compiled on every call; use [`ExclusionRules`] on hot paths.
pub fn is_excluded<S: AsRef<str>>(rules: &[S], path: &str) -> Result<bool, ExclusionError> {
    if rules.is_empty() {
        return Ok(false);
    }

    for (index, rule) in rules.iter().enumerate() {
        if compile(index, rule.as_ref())?.matches(path) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Precompiled, immutable exclusion rule set.
#[derive(Debug, Default)]
pub struct ExclusionRules {
    matcher: AnyMatcher,
}

impl ExclusionRules {
    /// Compile every rule, failing on the first malformed one.
    pub fn new<S: AsRef<str>>(rules: &[S]) -> Result<Self, ExclusionError> {
        let matchers = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                compile(index, rule.as_ref()).map(|m| Box::new(m) as Box<dyn PathMatcher>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            matcher: AnyMatcher::new(matchers),
        })
    }

    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    /// Returns true if the path bypasses culture resolution.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}
