//! Path matching logic.
//!
//! # Responsibilities
//! - Match a request path against a regular expression (unanchored search)
//! - Combine matchers with OR semantics, first match wins
//!
//! # Design Decisions
//! - Patterns are anchored only if the pattern itself uses `^` / `$`
//! - Path matching is case-sensitive
//! - Empty matcher set never matches

use regex::Regex;

/// Trait for matching request paths against conditions.
pub trait PathMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path containing a match of a regular expression.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Regex,
}

impl PatternMatcher {
    /// Compile a new pattern matcher.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl PathMatcher for PatternMatcher {
    fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug, Default)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn PathMatcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn PathMatcher>>) -> Self {
        Self { matchers }
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl PathMatcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        // Any matcher may pass (OR), evaluated in order
        self.matchers.iter().any(|m| m.matches(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_matcher_is_unanchored() {
        let matcher = PatternMatcher::new("api").unwrap();
        assert!(matcher.matches("/api/v1"));
        assert!(matcher.matches("/v1/rapid"));
        assert!(!matcher.matches("/API"));
    }

    #[test]
    fn test_pattern_matcher_respects_anchors() {
        let matcher = PatternMatcher::new("^/static/").unwrap();
        assert!(matcher.matches("/static/app.css"));
        assert!(!matcher.matches("/en/static/app.css"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(PatternMatcher::new("(unclosed").is_err());
    }

    #[test]
    fn test_any_matcher() {
        let matcher = AnyMatcher::new(vec![
            Box::new(PatternMatcher::new(r"\.css$").unwrap()),
            Box::new(PatternMatcher::new("^/health$").unwrap()),
        ]);
        assert_eq!(matcher.len(), 2);
        assert!(matcher.matches("/health"));
        assert!(matcher.matches("/assets/site.css"));
        assert!(!matcher.matches("/healthz"));

        let empty = AnyMatcher::default();
        assert!(empty.is_empty());
        assert!(!empty.matches("/"));
        assert!(!empty.matches(""));
    }
}
