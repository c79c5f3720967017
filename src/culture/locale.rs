//! Culture identifiers and their comparable forms.
//!
//! # Responsibilities
//! - Shape check for `xx` / `xx-YY` identifiers
//! - Derive the two-letter and three-letter language codes of a culture
//! - Match a culture against raw candidate codes
//!
//! # Design Decisions
//! - Cultures are immutable once built
//! - Three-letter codes are ISO 639-2/T; unknown languages simply have none

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Shape of a culture code embedded in a request path.
///
/// The region group is `*`, so `en-US-GB` is accepted too.
static PATH_CULTURE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})*$").expect("valid regex literal"));

/// Shape of a configured culture (`xx` or `xx-YY`).
static CULTURE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("valid regex literal"));

/// ISO 639-1 → ISO 639-2/T.
const THREE_LETTER_CODES: &[(&str, &str)] = &[
    ("af", "afr"),
    ("ar", "ara"),
    ("be", "bel"),
    ("bg", "bul"),
    ("bn", "ben"),
    ("ca", "cat"),
    ("cs", "ces"),
    ("cy", "cym"),
    ("da", "dan"),
    ("de", "deu"),
    ("el", "ell"),
    ("en", "eng"),
    ("es", "spa"),
    ("et", "est"),
    ("eu", "eus"),
    ("fa", "fas"),
    ("fi", "fin"),
    ("fr", "fra"),
    ("ga", "gle"),
    ("gl", "glg"),
    ("he", "heb"),
    ("hi", "hin"),
    ("hr", "hrv"),
    ("hu", "hun"),
    ("hy", "hye"),
    ("id", "ind"),
    ("is", "isl"),
    ("it", "ita"),
    ("ja", "jpn"),
    ("ka", "kat"),
    ("kk", "kaz"),
    ("ko", "kor"),
    ("lt", "lit"),
    ("lv", "lav"),
    ("mk", "mkd"),
    ("ms", "msa"),
    ("mt", "mlt"),
    ("nb", "nob"),
    ("nl", "nld"),
    ("nn", "nno"),
    ("pl", "pol"),
    ("pt", "por"),
    ("ro", "ron"),
    ("ru", "rus"),
    ("sk", "slk"),
    ("sl", "slv"),
    ("sq", "sqi"),
    ("sr", "srp"),
    ("sv", "swe"),
    ("sw", "swa"),
    ("ta", "tam"),
    ("th", "tha"),
    ("tr", "tur"),
    ("uk", "ukr"),
    ("ur", "urd"),
    ("vi", "vie"),
    ("zh", "zho"),
];

/// Returns true if `segment` looks like a culture code in a request path.
pub fn is_path_culture(segment: &str) -> bool {
    PATH_CULTURE_SHAPE.is_match(segment)
}

/// Returns true if `name` is a well-shaped culture identifier for configuration.
pub fn is_culture_name(name: &str) -> bool {
    CULTURE_SHAPE.is_match(name)
}

/// Look up the ISO 639-2/T code for a two-letter language code.
pub fn three_letter_code(two_letter: &str) -> Option<&'static str> {
    THREE_LETTER_CODES
        .iter()
        .find(|(two, _)| *two == two_letter)
        .map(|(_, three)| *three)
}

/// A supported culture with its three comparable forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: String,
    two_letter: String,
    three_letter: Option<&'static str>,
}

impl Culture {
    /// Build a culture from its full name (e.g. `en-US`).
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let two_letter = name.split('-').next().unwrap_or_default().to_string();
        let three_letter = three_letter_code(&two_letter);
        Self {
            name,
            two_letter,
            three_letter,
        }
    }

    /// Full culture name, e.g. `en-US`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two-letter language code, e.g. `en`.
    pub fn two_letter(&self) -> &str {
        &self.two_letter
    }

    /// Three-letter language code, e.g. `eng`.
    pub fn three_letter(&self) -> Option<&str> {
        self.three_letter
    }

    /// Returns true if any form of this culture equals `candidate` exactly.
    pub fn is_named_by(&self, candidate: &str) -> bool {
        self.name == candidate
            || self.two_letter == candidate
            || self.three_letter == Some(candidate)
    }

    /// First culture in `cultures` named by any of `candidates`.
    pub fn first_match<'a, S: AsRef<str>>(
        cultures: &'a [Culture],
        candidates: &[S],
    ) -> Option<&'a Culture> {
        cultures
            .iter()
            .find(|culture| candidates.iter().any(|c| culture.is_named_by(c.as_ref())))
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_culture_forms() {
        let culture = Culture::new("en-US");
        assert_eq!(culture.name(), "en-US");
        assert_eq!(culture.two_letter(), "en");
        assert_eq!(culture.three_letter(), Some("eng"));

        let neutral = Culture::new("de");
        assert_eq!(neutral.two_letter(), "de");
        assert_eq!(neutral.three_letter(), Some("deu"));
    }

    #[test]
    fn test_unknown_language_has_no_three_letter_form() {
        let culture = Culture::new("xx-YY");
        assert_eq!(culture.two_letter(), "xx");
        assert_eq!(culture.three_letter(), None);
        assert!(culture.is_named_by("xx"));
        assert!(!culture.is_named_by(""));
    }

    #[test]
    fn test_is_named_by_any_form() {
        let culture = Culture::new("fr-FR");
        assert!(culture.is_named_by("fr-FR"));
        assert!(culture.is_named_by("fr"));
        assert!(culture.is_named_by("fra"));
        assert!(!culture.is_named_by("fr-fr"));
        assert!(!culture.is_named_by(" fr"));
    }

    #[test]
    fn test_first_match_uses_configured_order() {
        let cultures = vec![Culture::new("en-GB"), Culture::new("en-US")];
        let found = Culture::first_match(&cultures, &["en"]).unwrap();
        assert_eq!(found.name(), "en-GB");

        let found = Culture::first_match(&cultures, &["de", "en-US"]).unwrap();
        assert_eq!(found.name(), "en-US");

        assert!(Culture::first_match::<&str>(&cultures, &[]).is_none());
    }

    #[test]
    fn test_path_culture_shape() {
        assert!(is_path_culture("en"));
        assert!(is_path_culture("en-US"));
        assert!(is_path_culture("en-US-GB"));
        assert!(!is_path_culture("EN"));
        assert!(!is_path_culture("en-us"));
        assert!(!is_path_culture("eng"));
        assert!(!is_path_culture("123"));
        assert!(!is_path_culture(""));
    }

    #[test]
    fn test_culture_name_shape() {
        assert!(is_culture_name("en"));
        assert!(is_culture_name("pt-BR"));
        assert!(!is_culture_name("en-US-GB"));
        assert!(!is_culture_name("english"));
    }
}
