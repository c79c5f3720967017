//! Culture cookie value codec.
//!
//! The cookie holds `c=<culture>|uic=<ui culture>`. Either part may be
//! missing, in which case the other one stands in for it.

use axum::http::{header::COOKIE, HeaderMap};

use crate::culture::context::ResolvedCulture;

/// Default cookie name for the culture cookie.
pub const DEFAULT_COOKIE_NAME: &str = ".AspNetCore.Culture";

const CULTURE_KEY: &str = "c";
const UI_CULTURE_KEY: &str = "uic";

/// Candidate locale codes recovered from a culture cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCookieLocales {
    pub culture: String,
    pub ui_culture: String,
}

impl ParsedCookieLocales {
    /// Candidates in the order they are compared.
    pub fn candidates(&self) -> [&str; 2] {
        [&self.culture, &self.ui_culture]
    }
}

/// Decode a raw culture cookie value, percent-encoded or not.
///
/// Returns `None` for blank or malformed values.
pub fn parse_cookie_value(raw: &str) -> Option<ParsedCookieLocales> {
    if raw.trim().is_empty() {
        return None;
    }
    let raw = urlencoding::decode(raw).ok()?;

    let mut culture = None;
    let mut ui_culture = None;

    for part in raw.split('|') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match key {
            CULTURE_KEY => culture = Some(value),
            UI_CULTURE_KEY => ui_culture = Some(value),
            _ => {}
        }
    }

    let (culture, ui_culture) = match (culture, ui_culture) {
        (Some(c), Some(uic)) => (c, uic),
        (Some(c), None) => (c, c),
        (None, Some(uic)) => (uic, uic),
        (None, None) => return None,
    };

    Some(ParsedCookieLocales {
        culture: culture.to_string(),
        ui_culture: ui_culture.to_string(),
    })
}

/// Encode a culture pair as a cookie value.
pub fn make_cookie_value(culture: &ResolvedCulture) -> String {
    format!(
        "{CULTURE_KEY}={}|{UI_CULTURE_KEY}={}",
        culture.culture, culture.ui_culture
    )
}

/// `Set-Cookie` header value persisting `culture` under cookie `name`.
pub fn set_cookie_value(name: &str, culture: &ResolvedCulture) -> String {
    format!(
        "{name}={}; Path=/",
        urlencoding::encode(&make_cookie_value(culture))
    )
}

/// Find the value of cookie `name` in the request's `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_both_parts() {
        let parsed = parse_cookie_value("c=fr-FR|uic=en-US").unwrap();
        assert_eq!(parsed.culture, "fr-FR");
        assert_eq!(parsed.ui_culture, "en-US");
        assert_eq!(parsed.candidates(), ["fr-FR", "en-US"]);
    }

    #[test]
    fn test_parse_single_part_stands_in() {
        let parsed = parse_cookie_value("c=de").unwrap();
        assert_eq!(parsed.candidates(), ["de", "de"]);

        let parsed = parse_cookie_value("uic=it").unwrap();
        assert_eq!(parsed.candidates(), ["it", "it"]);
    }

    #[test]
    fn test_parse_malformed_is_absent() {
        assert_eq!(parse_cookie_value(""), None);
        assert_eq!(parse_cookie_value("   "), None);
        assert_eq!(parse_cookie_value("fr-FR"), None);
        assert_eq!(parse_cookie_value("c=|uic="), None);
        assert_eq!(parse_cookie_value("lang=fr"), None);
        assert_eq!(parse_cookie_value("c=%FF%FE"), None);
    }

    #[test]
    fn test_parse_percent_encoded() {
        let parsed = parse_cookie_value("c%3Dpt-BR%7Cuic%3Dpt-BR").unwrap();
        assert_eq!(parsed.candidates(), ["pt-BR", "pt-BR"]);
    }

    #[test]
    fn test_make_cookie_value() {
        let value = make_cookie_value(&ResolvedCulture::new("fr-FR", "en-US"));
        assert_eq!(value, "c=fr-FR|uic=en-US");
        assert_eq!(
            parse_cookie_value(&value).unwrap().candidates(),
            ["fr-FR", "en-US"]
        );
    }

    #[test]
    fn test_set_cookie_value_is_readable_back() {
        let header = set_cookie_value(DEFAULT_COOKIE_NAME, &ResolvedCulture::new("fr-FR", "en-US"));
        assert_eq!(header, ".AspNetCore.Culture=c%3Dfr-FR%7Cuic%3Den-US; Path=/");

        let (pair, _) = header.split_once(';').unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());
        let raw = cookie_value(&headers, DEFAULT_COOKIE_NAME).unwrap();
        assert_eq!(
            parse_cookie_value(raw).unwrap().candidates(),
            ["fr-FR", "en-US"]
        );
    }

    #[test]
    fn test_cookie_value_from_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("session=abc; theme=dark"));
        headers.append(
            COOKIE,
            HeaderValue::from_static(".AspNetCore.Culture=c=de|uic=de"),
        );

        assert_eq!(cookie_value(&headers, "theme"), Some("dark"));
        assert_eq!(
            cookie_value(&headers, DEFAULT_COOKIE_NAME),
            Some("c=de|uic=de")
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }
}
