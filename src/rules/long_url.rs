//! Long URL rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;

/// Inputs longer than this many characters are flagged
pub const MAX_URL_CHARS: usize = 75;

/// Flags unusually long URLs, measured in characters after the default
/// scheme has been added.
pub struct LongUrlRule;

impl Rule for LongUrlRule {
    fn id(&self) -> &'static str {
        "long-url"
    }

    fn description(&self) -> &'static str {
        "URL is longer than 75 characters"
    }

    fn weight(&self) -> u32 {
        1
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        (url.input.chars().count() > MAX_URL_CHARS).then(|| "Long URL".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_of_len(len: usize) -> NormalizedUrl {
        let prefix = "http://a.com/";
        let raw = format!("{prefix}{}", "x".repeat(len - prefix.len()));
        assert_eq!(raw.chars().count(), len);
        NormalizedUrl::parse(&raw).unwrap()
    }

    #[test]
    fn test_boundary() {
        assert!(LongUrlRule.evaluate(&url_of_len(75)).is_none());
        assert!(LongUrlRule.evaluate(&url_of_len(76)).is_some());
    }

    #[test]
    fn test_default_scheme_counts() {
        // 70 chars raw, 77 once "http://" is prepended
        let raw = format!("a.com/{}", "x".repeat(64));
        let url = NormalizedUrl::parse(&raw).unwrap();
        assert!(LongUrlRule.evaluate(&url).is_some());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let raw = format!("http://a.com/{}", "é".repeat(60));
        let url = NormalizedUrl::parse(&raw).unwrap();
        assert!(raw.len() > MAX_URL_CHARS);
        assert!(LongUrlRule.evaluate(&url).is_none());
    }
}
