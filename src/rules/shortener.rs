//! URL shortener rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;
use regex::Regex;
use std::sync::OnceLock;

/// Domain fragments of well-known URL shortening services
pub const SHORTENER_FRAGMENTS: &[&str] = &[
    "bit.ly", "tinyurl", "goo.gl", "ow.ly", "t.co", "cutt.ly", "is.gd", "tiny.cc", "short.ly",
];

static SHORTENER: OnceLock<Regex> = OnceLock::new();

/// Case-insensitive alternation of [`SHORTENER_FRAGMENTS`].
///
/// `(?i)` folds `ſ` to `s` but not the dotted and dotless capital/small
/// `I` forms, so those are spelled out.
fn shortener() -> &'static Regex {
    SHORTENER.get_or_init(|| {
        let alternatives: Vec<String> = SHORTENER_FRAGMENTS
            .iter()
            .map(|fragment| regex::escape(fragment).replace('i', "[iİı]"))
            .collect();
        Regex::new(&format!("(?i){}", alternatives.join("|"))).expect("valid regex")
    })
}

/// Flags URLs that mention a shortening service anywhere in the input.
///
/// Plain fragment search, so `microsoft.com` also hits `t.co`. That
/// over-matching is part of the rule's established behaviour.
pub struct ShortenerRule;

impl Rule for ShortenerRule {
    fn id(&self) -> &'static str {
        "shortener"
    }

    fn description(&self) -> &'static str {
        "Mentions a known URL shortening service"
    }

    fn weight(&self) -> u32 {
        3
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        shortener()
            .is_match(&url.input)
            .then(|| "Shortening service".to_string())
    }
}
