//! Suspicious keyword rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::{contains, Rule};
use std::collections::BTreeSet;

/// Words that phishing pages like to put in their host or path
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "signin", "secure", "account", "update", "verify", "bank", "confirm", "password",
    "webscr", "admin", "paypal", "ebay", "meta", "wallet", "claim",
];

/// Flags URLs whose host, path or query mention a suspicious keyword.
///
/// The reason lists every matched keyword once, sorted, so the output
/// does not depend on where in the URL each keyword appeared.
pub struct SuspiciousKeywordsRule;

impl Rule for SuspiciousKeywordsRule {
    fn id(&self) -> &'static str {
        "suspicious-keywords"
    }

    fn description(&self) -> &'static str {
        "Host, path or query contains a suspicious keyword"
    }

    fn weight(&self) -> u32 {
        2
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        let text = url.full_text();
        let hits: BTreeSet<&str> = SUSPICIOUS_KEYWORDS
            .iter()
            .copied()
            .filter(|kw| contains(&text, kw))
            .collect();

        if hits.is_empty() {
            return None;
        }
        let listed: Vec<&str> = hits.into_iter().collect();
        Some(format!("Suspicious keywords: {}", listed.join(", ")))
    }
}
