//! Hyphenated host rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;

/// Flags hosts containing a hyphen, common in look-alike domains.
pub struct HyphenHostRule;

impl Rule for HyphenHostRule {
    fn id(&self) -> &'static str {
        "hyphen-host"
    }

    fn description(&self) -> &'static str {
        "Host contains a hyphen"
    }

    fn weight(&self) -> u32 {
        1
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        url.host
            .contains('-')
            .then(|| "Hyphen in domain".to_string())
    }
}
