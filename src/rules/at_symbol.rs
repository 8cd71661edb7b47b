//! '@' symbol rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;

/// Flags any `@` in the input. Browsers treat everything before an `@`
/// in the authority as userinfo, which hides the real host.
pub struct AtSymbolRule;

impl Rule for AtSymbolRule {
    fn id(&self) -> &'static str {
        "at-symbol"
    }

    fn description(&self) -> &'static str {
        "Contains an '@' symbol"
    }

    fn weight(&self) -> u32 {
        3
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        url.input
            .contains('@')
            .then(|| "'@' symbol in URL".to_string())
    }
}
