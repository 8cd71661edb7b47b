//! Subdomain depth rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;

/// Flags hosts with more than two dots.
pub struct ManySubdomainsRule;

impl Rule for ManySubdomainsRule {
    fn id(&self) -> &'static str {
        "many-subdomains"
    }

    fn description(&self) -> &'static str {
        "Host has more than two dots"
    }

    fn weight(&self) -> u32 {
        1
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        (url.host.matches('.').count() > 2).then(|| "Many subdomains".to_string())
    }
}
