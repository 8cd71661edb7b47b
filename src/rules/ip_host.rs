//! IP address host rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;
use regex::Regex;
use std::sync::OnceLock;

static DOTTED_QUAD: OnceLock<Regex> = OnceLock::new();

fn dotted_quad() -> &'static Regex {
    DOTTED_QUAD.get_or_init(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("valid regex"))
}

/// Flags hosts that are a bare dotted-quad IPv4 address.
///
/// Only the shape is checked, so `999.1.1.1` counts, and so do groups of
/// non-ASCII decimal digits. A port or userinfo
/// in the network location means it is not a bare address.
pub struct IpHostRule;

impl Rule for IpHostRule {
    fn id(&self) -> &'static str {
        "ip-host"
    }

    fn description(&self) -> &'static str {
        "Host is a literal IPv4 address"
    }

    fn weight(&self) -> u32 {
        4
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        dotted_quad()
            .is_match(&url.host)
            .then(|| "IP address in domain".to_string())
    }
}
