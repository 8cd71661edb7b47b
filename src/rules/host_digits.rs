//! Digits-in-host rule

use crate::normalizer::NormalizedUrl;
use crate::rules::base::Rule;
use regex::Regex;
use std::sync::OnceLock;

/// Hosts with more digits than this are flagged
pub const MAX_HOST_DIGITS: usize = 4;

static DIGIT: OnceLock<Regex> = OnceLock::new();

/// Any Unicode decimal digit (`\d`) plus the superscript, subscript,
/// circled and parenthesized digit forms
fn digit() -> &'static Regex {
    DIGIT.get_or_init(|| {
        Regex::new(concat!(
            r"[\d",
            r"\x{B2}-\x{B3}\x{B9}\x{1369}-\x{1371}\x{19DA}\x{2070}\x{2074}-\x{2079}",
            r"\x{2080}-\x{2089}\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}",
            r"\x{24EA}\x{24F5}-\x{24FD}\x{24FF}\x{2776}-\x{277E}\x{2780}-\x{2788}",
            r"\x{278A}-\x{2792}\x{10A40}-\x{10A43}\x{10E60}-\x{10E68}\x{11052}-\x{1105A}",
            r"\x{1F100}-\x{1F10A}]",
        ))
        .expect("valid regex")
    })
}

/// Flags hosts carrying many digits, typical of generated domains.
pub struct HostDigitsRule;

impl Rule for HostDigitsRule {
    fn id(&self) -> &'static str {
        "host-digits"
    }

    fn description(&self) -> &'static str {
        "Host contains more than 4 digits"
    }

    fn weight(&self) -> u32 {
        1
    }

    fn evaluate(&self, url: &NormalizedUrl) -> Option<String> {
        let digits = digit().find_iter(&url.host).count();
        (digits > MAX_HOST_DIGITS).then(|| format!("{digits} digits in domain"))
    }
}
