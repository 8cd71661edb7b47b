//! URL normalization
//!
//! Turns a raw, possibly schemeless string into a [`NormalizedUrl`]:
//! the scheme is defaulted to `http`, then the string is split into
//! network location, path and query following the generic
//! `scheme://netloc/path;params?query#fragment` grammar.
//!
//! Purely syntactic. No DNS, no network, no percent-decoding.

use crate::checker::CheckError;
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

/// Scheme used when the input has none
pub const DEFAULT_SCHEME: &str = "http";

/// Schemes whose last path segment may carry `;params`
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

static SCHEME_PREFIX: OnceLock<Regex> = OnceLock::new();

fn scheme_prefix() -> &'static Regex {
    SCHEME_PREFIX.get_or_init(|| Regex::new(r"^[a-zA-Z]+://").expect("valid regex"))
}

static IPV_FUTURE: OnceLock<Regex> = OnceLock::new();

fn ipv_future() -> &'static Regex {
    IPV_FUTURE.get_or_init(|| Regex::new(r"^v[a-fA-F0-9]+\..+$").expect("valid regex"))
}

/// Whitespace stripped from both ends of the input, including the
/// ASCII information separators `\x1c`..=`\x1f`
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Decomposed, lowercased view of a URL used by the rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Trimmed input with the default scheme prepended if it had none
    pub input: String,
    pub scheme: String,
    /// Lowercased network location (may include userinfo and port)
    pub host: String,
    pub path: String,
    pub query: String,
}

impl NormalizedUrl {
    /// Normalize a raw URL string.
    ///
    /// Fails with [`CheckError::InvalidInput`] for blank input and with
    /// [`CheckError::MalformedUrl`] when the network location has an
    /// unbalanced bracket or a bracketed host that is not an IPv6 or
    /// IPvFuture literal.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let trimmed = raw.trim_matches(is_trimmable);
        if trimmed.is_empty() {
            return Err(CheckError::InvalidInput);
        }

        let input = if scheme_prefix().is_match(trimmed) {
            trimmed.to_string()
        } else {
            format!("{DEFAULT_SCHEME}://{trimmed}")
        };

        // Embedded tabs and line breaks are dropped before splitting
        let cleaned: String = input
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();

        let (scheme, rest) = cleaned
            .split_once("://")
            .ok_or_else(|| CheckError::Internal(format!("no scheme separator in '{cleaned}'")))?;
        let scheme = scheme.to_ascii_lowercase();

        let netloc_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let (netloc, remainder) = rest.split_at(netloc_end);
        check_bracketed_host(netloc)?;

        let remainder = match remainder.find('#') {
            Some(i) => &remainder[..i],
            None => remainder,
        };
        let (path, query) = remainder.split_once('?').unwrap_or((remainder, ""));
        let path = if PARAM_SCHEMES.contains(&scheme.as_str()) {
            strip_params(path)
        } else {
            path
        };

        Ok(Self {
            input,
            scheme,
            host: netloc.to_lowercase(),
            path: path.to_lowercase(),
            query: query.to_lowercase(),
        })
    }

    /// Host, path and query (`?`-prefixed when present) for keyword matching
    pub fn full_text(&self) -> String {
        let mut text = String::with_capacity(self.host.len() + self.path.len() + self.query.len() + 1);
        text.push_str(&self.host);
        text.push_str(&self.path);
        if !self.query.is_empty() {
            text.push('?');
            text.push_str(&self.query);
        }
        text
    }
}

/// Reject network locations whose `[...]` host is not a valid literal
fn check_bracketed_host(netloc: &str) -> Result<(), CheckError> {
    let bracketed = netloc.contains('[');
    if bracketed != netloc.contains(']') {
        return Err(malformed("Invalid IPv6 URL"));
    }
    if !bracketed {
        return Ok(());
    }

    let host = netloc
        .split_once('[')
        .map(|(_, rest)| rest.split_once(']').map_or(rest, |(host, _)| host))
        .unwrap_or_default();

    if host.starts_with('v') {
        return if ipv_future().is_match(host) {
            Ok(())
        } else {
            Err(malformed("IPvFuture address is invalid"))
        };
    }
    if host.parse::<Ipv4Addr>().is_ok() {
        return Err(malformed("An IPv4 address cannot be in brackets"));
    }

    // Optional zone id: `fe80::1%eth0`
    let (address, zone_ok) = match host.split_once('%') {
        Some((address, zone)) => (address, !zone.is_empty() && !zone.contains('%')),
        None => (host, true),
    };
    if zone_ok && address.parse::<Ipv6Addr>().is_ok() {
        Ok(())
    } else {
        Err(malformed(format!(
            "'{host}' does not appear to be an IPv4 or IPv6 address"
        )))
    }
}

fn malformed(message: impl Into<String>) -> CheckError {
    CheckError::MalformedUrl(message.into())
}

/// Drop `;params` from the last path segment
fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(i) => &path[..last_segment + i],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_default_scheme() {
        let url = NormalizedUrl::parse("example.com/a").unwrap();
        assert_eq!(url.input, "http://example.com/a");
        assert_eq!(url.scheme, "http");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path, "/a");
    }

    #[test]
    fn test_keeps_existing_scheme() {
        let url = NormalizedUrl::parse("  FTP://Files.Example.com/Pub  ").unwrap();
        assert_eq!(url.input, "FTP://Files.Example.com/Pub");
        assert_eq!(url.scheme, "ftp");
        assert_eq!(url.host, "files.example.com");
        assert_eq!(url.path, "/pub");
    }

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(NormalizedUrl::parse(""), Err(CheckError::InvalidInput)));
        assert!(matches!(NormalizedUrl::parse(" \t\n "), Err(CheckError::InvalidInput)));
    }

    #[test]
    fn test_query_and_fragment() {
        let url = NormalizedUrl::parse("https://Shop.com/Cart?Item=1#Top").unwrap();
        assert_eq!(url.host, "shop.com");
        assert_eq!(url.path, "/cart");
        assert_eq!(url.query, "item=1");
        assert_eq!(url.full_text(), "shop.com/cart?item=1");
    }

    #[test]
    fn test_empty_query_not_in_full_text() {
        let url = NormalizedUrl::parse("http://a.com/x?").unwrap();
        assert_eq!(url.query, "");
        assert_eq!(url.full_text(), "a.com/x");
    }

    #[test]
    fn test_netloc_keeps_userinfo_and_port() {
        let url = NormalizedUrl::parse("http://User@Host.com:8080/p").unwrap();
        assert_eq!(url.host, "user@host.com:8080");
    }

    #[test]
    fn test_query_without_path() {
        let url = NormalizedUrl::parse("host.com?next=login").unwrap();
        assert_eq!(url.host, "host.com");
        assert_eq!(url.path, "");
        assert_eq!(url.full_text(), "host.com?next=login");
    }

    #[test]
    fn test_path_params_dropped() {
        let url = NormalizedUrl::parse("http://a.com/dir;keep/file;jsessionid=1?q=2").unwrap();
        assert_eq!(url.path, "/dir;keep/file");
        assert_eq!(url.query, "q=2");
    }

    #[test]
    fn test_unbalanced_ipv6_bracket() {
        let err = NormalizedUrl::parse("http://[::1/x").unwrap_err();
        assert!(matches!(err, CheckError::MalformedUrl(_)));
        assert!(NormalizedUrl::parse("http://[::1]:80/x").is_ok());
    }

    #[test]
    fn test_bracketed_host_literals() {
        assert!(NormalizedUrl::parse("http://[fe80::1%25en0]/").is_ok());
        assert!(NormalizedUrl::parse("http://u@[::1%eth0]:80/").is_ok());
        assert!(NormalizedUrl::parse("http://[v1.x]/").is_ok());

        let message = |raw: &str| match NormalizedUrl::parse(raw) {
            Err(CheckError::MalformedUrl(m)) => m,
            other => panic!("expected MalformedUrl for {raw:?}, got {other:?}"),
        };
        assert_eq!(
            message("http://[zz]/a"),
            "'zz' does not appear to be an IPv4 or IPv6 address"
        );
        assert_eq!(
            message("http://[1.2.3.4]/a"),
            "An IPv4 address cannot be in brackets"
        );
        assert_eq!(message("http://[vz]/"), "IPvFuture address is invalid");
        assert_eq!(
            message("http://[::1%]/"),
            "'::1%' does not appear to be an IPv4 or IPv6 address"
        );
    }

    #[test]
    fn test_information_separators_trimmed() {
        assert!(matches!(
            NormalizedUrl::parse("\x1c\x1f"),
            Err(CheckError::InvalidInput)
        ));
        let url = NormalizedUrl::parse("\x1eexample.com\x1d").unwrap();
        assert_eq!(url.input, "http://example.com");
    }

    #[test]
    fn test_rtsps_params_dropped() {
        let url = NormalizedUrl::parse("rtsps://cam.example.com/live;track=1").unwrap();
        assert_eq!(url.path, "/live");
    }

    #[test]
    fn test_tabs_removed_before_split() {
        let url = NormalizedUrl::parse("http://exa\tmple.com/lo\ngin").unwrap();
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path, "/login");
        assert!(url.input.contains('\t'));
    }
}
