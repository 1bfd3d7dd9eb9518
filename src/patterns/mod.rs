//! Pattern registry.
//!
//! The detector set is fixed: one `DetectorKind` variant per pattern, each
//! tied to its label and a regex compiled once per process and shared
//! read-only by every extraction task.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::{
    API_KEY_PATTERN, CREDENTIAL_PATTERN, EMAIL_PATTERN, IP_ADDRESS_PATTERN, TRIM_CHARS,
    URL_PATTERN,
};

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_pattern(URL_PATTERN, "URL"));
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(EMAIL_PATTERN, "Email Address"));
static API_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(API_KEY_PATTERN, "API Key"));
static IP_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(IP_ADDRESS_PATTERN, "IP Address"));
static CREDENTIAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_pattern(CREDENTIAL_PATTERN, "Credential"));

/// Compiles a built-in pattern.
///
/// # Panics
///
/// Panics if the pattern does not compile. The patterns are compile-time
/// constants, so this indicates a programming error.
fn compile_pattern(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile {} pattern '{}': {}. This is a programming error.",
            context, pattern, e
        )
    })
}

/// A named detector in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DetectorKind {
    /// `http://` or `https://` followed by non-whitespace, non-quote characters
    Url,
    /// local-part `@` domain with a 2+ letter top-level label
    EmailAddress,
    /// bare hex run of 32 to 64 characters
    ApiKey,
    /// four dot-separated 1-3 digit groups, no range check
    IpAddress,
    /// the words username, password, token or secret
    Credential,
}

impl DetectorKind {
    /// Label used when printing findings.
    pub fn label(&self) -> &'static str {
        match self {
            DetectorKind::Url => "URL",
            DetectorKind::EmailAddress => "Email Address",
            DetectorKind::ApiKey => "API Key",
            DetectorKind::IpAddress => "IP Address",
            DetectorKind::Credential => "Credential",
        }
    }

    /// The compiled pattern for this detector.
    pub fn regex(&self) -> &'static Regex {
        match self {
            DetectorKind::Url => &*URL_REGEX,
            DetectorKind::EmailAddress => &*EMAIL_REGEX,
            DetectorKind::ApiKey => &*API_KEY_REGEX,
            DetectorKind::IpAddress => &*IP_ADDRESS_REGEX,
            DetectorKind::Credential => &*CREDENTIAL_REGEX,
        }
    }

    /// Whether matches are reported as sensitive findings (everything but URLs).
    pub fn is_sensitive(&self) -> bool {
        !matches!(self, DetectorKind::Url)
    }

    /// All matches in `text`, trimmed, in order of appearance.
    pub fn find_all<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.regex()
            .find_iter(text)
            .map(|m| trim_match(m.as_str()))
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The sensitive-data detectors, in reporting order.
pub fn sensitive_detectors() -> impl Iterator<Item = DetectorKind> {
    DetectorKind::iter().filter(DetectorKind::is_sensitive)
}

/// Strips quote characters and spaces from both ends of a match.
pub fn trim_match(value: &str) -> &str {
    value.trim_matches(TRIM_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(kind: DetectorKind, text: &str) -> Vec<String> {
        kind.find_all(text).map(str::to_string).collect()
    }

    #[test]
    fn test_all_patterns_compile() {
        for kind in DetectorKind::iter() {
            // Forces the LazyLock; panics on a bad pattern
            let _ = kind.regex();
        }
    }

    #[test]
    fn test_sensitive_detectors_exclude_url() {
        let kinds: Vec<_> = sensitive_detectors().collect();
        assert_eq!(
            kinds,
            vec![
                DetectorKind::EmailAddress,
                DetectorKind::ApiKey,
                DetectorKind::IpAddress,
                DetectorKind::Credential,
            ]
        );
    }

    #[test]
    fn test_url_stops_at_quotes_and_whitespace() {
        let text = r#"fetch("https://api.example.com/v1?x=1"); a='http://b.example.org/p' c"#;
        assert_eq!(
            matches(DetectorKind::Url, text),
            vec!["https://api.example.com/v1?x=1", "http://b.example.org/p"]
        );
    }

    #[test]
    fn test_url_requires_scheme() {
        assert!(matches(DetectorKind::Url, "//cdn.example.com/x.js ftp://x").is_empty());
    }

    #[test]
    fn test_url_is_deterministic() {
        let text = "a https://x.example.com b https://y.example.com";
        assert_eq!(
            matches(DetectorKind::Url, text),
            matches(DetectorKind::Url, text)
        );
    }

    #[test]
    fn test_email() {
        assert_eq!(
            matches(DetectorKind::EmailAddress, "contact: jane@example.com."),
            vec!["jane@example.com"]
        );
        assert!(matches(DetectorKind::EmailAddress, "jane@localhost").is_empty());
    }

    #[test]
    fn test_api_key_length_bounds() {
        let key32 = "0123456789abcdef0123456789ABCDEF";
        let key31 = &key32[..31];
        assert_eq!(matches(DetectorKind::ApiKey, key32), vec![key32]);
        assert!(matches(DetectorKind::ApiKey, key31).is_empty());

        let key65 = "a".repeat(65);
        assert!(matches(DetectorKind::ApiKey, &key65).is_empty());
    }

    #[test]
    fn test_ip_address_is_permissive() {
        assert_eq!(
            matches(DetectorKind::IpAddress, "ip=999.999.999.999;"),
            vec!["999.999.999.999"]
        );
        assert_eq!(
            matches(DetectorKind::IpAddress, "host 10.0.0.1 up"),
            vec!["10.0.0.1"]
        );
    }

    #[test]
    fn test_credential_whole_word_case_insensitive() {
        assert_eq!(
            matches(DetectorKind::Credential, "PASSWORD = x; api_token; token=1; tokens"),
            vec!["PASSWORD", "token"]
        );
    }

    #[test]
    fn test_boundaries_are_ascii_only() {
        // Non-ASCII letters are not word characters
        assert_eq!(matches(DetectorKind::Credential, "tokenä"), vec!["token"]);
        assert_eq!(
            matches(DetectorKind::ApiKey, "ñ0123456789abcdef0123456789abcdef"),
            vec!["0123456789abcdef0123456789abcdef"]
        );
        assert_eq!(
            matches(DetectorKind::EmailAddress, "mail:jane@example.comé"),
            vec!["jane@example.com"]
        );
    }

    #[test]
    fn test_url_keeps_non_ascii_whitespace() {
        assert_eq!(
            matches(DetectorKind::Url, "https://a.example.com/x\u{a0}y z"),
            vec!["https://a.example.com/x\u{a0}y"]
        );
        assert_eq!(
            matches(DetectorKind::Url, "https://a.example.com/x\ty"),
            vec!["https://a.example.com/x"]
        );
    }

    #[test]
    fn test_trim_match() {
        assert_eq!(trim_match(r#""value' "#), "value");
        assert_eq!(trim_match("plain"), "plain");
        assert_eq!(trim_match(r#"" '"#), "");
    }

    #[test]
    fn test_labels() {
        assert_eq!(DetectorKind::EmailAddress.to_string(), "Email Address");
        assert_eq!(DetectorKind::ApiKey.label(), "API Key");
        assert_eq!(DetectorKind::IpAddress.label(), "IP Address");
        assert_eq!(DetectorKind::Credential.label(), "Credential");
    }
}
