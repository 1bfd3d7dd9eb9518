//! Output projection.
//!
//! Two independent rules shape what gets printed or saved:
//! - sensitive-only: findings are emitted first, and links containing `@` are
//!   dropped from the link list
//! - domain-only: each link is reduced to its host
//!
//! Both outputs are deduplicated with first-seen order preserved. The print
//! path and the save path each call `project` on the same `ResultSet`.

use std::collections::HashSet;

use crate::extract::{Finding, ResultSet};

/// Read-only settings derived from the invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Collapse links to their host
    pub domain_only: bool,
    /// Emit findings and suppress email-shaped links
    pub sensitive_only: bool,
    /// Link keyword filter (applied during extraction)
    pub keyword: Option<String>,
    /// Raw `Cookie` header for the page request
    pub cookie: Option<String>,
}

/// Deduplicated, ordered output for one sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// `"{label}: {value}"` lines; empty unless sensitive-only is set
    pub findings: Vec<String>,
    /// Links or hosts
    pub links: Vec<String>,
}

impl Projection {
    /// Findings first, then links.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .chain(self.links.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.findings.len() + self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the host portion of a link: the text after the first `//` up to
/// the next `/`.
///
/// Returns `None` when the link has no `//`. Port and userinfo are kept as-is.
pub fn extract_domain(link: &str) -> Option<&str> {
    let (_, rest) = link.split_once("//")?;
    rest.split('/').next()
}

/// Applies the projection rules to a merged result set.
pub fn project(results: &ResultSet, config: &ProjectionConfig) -> Projection {
    let findings = if config.sensitive_only {
        dedup_findings(&results.findings)
    } else {
        Vec::new()
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut links = Vec::new();
    for link in &results.links {
        if config.sensitive_only && link.contains('@') {
            continue;
        }
        let entry = if config.domain_only {
            match extract_domain(link) {
                Some(domain) => domain,
                None => continue,
            }
        } else {
            link.as_str()
        };
        if seen.insert(entry) {
            links.push(entry.to_string());
        }
    }

    Projection { findings, links }
}

fn dedup_findings(findings: &[Finding]) -> Vec<String> {
    let mut seen: HashSet<&Finding> = HashSet::new();
    findings
        .iter()
        .filter(|finding| seen.insert(*finding))
        .map(Finding::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::DetectorKind;

    fn results(links: &[&str], findings: &[(DetectorKind, &str)]) -> ResultSet {
        ResultSet {
            links: links.iter().map(|l| l.to_string()).collect(),
            findings: findings
                .iter()
                .map(|(kind, value)| Finding::new(*kind, *value))
                .collect(),
        }
    }

    fn config(domain_only: bool, sensitive_only: bool) -> ProjectionConfig {
        ProjectionConfig {
            domain_only,
            sensitive_only,
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(extract_domain("https://example.com/a/b"), Some("example.com"));
        assert_eq!(extract_domain("https://example.com"), Some("example.com"));
        assert_eq!(
            extract_domain("http://host:8080/x?y=1"),
            Some("host:8080")
        );
        assert_eq!(extract_domain("https://example.com//double"), Some("example.com"));
        assert_eq!(extract_domain("example.com/a"), None);
    }

    #[test]
    fn test_full_links_dedup_first_seen() {
        let rs = results(
            &["https://b.example.com/", "https://a.example.com/", "https://b.example.com/"],
            &[],
        );
        let projection = project(&rs, &config(false, false));
        assert_eq!(
            projection.links,
            vec!["https://b.example.com/", "https://a.example.com/"]
        );
        assert!(projection.findings.is_empty());
    }

    #[test]
    fn test_domain_only_dedup() {
        let rs = results(
            &[
                "https://api.example.com/v1/users",
                "https://api.example.com/v2",
                "https://cdn.example.com/x.js",
            ],
            &[],
        );
        let projection = project(&rs, &config(true, false));
        assert_eq!(projection.links, vec!["api.example.com", "cdn.example.com"]);
    }

    #[test]
    fn test_domain_only_drops_links_without_scheme_separator() {
        let rs = results(&["not-a-url/path", "https://ok.example.com/"], &[]);
        let projection = project(&rs, &config(true, false));
        assert_eq!(projection.links, vec!["ok.example.com"]);
    }

    #[test]
    fn test_findings_hidden_without_sensitive_mode() {
        let rs = results(&[], &[(DetectorKind::Credential, "token")]);
        assert!(project(&rs, &config(false, false)).is_empty());
    }

    #[test]
    fn test_sensitive_mode_suppresses_at_links_but_keeps_email_finding() {
        let rs = results(
            &["https://user@host.example.com/x", "https://plain.example.com/"],
            &[(DetectorKind::EmailAddress, "user@host.example.com")],
        );
        let projection = project(&rs, &config(false, true));
        assert_eq!(projection.links, vec!["https://plain.example.com/"]);
        assert_eq!(
            projection.findings,
            vec!["Email Address: user@host.example.com"]
        );

        // Without sensitive mode the `@` link is kept
        let projection = project(&rs, &config(false, false));
        assert_eq!(projection.links.len(), 2);
    }

    #[test]
    fn test_findings_dedup_by_kind_and_value() {
        let rs = results(
            &[],
            &[
                (DetectorKind::Credential, "token"),
                (DetectorKind::Credential, "Token"),
                (DetectorKind::Credential, "token"),
                (DetectorKind::IpAddress, "10.0.0.1"),
            ],
        );
        let projection = project(&rs, &config(false, true));
        assert_eq!(
            projection.findings,
            vec!["Credential: token", "Credential: Token", "IP Address: 10.0.0.1"]
        );
    }

    #[test]
    fn test_entries_findings_first() {
        let rs = results(
            &["https://x.example.com/"],
            &[(DetectorKind::Credential, "secret")],
        );
        let projection = project(&rs, &config(true, true));
        let entries: Vec<_> = projection.entries().collect();
        assert_eq!(entries, vec!["Credential: secret", "x.example.com"]);
        assert_eq!(projection.len(), 2);
    }
}
