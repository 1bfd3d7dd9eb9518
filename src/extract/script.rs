//! Per-block extraction.

use crate::patterns::{sensitive_detectors, DetectorKind};

use super::types::{Finding, ScriptExtraction};

/// Scans one script's text for links and sensitive findings.
///
/// A link is kept when `keyword` is `None`/empty or the link contains it as a
/// plain, case-sensitive substring. Every sensitive detector runs over the
/// whole text, so one substring can produce several findings.
pub fn extract_script(text: &str, keyword: Option<&str>) -> ScriptExtraction {
    ScriptExtraction {
        links: find_links(text, keyword),
        findings: find_sensitive(text),
    }
}

/// Links matching the URL pattern, filtered by `keyword`.
pub fn find_links(text: &str, keyword: Option<&str>) -> Vec<String> {
    let keyword = keyword.filter(|k| !k.is_empty());
    DetectorKind::Url
        .regex()
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|link| keyword.map_or(true, |k| link.contains(k)))
        .map(|link| crate::patterns::trim_match(link).to_string())
        .collect()
}

/// Findings from every sensitive detector.
pub fn find_sensitive(text: &str) -> Vec<Finding> {
    sensitive_detectors()
        .flat_map(|kind| kind.find_all(text).map(move |value| Finding::new(kind, value)))
        .collect()
}
