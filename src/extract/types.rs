//! Extraction data types.

use std::fmt;

use crate::patterns::DetectorKind;

/// Text content of one `<script>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock {
    text: String,
}

impl ScriptBlock {
    /// Wraps script text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The script text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One labeled sensitive-data match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Finding {
    /// Detector that produced the match
    pub kind: DetectorKind,
    /// Trimmed matched text
    pub value: String,
}

impl Finding {
    pub fn new(kind: DetectorKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.value)
    }
}

/// Output of scanning a single script block.
///
/// Each extraction task owns one of these; it is only merged into the shared
/// `ResultSet` after every task has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptExtraction {
    /// Links in order of appearance
    pub links: Vec<String>,
    /// Findings grouped by detector, each group in order of appearance
    pub findings: Vec<Finding>,
}

/// All links and findings from every script block on the page.
///
/// Not deduplicated; the projector handles that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub links: Vec<String>,
    pub findings: Vec<Finding>,
}

impl ResultSet {
    /// Appends one block's output, preserving its internal order.
    pub fn merge(&mut self, extraction: ScriptExtraction) {
        self.links.extend(extraction.links);
        self.findings.extend(extraction.findings);
    }
}
