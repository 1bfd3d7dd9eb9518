//! Configuration constants.
//!
//! Defaults for CLI options and the fixed detector patterns.

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for the page request.
///
/// Mimics a modern Chrome browser on Windows. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// HTTP status required before any extraction happens.
pub const HTTP_STATUS_OK: u16 = 200;

// Detector patterns
//
// These are compiled once (see `crate::patterns`) and shared read-only by all
// extraction tasks. Word boundaries and whitespace are ASCII-only, so a
// keyword or hex run next to a non-ASCII letter still matches and non-ASCII
// spaces stay inside a URL. The IP pattern deliberately accepts out-of-range
// octets such as `999.999.999.999`.
pub const URL_PATTERN: &str = r#"https?://[^\t\n\f\r '"]+"#;
pub const EMAIL_PATTERN: &str =
    r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)";
pub const API_KEY_PATTERN: &str = r"(?i)(?-u:\b)[0-9a-f]{32,64}(?-u:\b)";
pub const IP_ADDRESS_PATTERN: &str = r"([0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})";
pub const CREDENTIAL_PATTERN: &str = r"(?i)(?-u:\b)(?:username|password|token|secret)(?-u:\b)";

/// Characters stripped from both ends of every match.
pub const TRIM_CHARS: &[char] = &['"', '\'', ' '];

/// CSS selector for script elements.
pub const SCRIPT_SELECTOR_STR: &str = "script";
