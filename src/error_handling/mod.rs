//! Error handling.
//!
//! Every failure in a scan is fatal: a network or protocol error stops the run
//! before extraction, and a write error stops it before anything is printed.
//! Extraction itself has no failure mode.

mod categorization;
mod types;

pub use categorization::categorize_error;
pub use types::{InitializationError, ReconError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_http_status_message() {
        let err = ReconError::HttpStatus {
            status: 404,
            url: "https://example.com/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status code 404 for https://example.com/"
        );
        assert_eq!(err.category(), "protocol");
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error;

        let err = ReconError::Write {
            path: PathBuf::from("/nope/out.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir"),
        };
        assert!(err.to_string().contains("/nope/out.txt"));
        assert!(err.source().is_some());
        assert_eq!(err.category(), "write");
    }

    #[test]
    fn test_categorize_error_walks_context() {
        use anyhow::Context;

        let result: Result<(), ReconError> = Err(ReconError::HttpStatus {
            status: 500,
            url: "https://example.com/".to_string(),
        });
        let err = result.context("Failed to fetch https://example.com/").unwrap_err();
        assert_eq!(categorize_error(&err), "protocol");

        let err = anyhow::anyhow!("unrelated");
        assert_eq!(categorize_error(&err), "other");
    }

    #[test]
    fn test_parse_error_category() {
        let err = ReconError::Parse("bad selector".to_string());
        assert_eq!(err.category(), "parse");
        assert!(err.to_string().contains("bad selector"));
    }
}
