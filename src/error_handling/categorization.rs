//! Error categorization.

use super::types::{InitializationError, ReconError};

/// Names the failure category of a run error by walking its cause chain.
///
/// Returns the first `ReconError` category found, `"initialization"` for
/// setup failures, or `"other"`.
pub fn categorize_error(error: &anyhow::Error) -> &'static str {
    for cause in error.chain() {
        if let Some(recon) = cause.downcast_ref::<ReconError>() {
            return recon.category();
        }
        if cause.downcast_ref::<InitializationError>().is_some() {
            return "initialization";
        }
    }
    "other"
}
