//! Error type definitions.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Fatal errors raised while scanning a page.
///
/// None of these are retried. Each one aborts the run.
#[derive(Error, Debug)]
pub enum ReconError {
    /// Request construction or transport failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The page answered with something other than 200 OK.
    #[error("Request failed with status code {status} for {url}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// URL that was requested
        url: String,
    },

    /// The page could not be turned into script blocks.
    #[error("HTML parse error: {0}")]
    Parse(String),

    /// The output file could not be created or written.
    #[error("Failed to write output file {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ReconError {
    /// Short category name, logged when a run aborts.
    pub fn category(&self) -> &'static str {
        match self {
            ReconError::Request(_) => "network",
            ReconError::HttpStatus { .. } => "protocol",
            ReconError::Parse(_) => "parse",
            ReconError::Write { .. } => "write",
        }
    }
}
