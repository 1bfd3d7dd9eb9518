//! HTTP client initialization.

use std::time::Duration;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for the page fetch.
///
/// Creates a `reqwest::Client` configured with the user agent and timeout from
/// the config. Redirects follow reqwest's default policy; the status check is
/// applied to the final response.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails,
/// for example when the user agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
