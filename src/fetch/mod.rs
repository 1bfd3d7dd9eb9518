//! Page fetching.
//!
//! A single GET request per run. There is no retry: any transport failure or
//! non-200 status aborts the scan before extraction.

mod request;

use reqwest::Client;

use crate::config::HTTP_STATUS_OK;
use crate::error_handling::ReconError;

use request::RequestHeaders;

/// Fetches `url` and returns the response body as text.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `url` - Page to fetch
/// * `cookie` - Optional raw `Cookie` header value
///
/// # Errors
///
/// - `ReconError::Request` if the request cannot be built, sent, or its body read
/// - `ReconError::HttpStatus` if the final status is not 200
pub async fn fetch_page(
    client: &Client,
    url: &str,
    cookie: Option<&str>,
) -> Result<String, ReconError> {
    let builder = RequestHeaders::apply_to_request_builder(client.get(url), cookie);
    let request = builder.build()?;

    log::debug!(
        "GET {} (cookie: {})",
        request.url(),
        if cookie.is_some() { "yes" } else { "no" }
    );

    let response = client.execute(request).await?;
    let status = response.status().as_u16();
    log::debug!("{} responded with {}", response.url(), status);

    if status != HTTP_STATUS_OK {
        return Err(ReconError::HttpStatus {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    log::debug!("Read {} bytes of HTML", body.len());
    Ok(body)
}
