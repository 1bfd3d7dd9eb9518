//! HTTP request building.

/// Browser-like request headers for the page fetch.
///
/// Pages that sniff for bots sometimes serve a stripped document without the
/// application scripts; a realistic header set keeps the response close to
/// what a browser would see. `Accept-Encoding` is left to reqwest so the body
/// is always decodable.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers, plus the optional cookie, to a
    /// `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        cookie: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let builder = builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1");

        match cookie {
            Some(cookie) if !cookie.is_empty() => builder.header(reqwest::header::COOKIE, cookie),
            _ => builder,
        }
    }
}
