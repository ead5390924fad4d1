//! Raw JSON-over-HTTP helper for the external auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `ApiError::Unavailable`, since these requests
//! are only ever issued from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Only transport and encoding failures are errors. Non-2xx responses come
//! back as a `RawResponse` like any other; callers decide what the body means.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::error::ApiError;

/// Maximum number of body characters echoed into log messages.
const MAX_LOGGED_BODY_CHARS: usize = 200;

/// Undecoded HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Joins a base URL and a path with exactly one `/` between them.
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Trims and truncates a response body for log output.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "<empty body>".to_owned()
    } else {
        trimmed.chars().take(MAX_LOGGED_BODY_CHARS).collect()
    }
}

/// POST `body` as JSON to `url` and return the status and body text.
///
/// # Errors
///
/// Returns `ApiError::Serialization` if the body cannot be encoded,
/// `ApiError::Network` if the request or body read fails, and
/// `ApiError::Unavailable` outside the browser.
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<RawResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(ApiError::Unavailable)
    }
}
