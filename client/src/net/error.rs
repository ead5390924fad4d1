//! Error type for auth API calls.

use thiserror::Error;

/// Failure modes of an auth API call. HTTP status codes are not an error:
/// any response with a body is handed back to the caller as-is.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request error: {0}")]
    Serialization(String),
    #[error("Response error: {0}")]
    Parse(String),
    #[error("not available on server")]
    Unavailable,
}
