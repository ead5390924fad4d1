//! Login and signup submission against the external auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth pages call these flows from their submit handlers. The API's
//! response never changes what the UI does beyond the one rule below: it is
//! parsed as JSON and logged.
//!
//! - Login navigates to the dashboard *before* the request runs. The returned
//!   future carries the request; the page spawns it and forgets it.
//! - Signup awaits the request and navigates to login only when the response
//!   body parses as JSON. Transport failures and non-JSON bodies are logged and
//!   leave the user where they are.
//!
//! HTTP status codes are logged but never inspected.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use serde::Serialize;

use super::api::{self, RawResponse, sanitize_body};
use super::config::ApiConfig;
use super::error::ApiError;
use crate::state::credentials::Credentials;
use crate::state::route::{AppRoute, Navigator};

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";

/// Sends a JSON body to an auth endpoint path.
#[allow(async_fn_in_trait)]
pub trait AuthTransport {
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, ApiError>;
}

/// Browser transport posting to the configured API host.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(ApiConfig::load().api_base_url)
    }

    pub fn url_for(&self, path: &str) -> String {
        api::build_url(&self.base_url, path)
    }
}

impl AuthTransport for HttpTransport {
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, ApiError> {
        api::post_json(&self.url_for(path), body).await
    }
}

/// Decode a response body as JSON, whatever its status.
///
/// # Errors
///
/// Returns `ApiError::Parse` when the body is not valid JSON.
pub fn parse_json_body(response: &RawResponse) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Parse(format!("{e} (body: {})", sanitize_body(&response.body))))
}

/// Navigate to the dashboard, then hand back the login request to be spawned.
///
/// Navigation happens synchronously, before the request has started, so the
/// user lands on the dashboard regardless of what the API says.
pub fn submit_login<T>(
    transport: T,
    navigator: &dyn Navigator,
    credentials: &Credentials,
) -> impl Future<Output = ()> + use<T>
where
    T: AuthTransport,
{
    let request = credentials.login_request();
    log::info!("login submitted for {}", request.email);
    navigator.navigate(AppRoute::Dashboard);

    async move {
        match transport.post_json(LOGIN_PATH, &request).await {
            Ok(response) => match parse_json_body(&response) {
                Ok(value) => log::info!("login response ({}): {value}", response.status),
                Err(e) => log::error!("login response ({}): {e}", response.status),
            },
            Err(e) => log::error!("login request failed: {e}"),
        }
    }
}

/// Register, then navigate to login if the response body is JSON.
///
/// # Errors
///
/// Returns the transport error, or `ApiError::Parse` for a non-JSON body. In
/// both cases no navigation happens.
pub async fn submit_signup<T>(
    transport: &T,
    navigator: &dyn Navigator,
    credentials: &Credentials,
) -> Result<serde_json::Value, ApiError>
where
    T: AuthTransport,
{
    let request = credentials.register_request();
    log::info!("signup submitted for {}", request.email);

    let response = transport.post_json(REGISTER_PATH, &request).await.map_err(|e| {
        log::error!("register request failed: {e}");
        e
    })?;

    match parse_json_body(&response) {
        Ok(value) => {
            log::info!("register response ({}): {value}", response.status);
            navigator.navigate(AppRoute::Login);
            Ok(value)
        }
        Err(e) => {
            log::error!("register response ({}): {e}", response.status);
            Err(e)
        }
    }
}
