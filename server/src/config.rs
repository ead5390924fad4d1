//! Listen-address configuration from the environment.
//!
//! `HOST` and `PORT` override the Leptos `site-addr`. Blank values count as
//! unset so an empty `.env` entry does not break startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),
    #[error("invalid HOST {0:?}: expected an IP address")]
    InvalidHost(String),
}

/// Read an environment variable, treating blank values as unset.
pub(crate) fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Apply optional host/port overrides on top of `fallback`.
pub(crate) fn resolve_addr(
    fallback: SocketAddr,
    host: Option<&str>,
    port: Option<&str>,
) -> Result<SocketAddr, ConfigError> {
    let ip = match host {
        Some(raw) => raw
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
        None => fallback.ip(),
    };
    let port = match port {
        Some(raw) => match raw.parse::<u16>() {
            Ok(0) | Err(_) => return Err(ConfigError::InvalidPort(raw.to_owned())),
            Ok(port) => port,
        },
        None => fallback.port(),
    };
    Ok(SocketAddr::new(ip, port))
}

/// Listen address: `HOST`/`PORT` from the environment over `fallback`.
///
/// # Errors
///
/// Returns `ConfigError` if either variable is set but unparsable.
pub fn listen_addr(fallback: SocketAddr) -> Result<SocketAddr, ConfigError> {
    let host = env_nonempty("HOST");
    let port = env_nonempty("PORT");
    resolve_addr(fallback, host.as_deref(), port.as_deref())
}
