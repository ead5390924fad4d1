//! Networking modules for the external auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the API base URL, `api` performs raw JSON POSTs, `auth`
//! drives the login and signup flows on top of them, and `error` is the one
//! error type all of these return.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
