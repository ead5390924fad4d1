//! # codeplan-client
//!
//! Leptos + WASM frontend for the CodePlan project-planning product: landing
//! page, login and signup forms, and a dashboard inside a sidebar shell.
//!
//! The only network traffic is the two auth form submissions in `net::auth`,
//! sent to an external API this crate does not implement.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("codeplan client hydrating");
    leptos::mount::hydrate_body(app::App);
}
