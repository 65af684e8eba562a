//! # auction-client
//!
//! Leptos + WASM single-page client for the auction marketplace.
//!
//! This crate contains the REST API client, the session context, the route
//! tree with its authentication gate, and the pages rendered under it. Build
//! with the `csr` feature for the browser; without it, browser calls are
//! stubbed so the crate compiles and tests natively.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Console line for a logger that could not be installed.
#[cfg(any(test, feature = "csr"))]
fn logger_init_failure(err: &impl std::fmt::Display) -> String {
    format!("auction-client: logger init failed, log output is disabled: {err}")
}

/// WASM entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&logger_init_failure(&err).into());
    }
    leptos::mount::mount_to_body(app::App);
}
