//! # client
//!
//! Leptos + WASM frontend for the incident-reporting platform. Pages and
//! widget components render from per-domain state modules; the report
//! composer and dashboard aggregation logic live in `state/` as plain Rust
//! so they build and test on the host without a browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Mount the application into `<body>`. WASM entry point for the CSR bundle.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
