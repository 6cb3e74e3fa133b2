//! # client
//!
//! Leptos + WASM frontend for the pH calculator.
//!
//! This crate contains the page, form components, and application state.
//! All chemistry lives in the `phscale` crate; components parse user text,
//! call into it through [`state::calculator::CalculatorState`], and render
//! the results. The crate compiles natively for unit tests and to WASM
//! (with the `csr` feature) for the browser build.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// CSR entry point: install the panic hook, set up console logging, and
/// mount the application to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Init only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting pH calculator");
    leptos::mount::mount_to_body(app::App);
}
