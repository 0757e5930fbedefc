//! # client
//!
//! Leptos + WASM frontend for the "I have Tools" page: calculator, currency,
//! unit and time-zone converters, and a wheel of names.
//!
//! The engines live in the `tools` crate. This crate holds the per-tool
//! form state, the components that render it, and the few browser calls
//! (clipboard, location, randomness) the page needs.

pub mod app;
pub mod components;
pub mod context;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    log::info!("hydrating I have Tools");
    leptos::mount::hydrate_body(app::App);
}
