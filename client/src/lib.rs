//! # client
//!
//! Leptos + WASM frontend for the volunteer check-in admin pages.
//!
//! This crate contains pages, components, dashboard and auth state, and the
//! REST helpers used to reach the check-in API. Aggregation lives in the
//! `checkins` crate so the CLI renders the same numbers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
