//! # pcube-movies
//!
//! Leptos + WASM frontend for the PCUBE movie ticket application.
//!
//! This crate contains pages, components, application state, network types,
//! and the session guard that wraps all protected routes. Data comes from
//! the PCUBE REST backend; the client keeps no durable state beyond the
//! session token in `localStorage`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
