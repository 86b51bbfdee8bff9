//! # client
//!
//! Leptos + WASM page for the house price prediction service.
//!
//! The page posts the feature form to `/predict`, shows the predicted price,
//! and keeps a table of past predictions from `/predictions` in sync. The
//! `controller` module owns that sequencing; pages and components only wire
//! it to signals and DOM events.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
