//! # plantcheck-client
//!
//! Leptos + WASM frontend for the PlantCheck plant-disease detection app.
//! Replaces the vanilla-JS browser controller with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the HTTP API
//! client for the detection and chat endpoints, and the constrained
//! markdown-to-HTML pipeline used for assistant replies.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
