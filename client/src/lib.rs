//! # client
//!
//! Leptos + WASM frontend for the voice-analysis practice application.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the record service. The root host crate renders it on the server
//! (`ssr` feature); the browser bundle hydrates it (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
