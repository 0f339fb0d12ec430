//! # client
//!
//! Leptos + WASM frontend for the codiac portfolio site.
//!
//! This crate contains the page, its components, the embedded content
//! repository and the view-state engine (gallery filter, focused detail
//! items, contact submission lifecycle). The `server` crate renders it with
//! SSR and the `hydrate` feature builds the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
