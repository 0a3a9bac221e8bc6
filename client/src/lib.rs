//! # marquez-site
//!
//! Leptos frontend for the Hotel El Marquez marketing site: a single page of
//! static sections plus booking overlays that hand reservation requests off
//! to the front desk over WhatsApp.
//!
//! The crate builds twice: with `ssr` it is linked into `marquez-server` for
//! server rendering, with `hydrate` it is compiled to WASM and takes over the
//! rendered page in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

