//! # storefront
//!
//! Leptos + WASM catalog-and-cart storefront. Fetches the product catalog
//! once from an external API, keeps a cart that survives reloads through
//! `localStorage`, and shows a running total.
//!
//! The cart reducer, persistence bridge, catalog loader, and formatting are
//! plain Rust and test natively; browser glue is gated behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
