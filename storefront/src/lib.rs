//! Brew coffee storefront.
//!
//! A product list and a product detail page over the coffee catalog:
//! - Catalog and settings built once and provided through context
//! - Size selector and quantity counter owned by the detail page
//! - Enter/exit view transitions through one `Motion` wrapper

pub mod app;
pub mod components;
pub mod config;
pub mod detail;
pub mod motion;
pub mod state;

#[cfg(feature = "ssr")]
mod server;

pub use app::{App, StorefrontApp};
pub use state::Storefront;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
