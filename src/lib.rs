#![recursion_limit = "256"]
// lib.rs - Root module for the admin_console library
//
// The list core, models and certificate editor compile without any web
// framework so they can be tested natively. The Leptos layer is gated on
// the `ssr` / `hydrate` features.

pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
