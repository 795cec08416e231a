// lib.rs - Root module for the estoque-web library
//
// The same crate builds three ways: with `ssr` it is the actix-web
// server, with `hydrate` it is the WASM bundle, and with no features
// it exposes only the framework-free domain model for tests.

pub mod web_app;

/// WASM entry point: takes over the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
