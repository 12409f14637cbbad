// lib.rs - Root module for the grocery_kart library
//
// The storefront is a single Leptos application compiled twice:
// natively with the `ssr` feature for the Actix server binary, and to
// WASM with the `hydrate` feature for the browser.

pub mod web_app;

/// WASM entry point, called by the generated JS glue once the page loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
