// lib.rs - Root module for the products_ui library
//
// The library is compiled twice by cargo-leptos: once natively with `ssr`
// for the Actix host, once to WASM with `hydrate` for the browser.

/// Sample catalog data shared by tests and local demos
pub mod fixtures;

/// The Leptos application: model, API client, components and pages
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: attach to the server-rendered HTML
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
