//! # client
//!
//! Leptos + WASM frontend for the Ritual sticker dashboard.
//!
//! Stickers dragged from the tray onto the canvas open placeholder widget
//! panels; the page background and canvas overlay are configurable. Layout
//! and settings persist in `localStorage` through the `store` crate, and the
//! sticker behavior itself lives in the `canvas` crate.
//!
//! Build for the browser with the `csr` feature. Without it the browser glue
//! compiles to no-ops so `state` and `util` are tested natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
