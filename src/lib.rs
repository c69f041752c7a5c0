//! Personal portfolio site rendered client-side with Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` assembles the page, `components` renders sections and hosts the
//! interaction engines from the `effects` crate, `net` talks to the GitHub
//! API and the contact relay, `state` holds page state stored in signals, and
//! `util` isolates configuration and browser concerns.
//!
//! Without the `csr` feature every browser entry point compiles to a no-op so
//! the crate builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
