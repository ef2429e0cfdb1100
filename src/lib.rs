//! Leptos client whose routes are gated behind a session check.
//!
//! `components::access_guard::AccessGuard` renders its children for signed-in
//! visitors and otherwise redirects to `/login`, replacing the history entry.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
