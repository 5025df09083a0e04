//! # library-client
//!
//! Leptos + WASM frontend for the library lending service: session and
//! credential handling, the authenticated HTTP gateway, typed resource
//! clients, and the role-dependent views built on them.
//!
//! Built with `--features csr` for the browser (Trunk serves `index.html`).
//! Without the feature every module compiles natively so the logic is
//! testable with a plain `cargo test`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
