//! # client
//!
//! Leptos + WASM frontend for the project activity and login screens.
//!
//! This crate contains pages, components, page state, and the REST helpers.
//! Wire types are shared with the CLI through the `wire` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(|| leptos::prelude::view! { <app::App/> });
}
