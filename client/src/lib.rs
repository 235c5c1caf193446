//! # tokengate-client
//!
//! Leptos + WASM frontend gating every route behind a session-token cookie.
//!
//! A login form exchanges credentials for a token (`net`), the auth store
//! persists it in a cookie and tracks an `authenticated` flag (`state`), and
//! a router-level guard sends cookie-less visitors to `/login`
//! (`components::route_guard`, `util::auth`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    log::info!("tokengate: hydrating");
    leptos::mount::hydrate_body(app::App);
}
