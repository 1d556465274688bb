//! # journal-dashboard
//!
//! Leptos + WASM frontend for the trading-journal dashboard.
//!
//! This crate contains the route table and router, the dashboard layout
//! shell, pages, components, the activity/trade state providers, and the
//! HTTP helpers for profiles and leaderboards. All analytics are mock data
//! generated on the client.
//!
//! With `ssr` the `server` module renders the router through axum and the
//! `journal-dashboard` binary serves it; with `hydrate` the same `App` is
//! compiled to WASM and attaches to the server-rendered markup.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
