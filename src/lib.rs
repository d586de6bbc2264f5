//! # agrisync-client
//!
//! Leptos + WASM frontend for the AgriSync farm-management backend.
//!
//! The heart of the crate is the session and request-authorization core
//! (`auth`, `net`): durable token storage, client-side claim decoding,
//! single-flight token refresh, retry-once request authorization, and
//! role-gated routing. Pages and components are thin consumers of that
//! core's data-fetch/mutate contract.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
