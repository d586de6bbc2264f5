//! Reactive UI state provided via Leptos context.

pub mod auth;
