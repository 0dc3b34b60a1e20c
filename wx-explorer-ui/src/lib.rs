//! Shared Dioxus components and browser bridge for the Weather Explorer.
//!
//! This crate provides:
//! - `js_bridge`: `fetch` wrapper over `web-sys` that decodes API envelopes
//! - `state`: Reactive AppState with Dioxus Signals
//! - `actions`: request/response handlers that update AppState
//! - `components`: RSX components (search form, results table, panels)

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod state;
