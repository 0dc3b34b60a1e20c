//! Core types and client logic for the Weather Explorer.
//!
//! Everything in this crate is target-independent so it can be shared by the
//! Dioxus web app (compiled to WASM) and the native CLI:
//! - `models`: serde models for every backend JSON envelope
//! - `filters`: search form values and the filter state derived from them
//! - `pagination` / `display`: page math and table formatting
//! - `query`: URL building for each API endpoint
//! - `explorer`: the single controller object owning filter/pagination state
//!
//! Enable the `api` feature for a native `reqwest` client.

pub mod dates;
pub mod display;
pub mod error;
pub mod explorer;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod panel;
pub mod query;
pub mod request;

#[cfg(feature = "api")]
pub mod client;

pub use error::ApiError;
pub use explorer::{ExplorerState, PendingQuery, SearchView};
pub use filters::{FilterState, FormField, SearchForm};
pub use models::{ChartType, WeatherRecord};
