//! Weather Data Explorer
//!
//! Browser client for the weather records API. Filters and paging state
//! live in a single `ExplorerState`; every search, page change and chart
//! request is a thin mapping from a DOM event to an HTTP GET to a view update.
//!
//! Data flow:
//! 1. On mount, `/api/locations` fills the search and visualization selectors.
//! 2. Submitting the form queries `/api/weather` with the non-empty filters
//!    and renders the table, pagination and status line.
//! 3. "Concurrent Search" queries `/api/weather/concurrent` and renders the
//!    processing summary instead of pagination.
//! 4. The visualization panel embeds charts from `/api/visualize/{type}` and
//!    aggregate statistics from `/api/stats`.

use dioxus::prelude::*;
use wx_explorer_ui::actions;
use wx_explorer_ui::components::{
    ErrorDisplay, LoadingSpinner, PaginationControls, ResultsInfo, ResultsTable, SearchPanel,
    SectionHeader, VisualizationPanel,
};
use wx_explorer_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-explorer-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // Populate location selectors once on mount
    use_effect(move || {
        actions::load_locations(state);
    });

    rsx! {
        div {
            style: "padding: 16px; max-width: 1100px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "font-size: 24px; color: #2D3748;",
                "Weather Data Explorer"
            }

            SearchPanel {}

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }

            SectionHeader { title: "Results".to_string() }
            ResultsInfo {}
            if (state.loading)() {
                LoadingSpinner { message: "Loading weather data...".to_string() }
            }
            ResultsTable {}
            PaginationControls {}

            VisualizationPanel {}
        }
    }
}
