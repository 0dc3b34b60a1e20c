//! Event handlers: build a request, fetch it, apply the response to AppState.
//!
//! Every function spawns onto the Dioxus executor and returns immediately.
//! Responses are applied only while their request token is current, so a
//! slow response can never overwrite the result of a newer request.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::models::{
    ChartType, ConcurrentResponse, LocationsResponse, StatsResponse, VisualizationResponse,
    WeatherPage,
};
use wx_core::panel::PanelContent;
use wx_core::query::{locations_url, stats_url, visualization_url, API_BASE};
use wx_core::PendingQuery;

/// Populate both location selectors. Failure only logs; the selectors stay
/// empty and the page remains usable.
pub fn load_locations(mut state: AppState) {
    spawn(async move {
        match js_bridge::fetch_json::<LocationsResponse>(&locations_url(API_BASE)).await {
            Ok(response) => {
                log::info!("Loaded {} locations", response.locations.len());
                state.locations.set(response.locations);
            }
            Err(e) => log::error!("Error loading locations: {}", e),
        }
    });
}

/// Standard search from the current form values, starting at page 1.
pub fn submit_search(mut state: AppState) {
    let filters = state.form.read().to_filters();
    let pending = state.explorer.write().submit_search(filters);
    run_page_query(state, pending);
}

/// Re-issue the standard search for a 1-based page.
pub fn go_to_page(mut state: AppState, page: usize) {
    let pending = state.explorer.write().go_to_page(page);
    run_page_query(state, pending);
}

/// Concurrent search from the current form values (without `limit`).
pub fn submit_concurrent(mut state: AppState) {
    let filters = state.form.read().to_filters();
    let pending = state.explorer.write().submit_concurrent(filters);
    begin_request(state);
    spawn(async move {
        let result =
            js_bridge::fetch_json::<ConcurrentResponse>(&pending.url(API_BASE)).await;
        match result {
            Ok(response) => {
                let view = state.explorer.read().apply_concurrent(pending.token, &response);
                if let Some(view) = view {
                    state.loading.set(false);
                    state.view.set(view);
                }
            }
            Err(e) => fail_request(state, &pending, e),
        }
    });
}

/// Clear filters, form and results without issuing a request.
pub fn reset(mut state: AppState) {
    let view = state.explorer.write().reset();
    state.form.write().clear();
    state.view.set(view);
    // The in-flight request, if any, was invalidated and will not clear this.
    state.loading.set(false);
}

/// Request a chart for the panel's location.
pub fn load_visualization(mut state: AppState, chart: ChartType) {
    let location = (state.viz_location)();
    let token = state.chart.write().begin();
    spawn(async move {
        let url = visualization_url(API_BASE, chart, Some(&location));
        let content = match js_bridge::fetch_json::<VisualizationResponse>(&url).await {
            Ok(response) => PanelContent::Ready(response),
            Err(e) => {
                log::error!("Error loading {} visualization: {}", chart, e);
                PanelContent::Failed(e.visualization_message())
            }
        };
        state.chart.write().finish(token, content);
    });
}

/// Request aggregate statistics for the panel's location.
pub fn load_statistics(mut state: AppState) {
    let location = (state.viz_location)();
    let token = state.stats.write().begin();
    spawn(async move {
        let url = stats_url(API_BASE, Some(&location));
        let content = match js_bridge::fetch_json::<StatsResponse>(&url).await {
            Ok(response) => PanelContent::Ready(response),
            Err(e) => {
                log::error!("Error loading statistics: {}", e);
                PanelContent::Failed(e.statistics_message())
            }
        };
        state.stats.write().finish(token, content);
    });
}

fn run_page_query(mut state: AppState, pending: PendingQuery) {
    begin_request(state);
    spawn(async move {
        let result = js_bridge::fetch_json::<WeatherPage>(&pending.url(API_BASE)).await;
        match result {
            Ok(page) => {
                let view = state.explorer.write().apply_page(pending.token, &page);
                if let Some(view) = view {
                    state.loading.set(false);
                    state.view.set(view);
                }
            }
            Err(e) => fail_request(state, &pending, e),
        }
    });
}

/// Hide the banner, clear the table and show the loading indicator.
fn begin_request(mut state: AppState) {
    state.error_msg.set(None);
    state.view.write().begin_loading();
    state.loading.set(true);
}

fn fail_request(mut state: AppState, pending: &PendingQuery, error: wx_core::ApiError) {
    log::error!("Error: {}", error);
    let message = state.explorer.read().apply_failure(pending.token, &error);
    if let Some(message) = message {
        state.loading.set(false);
        state.error_msg.set(Some(message));
    }
}
