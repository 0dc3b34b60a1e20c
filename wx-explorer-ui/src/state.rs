//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Search filters, paging and request tokens live in one [`ExplorerState`];
//! the other signals hold what is currently on screen.

use dioxus::prelude::*;
use wx_core::models::{StatsResponse, VisualizationResponse};
use wx_core::panel::PanelState;
use wx_core::{ExplorerState, SearchForm, SearchView};

/// Shared application state for the Weather Explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Filter, pagination and request-token state of the search panel
    pub explorer: Signal<ExplorerState>,
    /// Current values of the search form inputs
    pub form: Signal<SearchForm>,
    /// Table, pagination controls and status line
    pub view: Signal<SearchView>,
    /// Locations offered by both selectors
    pub locations: Signal<Vec<String>>,
    /// Whether a search request is in flight
    pub loading: Signal<bool>,
    /// Main error banner; hidden when None
    pub error_msg: Signal<Option<String>>,
    /// Location chosen in the visualization panel ("" for all)
    pub viz_location: Signal<String>,
    /// Chart panel
    pub chart: Signal<PanelState<VisualizationResponse>>,
    /// Statistics panel
    pub stats: Signal<PanelState<StatsResponse>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            explorer: Signal::new(ExplorerState::new()),
            form: Signal::new(SearchForm::default()),
            view: Signal::new(SearchView::initial()),
            locations: Signal::new(Vec::new()),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            viz_location: Signal::new(String::new()),
            chart: Signal::new(PanelState::default()),
            stats: Signal::new(PanelState::default()),
        }
    }
}
