//! Aggregate statistics for the visualization location.

use crate::components::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::display::statistics_rows;
use wx_core::panel::PanelContent;

#[component]
pub fn StatsPanel() -> Element {
    let state = use_context::<AppState>();
    let stats = state.stats.read().clone();

    let content = match &stats.content {
        PanelContent::Ready(response) => {
            let title = response
                .location
                .clone()
                .unwrap_or_else(|| "All locations".to_string());
            let rows = statistics_rows(&response.statistics);
            rsx! {
                h3 {
                    style: "margin: 8px 0; font-size: 15px;",
                    "Statistics: {title}"
                }
                dl {
                    style: "display: grid; grid-template-columns: max-content auto; gap: 4px 16px; font-size: 14px;",
                    for (label, value) in rows {
                        dt { style: "color: #4A5568;", "{label}" }
                        dd { style: "margin: 0;", "{value}" }
                    }
                }
            }
        }
        PanelContent::Failed(message) => rsx! {
            div {
                class: "error-message",
                style: "padding: 12px 16px; color: #C53030;",
                "{message}"
            }
        },
        PanelContent::Idle => rsx! {},
    };

    rsx! {
        div {
            id: "stats-container",
            style: "margin-top: 16px;",
            if stats.loading {
                LoadingSpinner { message: "Loading statistics...".to_string() }
            }
            {content}
        }
    }
}
