//! Chart panel: pick a location and a chart type, show the rendered image.

use crate::actions;
use crate::components::{LoadingSpinner, LocationSelect, SectionHeader, StatsPanel};
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::models::ChartType;
use wx_core::panel::PanelContent;

/// Visualization section. Errors render inline here and never touch the
/// main error banner.
#[component]
pub fn VisualizationPanel() -> Element {
    let mut state = use_context::<AppState>();
    let location = (state.viz_location)();
    let chart = state.chart.read().clone();
    let charts = ChartType::ALL.map(|c| (c, c.label()));

    let content = match &chart.content {
        PanelContent::Ready(response) => {
            let src = response.data_url();
            let alt = response.alt_text();
            rsx! {
                div {
                    class: "viz-result",
                    img {
                        class: "viz-image",
                        src: "{src}",
                        alt: "{alt}",
                        style: "max-width: 100%; border-radius: 6px;",
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
        section {
            style: "margin-top: 32px; padding-top: 16px; border-top: 1px solid #E2E8F0;",
            SectionHeader {
                title: "Visualizations".to_string(),
                subtitle: "Rainfall compares locations and ignores the location filter".to_string(),
            }

            LocationSelect {
                id: "viz-location".to_string(),
                value: location,
                onchange: move |value: String| state.viz_location.set(value),
            }

            div {
                style: "display: flex; gap: 8px; margin: 8px 0;",
                for (chart_type, label) in charts {
                    button {
                        r#type: "button",
                        onclick: move |_| actions::load_visualization(state, chart_type),
                        "{label}"
                    }
                }
                button {
                    r#type: "button",
                    onclick: move |_| actions::load_statistics(state),
                    "Show Statistics"
                }
            }

            if chart.loading {
                LoadingSpinner { message: "Generating chart...".to_string() }
            }
            div {
                id: "viz-container",
                {content}
            }

            StatsPanel {}
        }
    }
}
