//! Status line under the search form.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::explorer::StatusLine;

/// "Showing X-Y of Z results" in standard mode, the processing summary in
/// concurrent mode, nothing after a reset.
#[component]
pub fn ResultsInfo() -> Element {
    let state = use_context::<AppState>();
    let status = state.view.read().status.clone();

    let content = match status {
        StatusLine::Empty => rsx! {},
        StatusLine::Range(text) => rsx! {
            p {
                style: "margin: 8px 0; color: #4A5568; font-size: 14px;",
                "{text}"
            }
        },
        StatusLine::Concurrent(summary) => rsx! {
            div {
                style: "background: #E6FFFA; padding: 0.75rem; margin: 8px 0; border-radius: 6px; border-left: 4px solid #38B2AC;",
                strong { "{summary.title}" }
                br {}
                "{summary.processed}"
                br {}
                "{summary.total_records}"
            }
        },
    };

    rsx! {
        div {
            id: "results-info",
            {content}
        }
    }
}
