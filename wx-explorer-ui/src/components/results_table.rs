//! Weather records table.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::display::{ResultsView, COLUMN_HEADERS};

/// Renders the current results: a placeholder message, nothing while
/// loading, or one row per record in the seven fixed columns.
#[component]
pub fn ResultsTable() -> Element {
    let state = use_context::<AppState>();
    let results = state.view.read().results.clone();

    let content = match &results {
        ResultsView::Table(rows) => rsx! {
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        for header in COLUMN_HEADERS {
                            th {
                                style: "text-align: left; padding: 8px; background: #EDF2F7; border-bottom: 2px solid #CBD5E0;",
                                "{header}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr {
                            for cell in row.iter() {
                                td {
                                    style: "padding: 8px; border-bottom: 1px solid #E2E8F0;",
                                    "{cell}"
                                }
                            }
                        }
                    }
                }
            }
        },
        other => match other.message() {
            Some(message) => rsx! {
                p {
                    class: "no-results",
                    style: "padding: 24px; text-align: center; color: #718096;",
                    "{message}"
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div {
            id: "results-table",
            {content}
        }
    }
}
