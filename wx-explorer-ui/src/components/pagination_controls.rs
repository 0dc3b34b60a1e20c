//! Previous/Next controls for the standard search.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;

/// Hidden when everything fits on one page or in concurrent mode.
#[component]
pub fn PaginationControls() -> Element {
    let state = use_context::<AppState>();
    let Some(controls) = state.view.read().pagination else {
        return rsx! {};
    };
    let label = controls.label();
    let prev_page = controls.prev_page();
    let next_page = controls.next_page();

    rsx! {
        div {
            id: "pagination",
            style: "display: flex; justify-content: center; align-items: center; gap: 8px; margin: 16px 0;",
            button {
                disabled: !controls.prev_enabled(),
                onclick: move |_| actions::go_to_page(state, prev_page),
                "Previous"
            }
            span {
                style: "padding: 0.5rem 1rem; color: #4A5568;",
                "{label}"
            }
            button {
                disabled: !controls.next_enabled(),
                onclick: move |_| actions::go_to_page(state, next_page),
                "Next"
            }
        }
    }
}
