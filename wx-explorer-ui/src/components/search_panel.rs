//! Search form: location, date range, temperature thresholds, rain and page size.

use crate::actions;
use crate::components::LocationSelect;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::FormField;

const FIELD_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; font-size: 13px; font-weight: bold; color: #4A5568;";
const BUTTON_STYLE: &str = "padding: 8px 16px; border-radius: 6px; border: 1px solid #CBD5E0; cursor: pointer;";

/// The search form. Submitting runs a standard search; the concurrent
/// and reset buttons act on the same inputs.
#[component]
pub fn SearchPanel() -> Element {
    let mut state = use_context::<AppState>();
    let location = state.form.read().get(FormField::Location).to_string();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        actions::submit_search(state);
    };

    let on_location_change = move |value: String| {
        state.form.write().set(FormField::Location, value);
    };

    rsx! {
        form {
            id: "search-form",
            style: "padding: 16px; margin-bottom: 16px; background: #F7FAFC; border-radius: 8px; border: 1px solid #E2E8F0;",
            onsubmit: on_submit,

            LocationSelect {
                id: "location".to_string(),
                value: location,
                onchange: on_location_change,
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px; margin: 8px 0;",
                FilterInput { field: FormField::StartDate, kind: "date" }
                FilterInput { field: FormField::EndDate, kind: "date" }
                FilterInput { field: FormField::MinTempMin, kind: "number" }
                FilterInput { field: FormField::MinTempMax, kind: "number" }
                FilterInput { field: FormField::MaxTempMin, kind: "number" }
                FilterInput { field: FormField::MaxTempMax, kind: "number" }
                RainTodaySelect {}
                FilterInput { field: FormField::Limit, kind: "number" }
            }

            div {
                style: "display: flex; gap: 8px; margin-top: 12px;",
                button {
                    r#type: "submit",
                    style: "{BUTTON_STYLE} background: #3182CE; color: white;",
                    "Search"
                }
                button {
                    r#type: "button",
                    style: "{BUTTON_STYLE} background: #38B2AC; color: white;",
                    onclick: move |_| actions::submit_concurrent(state),
                    "Concurrent Search"
                }
                button {
                    r#type: "button",
                    style: "{BUTTON_STYLE} background: white;",
                    onclick: move |_| actions::reset(state),
                    "Reset"
                }
            }
        }
    }
}

/// A labelled text/number/date input bound to one form field.
#[component]
fn FilterInput(field: FormField, kind: &'static str) -> Element {
    let mut state = use_context::<AppState>();
    let value = state.form.read().get(field).to_string();
    let label = field.label();
    let name = field.name();

    rsx! {
        label {
            style: FIELD_STYLE,
            "{label}"
            input {
                r#type: kind,
                name: name,
                value: "{value}",
                step: "any",
                style: "padding: 6px; width: 140px;",
                oninput: move |evt: Event<FormData>| {
                    state.form.write().set(field, evt.value());
                },
            }
        }
    }
}

/// Yes/No filter on the rain-today flag.
#[component]
fn RainTodaySelect() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.form.read().get(FormField::RainToday).to_string();

    rsx! {
        label {
            style: FIELD_STYLE,
            "Rain Today"
            select {
                name: FormField::RainToday.name(),
                style: "padding: 6px;",
                onchange: move |evt: Event<FormData>| {
                    state.form.write().set(FormField::RainToday, evt.value());
                },
                option { value: "", selected: current.is_empty(), "Any" }
                option { value: "Yes", selected: current == "Yes", "Yes" }
                option { value: "No", selected: current == "No", "No" }
            }
        }
    }
}
