//! Dropdown selector for choosing a location.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LocationSelectProps {
    /// DOM id of the `<select>`
    pub id: String,
    /// Currently selected location ("" for all)
    pub value: String,
    /// Called with the newly selected location
    pub onchange: EventHandler<String>,
}

/// Location dropdown.
/// Options come from `AppState::locations`, after an "All Locations" entry.
#[component]
pub fn LocationSelect(props: LocationSelectProps) -> Element {
    let state = use_context::<AppState>();
    let locations = state.locations.read().clone();
    let selected = props.value.clone();
    let onchange = props.onchange;

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "Location: "
            }
            select {
                id: "{props.id}",
                onchange: move |evt: Event<FormData>| onchange.call(evt.value()),
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "All Locations"
                }
                for location in locations.iter() {
                    option {
                        value: "{location}",
                        selected: *location == selected,
                        "{location}"
                    }
                }
            }
        }
    }
}
