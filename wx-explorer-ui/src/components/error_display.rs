//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            class: "error-message",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF5F5; color: #C53030; border-radius: 6px; border: 1px solid #FEB2B2;",
            "{props.message}"
        }
    }
}
