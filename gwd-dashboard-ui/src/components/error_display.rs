//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled alert box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: rgba(127, 29, 29, 0.25); color: #F87171; border-radius: 8px; border: 1px solid rgba(239, 68, 68, 0.5);",
            "{props.message}"
        }
    }
}
