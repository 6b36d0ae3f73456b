//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;

/// State dropdown selector.
/// Reads the location directory from AppState and updates selected_state on change.
/// Disabled while an analysis is in flight or the directory is still empty.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let directory = state.locations.read().clone();
    let selected = (state.selected_state)();
    let disabled = (state.loading)() || directory.is_empty();

    let on_change = move |evt: Event<FormData>| {
        state.selected_state.set(evt.value());
    };

    rsx! {
        div {
            label {
                r#for: "state-select",
                style: "display: block; font-size: 13px; color: #D1D5DB; margin-bottom: 4px;",
                "State"
            }
            select {
                id: "state-select",
                style: "height: 40px; width: 100%; border-radius: 6px; border: 1px solid #4B5563; background: #1F2937; color: #F9FAFB; padding: 0 12px;",
                disabled,
                onchange: on_change,
                for entry in directory.states.iter() {
                    option {
                        value: "{entry.state}",
                        selected: entry.state == selected,
                        "{entry.state}"
                    }
                }
            }
        }
    }
}
