//! Dropdown selector for choosing a district within the selected state.

use crate::state::AppState;
use dioxus::prelude::*;

/// District dropdown selector.
/// The option list follows the selected state; the auto-correction
/// effect in the app keeps selected_district inside it.
#[component]
pub fn DistrictSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected_state = (state.selected_state)();
    let districts: Vec<String> = state
        .locations
        .read()
        .districts_of(&selected_state)
        .to_vec();
    let selected = (state.selected_district)();
    let disabled = (state.loading)() || districts.is_empty();

    let on_change = move |evt: Event<FormData>| {
        state.selected_district.set(evt.value());
    };

    rsx! {
        div {
            label {
                r#for: "district-select",
                style: "display: block; font-size: 13px; color: #D1D5DB; margin-bottom: 4px;",
                "District"
            }
            select {
                id: "district-select",
                style: "height: 40px; width: 100%; border-radius: 6px; border: 1px solid #4B5563; background: #1F2937; color: #F9FAFB; padding: 0 12px;",
                disabled,
                onchange: on_change,
                for district in districts.iter() {
                    option {
                        value: "{district}",
                        selected: *district == selected,
                        "{district}"
                    }
                }
            }
        }
    }
}
