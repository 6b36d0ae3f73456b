//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Date range picker for the analysis window.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            label {
                style: "display: block; font-size: 13px; color: #D1D5DB; margin-bottom: 4px;",
                "Date Range"
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                input {
                    r#type: "date",
                    style: "height: 40px; border-radius: 6px; border: 1px solid #4B5563; background: #1F2937; color: #F9FAFB; padding: 0 8px;",
                    value: "{start}",
                    onchange: on_start_change,
                }
                span { style: "color: #9CA3AF;", "to" }
                input {
                    r#type: "date",
                    style: "height: 40px; border-radius: 6px; border: 1px solid #4B5563; background: #1F2937; color: #F9FAFB; padding: 0 8px;",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
