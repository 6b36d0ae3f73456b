//! Reusable Dioxus RSX components for the groundwater dashboard.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod district_selector;
mod error_display;
mod loading_spinner;
mod state_selector;
mod summary_cards;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use district_selector::DistrictSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use state_selector::StateSelector;
pub use summary_cards::SummaryCards;
