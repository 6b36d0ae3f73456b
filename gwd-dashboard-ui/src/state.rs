//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gwd_data::markers::{LevelBounds, MapFocus};
use gwd_utils::dates;
use gwd_wris::locations::LocationDirectory;
use gwd_wris::observation::GroundwaterObservation;
use gwd_wris::station::LiveStation;
use gwd_wris::summary::{GroundwaterSummary, TrendPoint};

/// Shared application state for the groundwater dashboard.
///
/// The three analysis slots (`summary`, `trend`, `raw_data`) are `None`
/// until an analysis has run; a run that matched nothing leaves
/// `raw_data` as `Some` but empty, which is how the empty-result banner
/// is told apart from the pristine landing state.
#[derive(Clone, Copy)]
pub struct AppState {
    /// State-to-districts directory (empty until loaded)
    pub locations: Signal<LocationDirectory>,
    /// Currently selected state name
    pub selected_state: Signal<String>,
    /// Currently selected district name
    pub selected_district: Signal<String>,
    /// Analysis window start, ISO `yyyy-mm-dd`
    pub start_date: Signal<String>,
    /// Analysis window end, ISO `yyyy-mm-dd`
    pub end_date: Signal<String>,
    /// Whether an analysis is in flight
    pub loading: Signal<bool>,
    /// Dashboard error banner
    pub error_msg: Signal<Option<String>>,
    /// Window statistics for the summary cards
    pub summary: Signal<Option<GroundwaterSummary>>,
    /// Chronological series for the trend chart
    pub trend: Signal<Option<Vec<TrendPoint>>>,
    /// Raw observations behind the bar chart, map and table
    pub raw_data: Signal<Option<Vec<GroundwaterObservation>>>,
    /// Where the dashboard map looks
    pub map_focus: Signal<MapFocus>,
    /// Latest snapshot of every station (None before the first poll lands)
    pub live_stations: Signal<Option<Vec<LiveStation>>>,
    /// Level range across reporting stations, for live marker colors
    pub live_bounds: Signal<Option<LevelBounds>>,
    /// Live page error banner
    pub live_error: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values. The analysis
    /// window starts as the last twelve months.
    pub fn new() -> Self {
        let (start, end) = dates::default_analysis_range();
        Self {
            locations: Signal::new(LocationDirectory::default()),
            selected_state: Signal::new(String::new()),
            selected_district: Signal::new(String::new()),
            start_date: Signal::new(dates::format_iso_date(&start)),
            end_date: Signal::new(dates::format_iso_date(&end)),
            loading: Signal::new(false),
            error_msg: Signal::new(None),
            summary: Signal::new(None),
            trend: Signal::new(None),
            raw_data: Signal::new(None),
            map_focus: Signal::new(MapFocus::default()),
            live_stations: Signal::new(None),
            live_bounds: Signal::new(None),
            live_error: Signal::new(None),
        }
    }
}
