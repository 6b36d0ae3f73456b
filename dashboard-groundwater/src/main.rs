//! India Groundwater Dashboard
//!
//! Two-page Dioxus app over the groundwater API gateway: an analysis
//! dashboard (summary cards, trend chart, station averages, map, raw
//! table) and a self-refreshing live map of every monitoring station.
//!
//! Data flow:
//! 1. On mount: fetch the state-to-districts directory and seed the
//!    selectors with its first entry.
//! 2. On Analyze: POST the summary, trend and level endpoints
//!    concurrently, wait for all three, then publish every view slot in
//!    one pass so the page never shows half an analysis.
//! 3. Rendering effects watch the slots and hand JSON to the D3/Leaflet
//!    bridge whenever they change.
//! 4. The live page polls the all-stations endpoint once a minute and
//!    replaces markers wholesale each cycle.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use gwd_dashboard_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, DistrictSelector, ErrorDisplay, LoadingSpinner,
    StateSelector, SummaryCards,
};
use gwd_dashboard_ui::js_bridge;
use gwd_dashboard_ui::state::AppState;
use gwd_data::live::live_level_bounds;
use gwd_data::markers::{
    focus_for, markers_from_observations, markers_from_stations, LevelBounds, MapFocus,
};
use gwd_data::selection::resolve_district;
use gwd_data::stations::station_averages;
use gwd_wris::client::{ApiClient, ApiError};
use gwd_wris::query::AnalysisQuery;

/// DOM ids the JS bridge renders into.
const TREND_CHART_ID: &str = "trend-chart";
const STATION_BAR_ID: &str = "station-bar-chart";
const DASHBOARD_MAP_ID: &str = "dashboard-map";
const DATA_TABLE_ID: &str = "raw-data-table";
const LIVE_MAP_ID: &str = "live-map";

/// Poll interval for the live station map.
const LIVE_POLL_MILLIS: u32 = 60_000;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("groundwater-root"))
        .launch(App);
}

#[derive(Clone, Copy, PartialEq)]
enum View {
    Dashboard,
    LiveMap,
}

/// One row of the raw data table, pre-formatted for the bridge.
#[derive(Serialize)]
struct TableRow {
    name: String,
    date: Option<String>,
    level: Option<f64>,
}

/// Run the three-endpoint analysis and publish the outcome.
///
/// The result slots are cleared up front, so a failed run never leaves
/// a stale chart from the previous one, and published together at the
/// end. An OK round trip with zero records is reported as an error
/// banner with empty raw data, not as a silent blank page.
async fn run_analysis(mut state: AppState) {
    let selected_state = (state.selected_state)();
    let selected_district = (state.selected_district)();
    if selected_state.is_empty() || selected_district.is_empty() {
        state
            .error_msg
            .set(Some("Please select a state and district.".to_string()));
        return;
    }

    state.loading.set(true);
    state.error_msg.set(None);
    state.summary.set(None);
    state.trend.set(None);
    state.raw_data.set(None);

    let query = AnalysisQuery {
        state_name: selected_state.to_uppercase(),
        district_name: selected_district.to_uppercase(),
        start_date: (state.start_date)(),
        end_date: (state.end_date)(),
    };

    let client = ApiClient::default();
    match client.fetch_analysis(&query).await {
        Ok(bundle) => {
            let records = bundle.levels.into_records();
            if records.is_empty() {
                state
                    .error_msg
                    .set(Some("No groundwater data found for the selected criteria.".to_string()));
                state.raw_data.set(Some(Vec::new()));
                state.summary.set(None);
                state.trend.set(None);
            } else {
                if let Some(focus) = focus_for(&records) {
                    state.map_focus.set(focus);
                }
                state.summary.set(Some(bundle.summary));
                state.trend.set(Some(bundle.trend.trend_data));
                state.raw_data.set(Some(records));
            }
        }
        Err(e) => {
            state
                .error_msg
                .set(Some(format!("Failed to fetch data. Details: {e}")));
        }
    }
    state.loading.set(false);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let view = use_signal(|| View::Dashboard);

    // ─── Effect 1: One-time startup; chart scripts + location directory ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            let client = ApiClient::default();
            match client.fetch_locations().await {
                Ok(directory) => {
                    if let Some((first_state, first_district)) = directory.default_selection() {
                        state.selected_state.set(first_state);
                        state.selected_district.set(first_district);
                    }
                    state.locations.set(directory);
                }
                Err(e) => {
                    state
                        .error_msg
                        .set(Some(format!("Could not load location data: {e}")));
                }
            }
        });
    });

    // ─── Effect 2: Keep the district inside the selected state ───
    // Re-runs on state change; an invalid district falls back to the new
    // list's head, or clears when the state lists no districts.
    use_effect(move || {
        let selected_state = (state.selected_state)();
        let selected_district = (state.selected_district)();
        if selected_state.is_empty() || state.locations.read().is_empty() {
            return;
        }
        let districts: Vec<String> = state
            .locations
            .read()
            .districts_of(&selected_state)
            .to_vec();
        let resolved = resolve_district(&districts, &selected_district);
        if resolved != selected_district {
            state.selected_district.set(resolved);
        }
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: #111827; color: #F9FAFB; font-family: system-ui, -apple-system, sans-serif;",
            Header { view }
            if (view)() == View::Dashboard {
                ControlPanel {}
                DashboardPage {}
            } else {
                LiveMapPage {}
            }
        }
    }
}

/// Title bar with the page toggle in the corner.
#[component]
fn Header(view: Signal<View>) -> Element {
    let mut view = view;
    rsx! {
        header {
            style: "position: relative; display: flex; justify-content: center; align-items: center; padding: 16px; background: #0B1120; border-bottom: 1px solid #374151;",
            h1 {
                style: "margin: 0; font-size: 22px;",
                "India's Real-time Groundwater Dashboard"
            }
            div {
                style: "position: absolute; right: 16px;",
                if (view)() == View::Dashboard {
                    button {
                        style: "height: 40px; padding: 0 16px; border-radius: 6px; border: none; background: #2563EB; color: white; cursor: pointer;",
                        title: "Go to Live Map",
                        onclick: move |_| view.set(View::LiveMap),
                        "Live Map"
                    }
                } else {
                    button {
                        style: "height: 40px; padding: 0 16px; border-radius: 6px; border: none; background: #2563EB; color: white; cursor: pointer;",
                        title: "Back to Dashboard",
                        onclick: move |_| view.set(View::Dashboard),
                        "✕"
                    }
                }
            }
        }
    }
}

/// Location, date range and the Analyze trigger.
#[component]
fn ControlPanel() -> Element {
    let state = use_context::<AppState>();
    let loading = (state.loading)();
    let no_locations = state.locations.read().is_empty();

    let on_analyze = move |_| {
        spawn(run_analysis(state));
    };

    rsx! {
        div {
            style: "padding: 16px; background: rgba(11, 17, 32, 0.5); border-bottom: 1px solid #374151;",
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(210px, 1fr)); gap: 16px; align-items: end; max-width: 1200px; margin: 0 auto;",
                StateSelector {}
                DistrictSelector {}
                DateRangePicker {}
                button {
                    style: "height: 40px; padding: 0 20px; border-radius: 6px; border: none; background: #2563EB; color: white; cursor: pointer; font-weight: 500;",
                    disabled: loading || no_locations,
                    onclick: on_analyze,
                    if loading { "Analyzing..." } else { "Analyze" }
                }
            }
        }
    }
}

#[component]
fn DashboardPage() -> Element {
    let state = use_context::<AppState>();

    // ─── Effect: Trend chart ───
    use_effect(move || {
        let Some(trend) = state.trend.read().clone() else {
            return;
        };
        if trend.is_empty() {
            return;
        }
        let data_json = serde_json::to_string(&trend).unwrap_or_default();
        let config_json = serde_json::json!({
            "yAxisLabel": "Level (m)",
            "color": "#8884d8",
        })
        .to_string();
        js_bridge::render_area_chart(TREND_CHART_ID, &data_json, &config_json);
    });

    // ─── Effect: Station averages bar chart ───
    use_effect(move || {
        let Some(records) = state.raw_data.read().clone() else {
            return;
        };
        if records.is_empty() {
            return;
        }
        let averages = station_averages(&records);
        let data_json = serde_json::to_string(&averages).unwrap_or_default();
        let config_json = serde_json::json!({"color": "#8884d8"}).to_string();
        js_bridge::render_bar_chart(STATION_BAR_ID, &data_json, &config_json);
    });

    // ─── Effect: District map ───
    use_effect(move || {
        let records = state.raw_data.read().clone();
        let summary = state.summary.read().clone();
        let focus = (state.map_focus)();
        let (Some(records), Some(summary)) = (records, summary) else {
            return;
        };
        if records.is_empty() {
            return;
        }
        let bounds = LevelBounds::from_summary(&summary);
        let markers = markers_from_observations(&records, &bounds);
        let data_json = serde_json::to_string(&markers).unwrap_or_default();
        let config_json = serde_json::to_string(&focus).unwrap_or_default();
        js_bridge::render_station_map(DASHBOARD_MAP_ID, &data_json, &config_json);
    });

    // ─── Effect: Raw data table ───
    use_effect(move || {
        let Some(records) = state.raw_data.read().clone() else {
            return;
        };
        if records.is_empty() {
            return;
        }
        let rows: Vec<TableRow> = records
            .iter()
            .map(|r| TableRow {
                name: r.display_name().to_string(),
                date: r.display_date(),
                level: r.data_value,
            })
            .collect();
        let data_json = serde_json::to_string(&rows).unwrap_or_default();
        let config_json = serde_json::json!({"maxHeight": 300}).to_string();
        js_bridge::render_data_table(DATA_TABLE_ID, &data_json, &config_json);
    });

    let loading = (state.loading)();
    let has_summary = state.summary.read().is_some();
    let has_error = state.error_msg.read().is_some();
    let has_trend = state
        .trend
        .read()
        .as_ref()
        .map(|t| !t.is_empty())
        .unwrap_or(false);
    let has_records = state
        .raw_data
        .read()
        .as_ref()
        .map(|r| !r.is_empty())
        .unwrap_or(false);

    rsx! {
        main {
            style: "padding: 24px; max-width: 1200px; margin: 0 auto; display: flex; flex-direction: column; gap: 24px;",
            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }
            if !has_summary && !loading && !has_error {
                div {
                    style: "text-align: center; padding: 64px 0; color: #6B7280;",
                    h2 { style: "margin: 0 0 8px 0; color: #D1D5DB;", "Begin Analysis" }
                    p { style: "margin: 0;", "Please select a location to begin." }
                }
            }
            if loading {
                LoadingSpinner { message: "Analyzing groundwater data...".to_string() }
            }
            if let Some(summary) = state.summary.read().clone() {
                SummaryCards { summary }
            }
            if has_trend {
                div {
                    style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
                    div {
                        style: "background: #1F2937; border: 1px solid #374151; border-radius: 8px; padding: 16px;",
                        ChartHeader { title: "Water Level Trend".to_string() }
                        ChartContainer { id: TREND_CHART_ID.to_string(), min_height: 360 }
                    }
                    if has_records {
                        div {
                            style: "background: #1F2937; border: 1px solid #374151; border-radius: 8px; overflow: hidden;",
                            ChartContainer { id: DASHBOARD_MAP_ID.to_string(), min_height: 400 }
                        }
                    }
                }
            }
            if has_records {
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px;",
                    div {
                        style: "background: #1F2937; border: 1px solid #374151; border-radius: 8px; padding: 16px;",
                        ChartHeader {
                            title: "Average Water Level by Station".to_string(),
                            unit_description: "metres below ground level".to_string(),
                        }
                        ChartContainer { id: STATION_BAR_ID.to_string(), min_height: 360 }
                    }
                    div {
                        style: "background: #1F2937; border: 1px solid #374151; border-radius: 8px; padding: 16px;",
                        ChartHeader { title: "Raw Data Points".to_string() }
                        ChartContainer { id: DATA_TABLE_ID.to_string(), min_height: 300 }
                    }
                }
            }
        }
    }
}

/// Full-viewport map of every station, refreshed once a minute.
///
/// The poll task belongs to this component's scope, so leaving the page
/// drops it; coming back starts a fresh cycle with a fresh initial
/// loading state, while the previous snapshot stays in AppState.
#[component]
fn LiveMapPage() -> Element {
    let mut state = use_context::<AppState>();
    let mut initial_loading = use_signal(|| true);

    // ─── Effect: Poll all stations every minute ───
    use_effect(move || {
        spawn(async move {
            let client = ApiClient::default();
            loop {
                state.live_error.set(None);
                match client.fetch_all_stations().await {
                    Ok(stations) => {
                        state.live_bounds.set(live_level_bounds(&stations));
                        state.live_stations.set(Some(stations));
                    }
                    Err(ApiError::Status(_)) => {
                        state
                            .live_error
                            .set(Some("Failed to fetch all stations data".to_string()));
                    }
                    Err(e) => {
                        state.live_error.set(Some(e.to_string()));
                    }
                }
                if (initial_loading)() {
                    initial_loading.set(false);
                }
                TimeoutFuture::new(LIVE_POLL_MILLIS).await;
            }
        });
    });

    // ─── Effect: Live station map ───
    use_effect(move || {
        let Some(stations) = state.live_stations.read().clone() else {
            return;
        };
        // Cleared bounds mean no station reports a level; markers all
        // come out neutral, but the map still renders.
        let bounds = (state.live_bounds)().unwrap_or_default();
        let markers = markers_from_stations(&stations, &bounds);
        let focus = MapFocus::default();
        let data_json = serde_json::to_string(&markers).unwrap_or_default();
        let config_json = serde_json::json!({
            "latitude": focus.latitude,
            "longitude": focus.longitude,
            "zoom": focus.zoom,
            "height": 640,
        })
        .to_string();
        js_bridge::render_station_map(LIVE_MAP_ID, &data_json, &config_json);
    });

    let has_snapshot = state.live_stations.read().is_some();

    rsx! {
        div {
            style: "position: relative; padding: 16px;",
            if let Some(err) = state.live_error.read().as_ref() {
                div {
                    style: "position: absolute; top: 24px; left: 50%; transform: translateX(-50%); z-index: 1000; min-width: 320px;",
                    ErrorDisplay { message: err.clone() }
                }
            }
            if (initial_loading)() {
                LoadingSpinner { message: "Loading station map...".to_string() }
            } else if has_snapshot {
                ChartContainer { id: LIVE_MAP_ID.to_string(), min_height: 640 }
            }
        }
    }
}
