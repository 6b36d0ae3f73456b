//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js charts and the Leaflet map live in `assets/js/*.js` and are
//! loaded at runtime. They are evaluated as globals (no ES modules) and
//! exposed via `window.*`. This module provides safe Rust wrappers that
//! serialize data and call those globals.

// Embed all chart and map JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart and map scripts with a wait-for-libraries polling loop.
///
/// The JS files define functions like `renderAreaChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once both D3 and Leaflet
/// are ready, and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        AREA_CHART_JS,
        BAR_CHART_JS,
        DATA_TABLE_JS,
        STATION_MAP_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__gwdChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__gwdChartScripts);
                    delete window.__gwdChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderAreaChart !== 'undefined') window.renderAreaChart = renderAreaChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof renderStationMap !== 'undefined') window.renderStationMap = renderStationMap;
                    if (typeof destroyStationMap !== 'undefined') window.destroyStationMap = destroyStationMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__gwdChartsReady = true;
                    console.log('GWD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the water level trend as an area chart.
///
/// Uses a polling loop to wait for the libraries to load, chart scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gwdChartsReady &&
                    typeof window.renderAreaChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderAreaChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GWD] renderAreaChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render per-station averages as a horizontal bar chart.
///
/// Uses a polling loop to wait for the libraries to load, chart scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            console.log('[GWD Debug] Initiating polling for bar-chart');
            var poll = setInterval(function() {{
                if (window.__gwdChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GWD] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the raw observation rows as a scrollable table.
///
/// Uses a polling loop to wait for the libraries to load, chart scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            console.log('[GWD Debug] Initiating polling for data-table');
            var poll = setInterval(function() {{
                if (window.__gwdChartsReady &&
                    typeof window.renderDataTable !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderDataTable('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GWD] renderDataTable error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render station markers on a Leaflet map.
///
/// The map script replaces any live Leaflet instance bound to the
/// container before drawing, so repeated calls refresh markers
/// wholesale instead of stacking layers.
pub fn render_station_map(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gwdChartsReady &&
                    typeof window.renderStationMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderStationMap('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GWD] renderStationMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down the Leaflet instance bound to a container, if any.
pub fn destroy_station_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyStationMap !== 'undefined') window.destroyStationMap('{}');",
        container_id
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
