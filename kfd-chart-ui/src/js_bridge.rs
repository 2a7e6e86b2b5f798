//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module provides safe Rust wrappers that serialize
//! data and call those globals, plus the small navigation helpers the snap
//! row needs (wheel translation, query-string sync, smooth scrolling).

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");
static WIND_MAP_JS: &str = include_str!("../assets/js/wind-map.js");
static POWER_MAP_JS: &str = include_str!("../assets/js/power-map.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");
static SUNBURST_JS: &str = include_str!("../assets/js/sunburst.js");
static HIERARCHICAL_BAR_JS: &str = include_str!("../assets/js/hierarchical-bar.js");
static GROUPED_BAR_JS: &str = include_str!("../assets/js/grouped-bar.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static PLANT_BARS_JS: &str = include_str!("../assets/js/plant-bars.js");
static SAVE_PNG_JS: &str = include_str!("../assets/js/save-png.js");

const RENDER_FUNCTIONS: &[&str] = &[
    "renderChoroplethMap",
    "renderWindMap",
    "renderPowerMap",
    "renderSeasonHeatmap",
    "renderSunburst",
    "renderHierarchicalBar",
    "renderGroupedBar",
    "renderGradientLine",
    "renderPlantBars",
    "downloadSvgAsPng",
    "initTooltip",
    "showTooltip",
    "moveTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('KFD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

fn all_scripts() -> String {
    [
        TOOLTIP_JS,
        CHOROPLETH_MAP_JS,
        WIND_MAP_JS,
        POWER_MAP_JS,
        HEATMAP_JS,
        SUNBURST_JS,
        HIERARCHICAL_BAR_JS,
        GROUPED_BAR_JS,
        LINE_CHART_JS,
        PLANT_BARS_JS,
        SAVE_PNG_JS,
    ]
    .join("\n")
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions via `function` declarations. To
/// ensure they become globally accessible (not block-scoped inside the
/// setInterval callback), they are evaluated at global scope via indirect
/// eval once D3 is ready, then each function is promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__kfdChartScripts = {};",
        serde_json::to_string(&all_scripts()).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promotions: String = RENDER_FUNCTIONS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__kfdChartsReady) {{ delete window.__kfdChartScripts; return; }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__kfdChartScripts);
                    delete window.__kfdChartScripts;
                    {promotions}
                    window.__kfdChartsReady = true;
                    console.log('KFD charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Call a global render function once D3 is loaded, the chart scripts are
/// initialized, and the container DOM element exists.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__kfdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[KFD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a province choropleth (PM10, temperature, rainfall, vehicles).
pub fn render_choropleth_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderChoroplethMap", container_id, data_json, config_json);
}

/// Render the seasonal wind map (speed fill + direction arrows).
pub fn render_wind_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderWindMap", container_id, data_json, config_json);
}

/// Render the power-plant bubble map over district boundaries.
pub fn render_power_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPowerMap", container_id, data_json, config_json);
}

/// Render the year × season heatmap grid.
pub fn render_season_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSeasonHeatmap", container_id, data_json, config_json);
}

/// Render the year/season sunburst.
pub fn render_sunburst(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSunburst", container_id, data_json, config_json);
}

/// Render the year → season → month drill-down bar chart.
pub fn render_hierarchical_bar(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderHierarchicalBar", container_id, data_json, config_json);
}

/// Render the year × season grouped bars.
pub fn render_grouped_bar(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGroupedBar", container_id, data_json, config_json);
}

/// Render the daily gradient-encoded line.
pub fn render_gradient_line(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderGradientLine", container_id, data_json, config_json);
}

/// Render the plant / non-plant monthly bar race.
pub fn render_plant_bars(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPlantBars", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Serialize the panel's SVG and download it as a PNG file.
pub fn download_panel_png(container_id: &str, filename: &str) {
    call_js(&format!(
        "if (window.downloadSvgAsPng) window.downloadSvgAsPng('{container_id}', '{filename}');",
    ));
}

/// Translate vertical wheel input into horizontal scrolling on the snap row.
/// Installed once; the listener lives until the page unloads.
pub fn install_horizontal_wheel(container_id: &str) {
    call_js(&format!(
        r#"
        var node = document.getElementById('{container_id}');
        if (node && !node.__kfdWheel) {{
            node.__kfdWheel = function(e) {{
                if (Math.abs(e.deltaY) > Math.abs(e.deltaX)) {{
                    node.scrollLeft += e.deltaY;
                    e.preventDefault();
                }}
            }};
            node.addEventListener('wheel', node.__kfdWheel, {{ passive: false }});
        }}
        "#,
    ));
}

/// Remove the wheel listener installed by [`install_horizontal_wheel`].
pub fn remove_horizontal_wheel(container_id: &str) {
    call_js(&format!(
        r#"
        var node = document.getElementById('{container_id}');
        if (node && node.__kfdWheel) {{
            node.removeEventListener('wheel', node.__kfdWheel);
            delete node.__kfdWheel;
        }}
        "#,
    ));
}

/// Move one panel left/right on ArrowLeft/ArrowRight. Installed once on the
/// window; paired with [`remove_arrow_keys`] for teardown.
pub fn install_arrow_keys(container_id: &str) {
    call_js(&format!(
        r#"
        if (!window.__kfdKeys) {{
            window.__kfdKeys = function(e) {{
                var node = document.getElementById('{container_id}');
                if (!node) return;
                if (e.key === 'ArrowRight') {{
                    node.scrollBy({{ left: node.clientWidth, behavior: 'smooth' }});
                }} else if (e.key === 'ArrowLeft') {{
                    node.scrollBy({{ left: -node.clientWidth, behavior: 'smooth' }});
                }}
            }};
            window.addEventListener('keydown', window.__kfdKeys);
        }}
        "#,
    ));
}

/// Remove the keydown listener installed by [`install_arrow_keys`].
pub fn remove_arrow_keys() {
    call_js(
        r#"
        if (window.__kfdKeys) {
            window.removeEventListener('keydown', window.__kfdKeys);
            delete window.__kfdKeys;
        }
        "#,
    );
}

/// Scroll a panel into view, smoothly for dot clicks, instantly for the
/// query-string jump on load.
pub fn scroll_to_panel(panel_id: &str, smooth: bool) {
    let behavior = if smooth { "smooth" } else { "instant" };
    call_js(&format!(
        "var el = document.getElementById('{panel_id}'); \
         if (el) el.scrollIntoView({{ behavior: '{behavior}' }});",
    ));
}

/// Mirror the active panel into the query string for deep links.
pub fn sync_query_param(panel_id: &str) {
    call_js(&format!(
        "window.history.replaceState(null, '', '?cont={panel_id}');",
    ));
}

/// Read the `?cont=` query parameter, if present.
pub fn query_panel_param() -> Option<String> {
    let value = js_sys::eval(
        "new URLSearchParams(window.location.search).get('cont') || ''",
    )
    .ok()?
    .as_string()?;
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
