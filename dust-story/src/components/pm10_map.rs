//! Nationwide PM10 choropleth with a year filter.

use chrono::Datelike;
use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{
    year_label, ChartContainer, DownloadButton, PanelHeading, SnapPanel, YearButtons,
};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "pm10-map-chart";

#[component]
pub fn Pm10MapPanel(id: String) -> Element {
    let state = use_context::<AppState>();
    let year = use_signal(|| None::<i32>);

    use_effect(move || {
        let rows = state.dataset.read();
        let provinces = state.provinces.read();
        if rows.is_empty() || provinces.is_empty() {
            return;
        }
        let selected = year();
        let filtered: Vec<_> = rows
            .iter()
            .filter(|r| selected.map_or(true, |y| r.date.year() == y))
            .cloned()
            .collect();
        let means = shape::province_mean(&filtered, |r| r.pm10);
        if means.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let geojson = shape::province_choropleth(&provinces, &means);
        let config = serde_json::json!({
            "title": "PM10",
            "unit": "µg/m³",
            "scheme": "oranges",
            "badge": year_label(selected),
        });
        js_bridge::render_choropleth_map(CHART_ID, &geojson.to_string(), &config.to_string());
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "전국 PM10 평균".to_string(),
                subtitle: "시·도별 평균 미세먼지 농도".to_string(),
            }
            YearButtons { selected: year }
            ChartContainer { id: CHART_ID.to_string(), min_height: 480 }
            DownloadButton {
                container_id: CHART_ID.to_string(),
                filename: "korea-year-pm10map.png".to_string(),
            }
        }
    }
}
