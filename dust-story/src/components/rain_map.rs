//! Seasonal rainfall choropleth.

use chrono::Datelike;
use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{
    ChartContainer, DownloadButton, PanelHeading, SeasonButtons, SnapPanel,
};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;
use kfd_obs::season::Season;

const CHART_ID: &str = "rain-map-chart";

#[component]
pub fn RainMapPanel(id: String) -> Element {
    let state = use_context::<AppState>();
    let season = use_signal(|| Season::Spring);

    use_effect(move || {
        let rows = state.dataset.read();
        let provinces = state.provinces.read();
        if rows.is_empty() || provinces.is_empty() {
            return;
        }
        let selected = season();
        let filtered: Vec<_> = rows
            .iter()
            .filter(|r| Season::from_month(r.date.month()) == selected)
            .cloned()
            .collect();
        let means = shape::province_mean(&filtered, |r| r.rainfall);
        if means.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let geojson = shape::province_choropleth(&provinces, &means);
        let config = serde_json::json!({
            "title": "강수량",
            "unit": "mm",
            "scheme": "blues",
            "badge": selected.label(),
        });
        js_bridge::render_choropleth_map(CHART_ID, &geojson.to_string(), &config.to_string());
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "계절별 강수량".to_string(),
                subtitle: "시·도별 평균 일강수량".to_string(),
            }
            SeasonButtons { selected: season }
            ChartContainer { id: CHART_ID.to_string(), min_height: 480 }
            DownloadButton {
                container_id: CHART_ID.to_string(),
                filename: "korea-season-rainmap.png".to_string(),
            }
        }
    }
}
