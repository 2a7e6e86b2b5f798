//! Nationwide mean-temperature choropleth.

use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{ChartContainer, DownloadButton, PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "temp-map-chart";

#[component]
pub fn TempMapPanel(id: String) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = state.dataset.read();
        let provinces = state.provinces.read();
        if rows.is_empty() || provinces.is_empty() {
            return;
        }
        let means = shape::province_mean(&rows, |r| r.temperature);
        if means.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let geojson = shape::province_choropleth(&provinces, &means);
        let config = serde_json::json!({
            "title": "평균기온",
            "unit": "°C",
            "scheme": "reds",
        });
        js_bridge::render_choropleth_map(CHART_ID, &geojson.to_string(), &config.to_string());
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "전국 평균기온".to_string(),
                subtitle: "시·도별 평균기온".to_string(),
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 480 }
            DownloadButton {
                container_id: CHART_ID.to_string(),
                filename: "korea-tempmap.png".to_string(),
            }
        }
    }
}
