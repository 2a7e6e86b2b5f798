//! Daily nationwide PM10 mean as a gradient-encoded line.

use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{ChartContainer, DownloadButton, PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "gradient-line-chart";

#[component]
pub fn GradientLinePanel(id: String) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = state.dataset.read();
        if rows.is_empty() {
            return;
        }
        let series = shape::daily_mean_series(&rows, |r| r.pm10);
        if series.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let data = serde_json::to_string(&series).unwrap_or_default();
        js_bridge::render_gradient_line(CHART_ID, &data, "{}");
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "일별 PM10 추이".to_string(),
                subtitle: "전국 일평균 미세먼지 농도".to_string(),
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 360 }
            DownloadButton {
                container_id: CHART_ID.to_string(),
                filename: "pm10-line.png".to_string(),
            }
        }
    }
}
