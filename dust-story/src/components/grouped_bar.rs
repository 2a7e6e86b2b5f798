//! Year × season grouped bars colored by PM10 concentration band.

use dioxus::prelude::*;
use kfd_agg::aggregate::{Aggregation, SeasonGrid};
use kfd_agg::bucket;
use kfd_chart_ui::components::{ChartContainer, DownloadButton, PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "grouped-bar-chart";

#[component]
pub fn GroupedBarPanel(id: String) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = state.dataset.read();
        if rows.is_empty() {
            return;
        }
        let grid = SeasonGrid::build(
            &rows,
            bucket::year_season_by_month,
            |r| r.pm10,
            Aggregation::Mean,
        );
        if grid.years.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let data = serde_json::to_string(&grid.flatten()).unwrap_or_default();
        js_bridge::render_grouped_bar(CHART_ID, &data, "{}");
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "연도·계절별 PM10".to_string(),
                subtitle: "농도 구간별 색상 구분".to_string(),
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 460 }
            DownloadButton {
                container_id: CHART_ID.to_string(),
                filename: "grouped-season-pm10.png".to_string(),
            }
        }
    }
}
