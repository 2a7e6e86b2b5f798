//! Year → season → month drill-down bar chart over PM10 sums.

use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{ChartContainer, PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "hier-bar-chart";

#[component]
pub fn HierarchicalBarPanel(id: String) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = state.dataset.read();
        if rows.is_empty() {
            return;
        }
        let tree = shape::sum_tree("미세먼지 합계", &rows, |r| r.pm10);
        if tree.children.is_empty() {
            js_bridge::destroy_chart(CHART_ID);
            return;
        }
        let data = serde_json::to_string(&tree).unwrap_or_default();
        js_bridge::render_hierarchical_bar(CHART_ID, &data, "{}");
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "미세먼지 합계 드릴다운".to_string(),
                subtitle: "연도 → 계절 → 월 단위로 내려갑니다. 배경을 누르면 올라갑니다.".to_string(),
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 420 }
        }
    }
}
