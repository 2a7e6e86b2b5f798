//! Power-plant bubble map over district boundaries.

use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{ChartContainer, PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "power-map-chart";

/// The plant census in the dataset covers 2021.
const PLANT_YEAR: i32 = 2021;

#[component]
pub fn PowerMapPanel(id: String) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = state.dataset.read();
        let districts = state.districts.read();
        if rows.is_empty() || districts.is_empty() {
            return;
        }
        let plants = shape::plant_districts(&rows, PLANT_YEAR);
        let geojson = shape::power_plant_features(&districts, &plants);
        js_bridge::render_power_map(CHART_ID, &geojson.to_string(), "{}");
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "발전소 위치".to_string(),
                subtitle: "발전소가 있는 시·군·구".to_string(),
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 480 }
        }
    }
}
