//! Seoul Jung-gu panel: year × season heatmap next to a year/season
//! sunburst. Both share one color domain and both use the day-precise
//! season calendar.

use dioxus::prelude::*;
use kfd_agg::aggregate::{Aggregation, SeasonGrid};
use kfd_agg::{bucket, shape};
use kfd_chart_ui::components::{PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const HEATMAP_ID: &str = "seoul-heatmap-chart";
const SUNBURST_ID: &str = "seoul-sunburst-chart";

/// The district this panel zooms into.
const SEOUL_JUNG_GU: &str = "서울 중구";

#[component]
pub fn SeoulHeatmapPanel(id: String) -> Element {
    let state = use_context::<AppState>();

    use_effect(move || {
        let rows = state.dataset.read();
        if rows.is_empty() {
            return;
        }
        let seoul: Vec<_> = rows
            .iter()
            .filter(|r| r.region == SEOUL_JUNG_GU)
            .cloned()
            .collect();
        let grid = SeasonGrid::build(
            &seoul,
            bucket::year_season_precise,
            |r| r.pm10,
            Aggregation::Mean,
        );
        let Some((min, max)) = shape::color_domain(&grid) else {
            js_bridge::destroy_chart(HEATMAP_ID);
            js_bridge::destroy_chart(SUNBURST_ID);
            return;
        };

        let heatmap_data = serde_json::json!({
            "cells": grid.flatten(),
            "min": min,
            "max": max,
        });
        js_bridge::render_season_heatmap(HEATMAP_ID, &heatmap_data.to_string(), "{}");

        let tree = shape::mean_tree(SEOUL_JUNG_GU, &seoul, |r| r.pm10);
        let sunburst_data = serde_json::json!({
            "tree": tree,
            "min": min,
            "max": max,
        });
        js_bridge::render_sunburst(SUNBURST_ID, &sunburst_data.to_string(), "{}");
    });

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "서울 중구 PM10".to_string(),
                subtitle: "연도·계절 히트맵과 선버스트".to_string(),
            }
            div {
                style: "display: flex; gap: 2vw; flex-wrap: wrap; justify-content: center; width: 100%;",
                div {
                    style: "flex: 1 1 0; min-width: 320px; max-width: 620px;",
                    div { id: "{HEATMAP_ID}", style: "width: 100%;" }
                }
                div {
                    style: "flex: 1 1 0; min-width: 320px; max-width: 620px;",
                    div { id: "{SUNBURST_ID}", style: "width: 100%;" }
                }
            }
        }
    }
}
