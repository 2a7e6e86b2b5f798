//! Plant vs non-plant monthly PM10 bar race with a scrub slider.

use dioxus::prelude::*;
use kfd_agg::shape;
use kfd_chart_ui::components::{ChartContainer, PanelHeading, SnapPanel};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;

const CHART_ID: &str = "month-race-chart";

#[component]
pub fn MonthRacePanel(id: String) -> Element {
    let state = use_context::<AppState>();
    let month_index = use_signal(|| 0usize);

    let months = use_memo(move || shape::plant_month_rows(&state.dataset.read(), |r| r.pm10));
    let slider_max = months().len().saturating_sub(1);
    let slider_value = month_index();

    // Scrubbing re-renders up to the selected month; no animation
    use_effect(move || {
        let rows = months();
        if rows.is_empty() {
            return;
        }
        let count = month_index() + 1;
        let data = serde_json::to_string(&rows).unwrap_or_default();
        let config = serde_json::json!({ "count": count, "animate": false });
        js_bridge::render_plant_bars(CHART_ID, &data, &config.to_string());
    });

    // Play: re-render everything with the sequential reveal transition
    let play = move |_| {
        let rows = months();
        if rows.is_empty() {
            return;
        }
        let mut index = month_index;
        index.set(rows.len() - 1);
        let data = serde_json::to_string(&rows).unwrap_or_default();
        let config = serde_json::json!({ "count": rows.len(), "animate": true });
        js_bridge::render_plant_bars(CHART_ID, &data, &config.to_string());
    };

    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "발전소 지역 vs 비발전소 지역".to_string(),
                subtitle: "월별 평균 PM10 비교".to_string(),
            }
            ChartContainer { id: CHART_ID.to_string(), min_height: 440 }
            div {
                style: "display: flex; justify-content: center; gap: 20px; margin-top: 10px; color: #fff;",
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    div { style: "width: 20px; height: 20px; background-color: #e15759;" }
                    span { "발전소 지역 평균" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    div { style: "width: 20px; height: 20px; background-color: #4e79a7;" }
                    span { "비발전소 지역 평균" }
                }
            }
            div {
                style: "display: flex; justify-content: center; gap: 10px; margin-top: 10px;",
                button {
                    onclick: play,
                    "▶ Play"
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{slider_max}",
                    value: "{slider_value}",
                    style: "width: 300px;",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<usize>() {
                            let mut index = month_index;
                            index.set(value);
                        }
                    },
                }
            }
        }
    }
}
