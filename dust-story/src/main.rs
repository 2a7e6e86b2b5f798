//! Fine Dust with Social Intelligence - scrollable data story.
//!
//! One Dioxus/WASM page of horizontally snapping panels, each hosting a D3
//! visualization of the Korean fine-dust dataset. The observation CSV and
//! the boundary topology are embedded at compile time (the topology
//! gzipped), decoded once on mount, and shared read-only by every panel
//! through `AppState` signals.
//!
//! Data flow:
//! 1. `build.rs` copies `preprocessed_data.csv` and gzips
//!    `korea-sigungu-topo.json` into `OUT_DIR`.
//! 2. `include_str!`/`include_bytes!` embed both into the WASM binary.
//! 3. On mount, rows are normalized and the topology decoded into
//!    province/district features.
//! 4. Each panel recomputes its aggregation and re-renders through the
//!    js_bridge whenever the dataset or its own filter signal changes.

mod components;

use components::{
    CarMapPanel, GradientLinePanel, GroupedBarPanel, HeroPanel, HierarchicalBarPanel, IntroPanel,
    MonthRacePanel, Pm10MapPanel, PowerMapPanel, RainMapPanel, SeasonalPm10MapPanel,
    SeoulHeatmapPanel, TempMapPanel, WindMapPanel,
};
use dioxus::prelude::*;
use flate2::read::GzDecoder;
use kfd_chart_ui::components::{DotNav, LoadingSpinner, ProgressBar};
use kfd_chart_ui::js_bridge;
use kfd_chart_ui::state::AppState;
use kfd_geo::KoreaTopology;
use kfd_obs::observation::DailyObservation;
use std::io::Read;

/// Daily observations for all districts.
const OBSERVATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/preprocessed_data.csv"));
/// Gzipped administrative-boundary topology.
const TOPOLOGY_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/korea-sigungu-topo.json.gz"));

/// DOM id of the horizontally snapping row.
const ROW_ID: &str = "story-row";

/// Panel ids, in story order. Also the `?cont=` deep-link values.
const PANEL_IDS: [&str; 14] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen",
];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dust-story-root"))
        .launch(App);
}

fn decode_topology(bytes: &[u8]) -> anyhow::Result<KoreaTopology> {
    let mut json = String::new();
    GzDecoder::new(bytes).read_to_string(&mut json)?;
    KoreaTopology::from_json(&json)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Decode embedded data once on mount
    use_effect(move || {
        js_bridge::init_charts();

        match DailyObservation::csv_to_observations(OBSERVATIONS_CSV) {
            Ok(observations) => {
                if observations.is_empty() {
                    log::warn!("observation CSV produced no rows");
                }
                state.dataset.set(observations);
            }
            Err(e) => {
                log::error!("Failed to load observations: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load observations: {}", e)));
                state.loading.set(false);
                return;
            }
        }

        match decode_topology(TOPOLOGY_GZ) {
            Ok(topology) => {
                state.provinces.set(topology.provinces());
                state.districts.set(topology.districts);
            }
            Err(e) => {
                log::error!("Failed to decode topology: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to decode topology: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Navigation listeners + query-string jump, once the row exists
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        js_bridge::install_horizontal_wheel(ROW_ID);
        js_bridge::install_arrow_keys(ROW_ID);
        if let Some(target) = js_bridge::query_panel_param() {
            if let Some(index) = PANEL_IDS.iter().position(|id| *id == target) {
                js_bridge::scroll_to_panel(&target, false);
                state.active_panel.set(index);
            }
        }
    });

    use_drop(move || {
        js_bridge::remove_horizontal_wheel(ROW_ID);
        js_bridge::remove_arrow_keys();
    });

    // Track the active panel from the snap row's scroll position
    let on_scroll = move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(row) = document.get_element_by_id(ROW_ID) else {
            return;
        };
        let width = row.client_width().max(1) as f64;
        let index = ((row.scroll_left() as f64 / width) + 0.5).floor() as usize;
        let index = index.min(PANEL_IDS.len() - 1);
        if index != (state.active_panel)() {
            state.active_panel.set(index);
        }
    };

    // Dot click: smooth-scroll and mirror the panel into the query string
    let goto = move |index: usize| {
        let panel_id = PANEL_IDS[index];
        js_bridge::scroll_to_panel(panel_id, true);
        js_bridge::sync_query_param(panel_id);
        state.active_panel.set(index);
    };

    rsx! {
        div {
            style: "font-family: 'Inter', 'Noto Sans KR', sans-serif; background: #0d0f22; color: #fff; overflow: hidden;",

            ProgressBar {
                active: (state.active_panel)(),
                count: PANEL_IDS.len(),
            }

            if let Some(err) = (state.error_msg)() {
                div {
                    style: "padding: 4rem; text-align: center;",
                    "{err}"
                }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                main {
                    id: "{ROW_ID}",
                    style: "height: 100vh; display: flex; flex-wrap: nowrap; overflow-x: auto; \
                            overflow-y: hidden; scroll-snap-type: x mandatory; scroll-behavior: smooth;",
                    onscroll: on_scroll,

                    HeroPanel { id: PANEL_IDS[0].to_string() }
                    IntroPanel { id: PANEL_IDS[1].to_string() }
                    Pm10MapPanel { id: PANEL_IDS[2].to_string() }
                    TempMapPanel { id: PANEL_IDS[3].to_string() }
                    RainMapPanel { id: PANEL_IDS[4].to_string() }
                    CarMapPanel { id: PANEL_IDS[5].to_string() }
                    PowerMapPanel { id: PANEL_IDS[6].to_string() }
                    SeasonalPm10MapPanel { id: PANEL_IDS[7].to_string() }
                    WindMapPanel { id: PANEL_IDS[8].to_string() }
                    GradientLinePanel { id: PANEL_IDS[9].to_string() }
                    HierarchicalBarPanel { id: PANEL_IDS[10].to_string() }
                    MonthRacePanel { id: PANEL_IDS[11].to_string() }
                    GroupedBarPanel { id: PANEL_IDS[12].to_string() }
                    SeoulHeatmapPanel { id: PANEL_IDS[13].to_string() }
                }

                DotNav {
                    count: PANEL_IDS.len(),
                    active: (state.active_panel)(),
                    on_select: goto,
                }
            }
        }
    }
}
