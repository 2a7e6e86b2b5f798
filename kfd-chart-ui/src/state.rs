//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Panel components retrieve it with
//! `use_context::<AppState>()`. The dataset and decoded geography are loaded
//! once at mount and shared read-only by every panel.

use dioxus::prelude::*;
use kfd_geo::{DistrictFeature, ProvinceFeature};
use kfd_obs::observation::DailyObservation;

/// Shared application state for the story page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Normalized observation rows (empty until loaded).
    pub dataset: Signal<Vec<DailyObservation>>,
    /// Province-level merged boundary features.
    pub provinces: Signal<Vec<ProvinceFeature>>,
    /// District-level boundary features (power-plant bubble map).
    pub districts: Signal<Vec<DistrictFeature>>,
    /// Whether the embedded data is still being decoded.
    pub loading: Signal<bool>,
    /// Error message if data decoding went wrong.
    pub error_msg: Signal<Option<String>>,
    /// Index of the currently visible panel.
    pub active_panel: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(Vec::new()),
            provinces: Signal::new(Vec::new()),
            districts: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            active_panel: Signal::new(0),
        }
    }
}
