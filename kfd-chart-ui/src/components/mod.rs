//! Reusable Dioxus RSX components for the story panels.

mod chart_container;
mod dot_nav;
mod download_button;
mod error_display;
mod loading_spinner;
mod panel;
mod progress_bar;
mod season_buttons;
mod year_buttons;

pub use chart_container::ChartContainer;
pub use dot_nav::DotNav;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use panel::{PanelHeading, SnapPanel};
pub use progress_bar::ProgressBar;
pub use season_buttons::SeasonButtons;
pub use year_buttons::{year_label, YearButtons, YEAR_CHOICES};
