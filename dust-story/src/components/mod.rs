//! One component per story panel.

mod car_map;
mod gradient_line;
mod grouped_bar;
mod hero;
mod hier_bar;
mod month_race;
mod pm10_map;
mod power_map;
mod rain_map;
mod seasonal_pm10_map;
mod seoul_heatmap;
mod temp_map;
mod wind_map;

pub use car_map::CarMapPanel;
pub use gradient_line::GradientLinePanel;
pub use grouped_bar::GroupedBarPanel;
pub use hero::{HeroPanel, IntroPanel};
pub use hier_bar::HierarchicalBarPanel;
pub use month_race::MonthRacePanel;
pub use pm10_map::Pm10MapPanel;
pub use power_map::PowerMapPanel;
pub use rain_map::RainMapPanel;
pub use seasonal_pm10_map::SeasonalPm10MapPanel;
pub use seoul_heatmap::SeoulHeatmapPanel;
pub use temp_map::TempMapPanel;
pub use wind_map::WindMapPanel;
