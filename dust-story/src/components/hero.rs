//! The title panel and the intro panel.

use dioxus::prelude::*;
use kfd_chart_ui::components::{PanelHeading, SnapPanel};

#[component]
pub fn HeroPanel(id: String) -> Element {
    rsx! {
        SnapPanel {
            id,
            backdrop: false,
            div {
                style: "text-align: center;",
                h1 {
                    style: "font: 800 clamp(2rem, 6vw, 3.5rem)/1.1 Inter, sans-serif; color: #fff; margin: 0;",
                    "Fine Dust with "
                    span { style: "color: #34d399;", "Social Intelligence" }
                }
                p {
                    style: "color: #e4e4e4; font-size: clamp(1rem, 2.5vw, 1.375rem); margin-top: 0.75rem;",
                    "Welcome to our Data Analytics!"
                }
            }
        }
    }
}

#[component]
pub fn IntroPanel(id: String) -> Element {
    rsx! {
        SnapPanel {
            id,
            PanelHeading {
                title: "Intro".to_string(),
                subtitle: "국내 미세먼지 데이터를 분석·시각화한 결과를 공유합니다.".to_string(),
            }
        }
    }
}
