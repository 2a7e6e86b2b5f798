//! Top progress bar reflecting how far through the story the reader is.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    pub active: usize,
    pub count: usize,
}

/// Fixed bar at the top of the page, `active / (count - 1)` wide.
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let ratio = if props.count > 1 {
        props.active as f64 / (props.count - 1) as f64
    } else {
        0.0
    };
    let width = ratio * 100.0;
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; height: 4px; background: #34d399; \
                    z-index: 12; width: {width}%;",
        }
    }
}
