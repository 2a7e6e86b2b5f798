//! Dot navigator fixed at the right edge of the page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DotNavProps {
    /// Number of panels.
    pub count: usize,
    /// Index of the active panel.
    pub active: usize,
    /// Called with the target index when a dot is clicked.
    pub on_select: EventHandler<usize>,
}

/// One dot per panel; the active dot is highlighted.
#[component]
pub fn DotNav(props: DotNavProps) -> Element {
    let on_select = props.on_select;
    let total = props.count;
    rsx! {
        ul {
            style: "position: fixed; right: 2rem; top: 50%; transform: translateY(-50%); \
                    display: flex; flex-direction: column; gap: 0.7rem; list-style: none; \
                    margin: 0; padding: 0; z-index: 10;",
            for position in 1..=total {
                li {
                    button {
                        aria_label: "{position} / {total} 화면으로 이동",
                        style: if position - 1 == props.active {
                            "width: 12px; height: 12px; border-radius: 50%; background: #34d399; border: none; cursor: pointer;"
                        } else {
                            "width: 12px; height: 12px; border-radius: 50%; background: #c5c5c5; border: none; cursor: pointer;"
                        },
                        onclick: move |_| on_select.call(position - 1),
                    }
                }
            }
        }
    }
}
