//! Year filter buttons (전체/21년/22년/23년).

use dioxus::prelude::*;

/// The year choices offered on the nationwide maps. `None` = all years.
pub const YEAR_CHOICES: [(Option<i32>, &str); 4] = [
    (None, "전체"),
    (Some(2021), "21년"),
    (Some(2022), "22년"),
    (Some(2023), "23년"),
];

/// Label for a year choice, e.g. `Some(2021)` → "21년".
pub fn year_label(year: Option<i32>) -> &'static str {
    YEAR_CHOICES
        .iter()
        .find(|(choice, _)| *choice == year)
        .map(|(_, label)| *label)
        .unwrap_or("전체")
}

/// Button row bound to an optional-year signal.
#[component]
pub fn YearButtons(selected: Signal<Option<i32>>) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 1rem; text-align: center;",
            for (year, label) in YEAR_CHOICES {
                button {
                    style: if selected() == year {
                        "margin-right: 8px; padding: 6px 12px; border-radius: 6px; background: #333; color: #fff; border: none; cursor: pointer;"
                    } else {
                        "margin-right: 8px; padding: 6px 12px; border-radius: 6px; background: #eee; color: #000; border: none; cursor: pointer;"
                    },
                    onclick: move |_| selected.set(year),
                    "{label}"
                }
            }
        }
    }
}
