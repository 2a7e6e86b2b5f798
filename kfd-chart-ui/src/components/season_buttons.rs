//! Season filter buttons (봄/여름/가을/겨울).

use dioxus::prelude::*;
use kfd_obs::season::Season;

/// Button row bound to a season signal. Each panel with a season filter owns
/// its own signal, so filters never leak across panels.
#[component]
pub fn SeasonButtons(selected: Signal<Season>) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 1rem; text-align: center;",
            for season in Season::ALL {
                button {
                    style: if selected() == season {
                        "margin-right: 8px; padding: 6px 12px; border-radius: 6px; background: #333; color: #fff; border: none; cursor: pointer;"
                    } else {
                        "margin-right: 8px; padding: 6px 12px; border-radius: 6px; background: #eee; color: #000; border: none; cursor: pointer;"
                    },
                    onclick: move |_| selected.set(season),
                    "{season.label()}"
                }
            }
        }
    }
}
