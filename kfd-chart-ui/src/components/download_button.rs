//! Download-as-image button.

use crate::js_bridge;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DownloadButtonProps {
    /// Container whose SVG is rasterized.
    pub container_id: String,
    /// Target PNG filename.
    pub filename: String,
    #[props(default = "차트 다운로드".to_string())]
    pub label: String,
}

/// Serializes the panel's SVG markup and downloads it as a PNG.
#[component]
pub fn DownloadButton(props: DownloadButtonProps) -> Element {
    let container_id = props.container_id.clone();
    let filename = props.filename.clone();
    rsx! {
        div {
            style: "text-align: center; margin-top: 1rem;",
            button {
                style: "padding: 6px 12px; border-radius: 6px; background: #007bff; color: #fff; border: none; cursor: pointer;",
                onclick: move |_| {
                    js_bridge::download_panel_png(&container_id, &filename);
                },
                "{props.label}"
            }
        }
    }
}
