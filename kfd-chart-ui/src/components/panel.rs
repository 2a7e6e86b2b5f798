//! Snap panel chrome shared by every visualization.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SnapPanelProps {
    /// DOM id, also used as the `?cont=` deep-link value.
    pub id: String,
    /// Draw the dark translucent backdrop card behind the content.
    #[props(default = true)]
    pub backdrop: bool,
    pub children: Element,
}

/// One full-viewport, horizontally snapped section hosting a visualization.
#[component]
pub fn SnapPanel(props: SnapPanelProps) -> Element {
    rsx! {
        section {
            id: "{props.id}",
            style: "flex: 0 0 100vw; height: 100vh; position: relative; scroll-snap-align: start; \
                    display: flex; flex-direction: column; justify-content: center; \
                    padding: 0 1.5rem; overflow: hidden;",
            if props.backdrop {
                div {
                    style: "position: absolute; inset: 0; margin: auto; width: 88%; height: 85%; \
                            background: rgba(13, 15, 34, 0.75); border-radius: 2rem; \
                            box-shadow: 0 4px 30px rgba(0,0,0,0.2); z-index: 0;",
                }
            }
            div {
                style: "position: relative; z-index: 1; width: 100%; max-width: 1280px; \
                        max-height: 85vh; margin: 0 auto; display: flex; flex-direction: column; \
                        align-items: center; justify-content: center;",
                {props.children}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct PanelHeadingProps {
    pub title: String,
    #[props(default)]
    pub subtitle: String,
}

/// Headline + optional subtitle shown above a panel's chart.
#[component]
pub fn PanelHeading(props: PanelHeadingProps) -> Element {
    rsx! {
        h2 {
            style: "font: 600 1.75rem/1.3 Inter, sans-serif; color: #fff; text-align: center; margin-bottom: 0.3rem;",
            "{props.title}"
        }
        if !props.subtitle.is_empty() {
            p {
                style: "text-align: center; color: #fff; margin-bottom: 1rem;",
                "{props.subtitle}"
            }
        }
    }
}
