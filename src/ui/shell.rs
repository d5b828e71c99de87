use dioxus::prelude::*;

use crate::util::site::APP_TAGLINE;

/// Scroll anchors for the sticky-note navigation.
pub const SERVICES_ANCHOR: &str = "menu";
pub const ESTIMATOR_ANCHOR: &str = "calculator";
pub const ABOUT_ANCHOR: &str = "about";

/// The notebook frame around the page: spiral binding, ruled paper, sticky
/// nav, masthead, and the coffee stain in the corner.
#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "page",
            main { class: "notebook paper-bg sketch-border",
                div { class: "spiral",
                    for _ in 0..18 {
                        div { class: "spiral-ring" }
                    }
                }
                div { class: "content",
                    StickyNav {}
                    header { class: "masthead",
                        h1 { class: "font-marker masthead-title", "SONIDO IGNACIO" }
                        div { class: "masthead-sub",
                            span { "est. 2025" }
                            span { "·" }
                            span { "{APP_TAGLINE}" }
                        }
                    }
                    {children}
                }
            }
            div { class: "coffee-stain" }
        }
    }
}

#[component]
fn StickyNav() -> Element {
    rsx! {
        div { class: "sticky-nav",
            div { class: "sticky-note nav-note",
                div { class: "tape" }
                ul { class: "font-marker",
                    NavItem { anchor: SERVICES_ANCHOR, label: "→ The Goods" }
                    NavItem { anchor: ESTIMATOR_ANCHOR, label: "◈ Estimator" }
                    NavItem { anchor: ABOUT_ANCHOR, label: "● The Why" }
                }
            }
        }
    }
}

#[component]
fn NavItem(anchor: &'static str, label: &'static str) -> Element {
    rsx! {
        li {
            onclick: move |_| scroll_to(anchor),
            "{label}"
        }
    }
}

/// Smooth-scrolls the page to a section anchor.
fn scroll_to(id: &str) {
    let js =
        format!("document.getElementById('{id}')?.scrollIntoView({{ behavior: 'smooth' }});");
    let _ = document::eval(&js);
}
