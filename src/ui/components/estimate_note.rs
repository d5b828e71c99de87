use dioxus::prelude::*;

use crate::domain::{estimate, tuning_fee, EditingLevel, Selection, STEM_DELIVERY_FEE};

/// The sticky-note receipt next to the worksheet. Re-runs the estimate on
/// every render so it always reflects the current selection.
#[component]
pub fn EstimateNote() -> Element {
    let selection = use_context::<Signal<Selection>>();
    let mut modal_open = use_context::<Signal<bool>>();
    let current = selection();
    let quote = estimate(&current);
    let tuning_total = tuning_fee(&current);

    rsx! {
        div { class: "estimate-panel",
            div { class: "sticky-note estimate-note",
                div { class: "tape" }
                div { class: "estimate-head",
                    h3 { class: "font-marker", "ESTIMATE" }
                    p { class: "estimate-stamp", "SONIDO IGNACIO // 2025" }
                }
                div { class: "estimate-lines",
                    div { class: "estimate-line",
                        span { "{current.service.label()}" }
                        span { "${quote.base}" }
                    }
                    div { class: "estimate-tier", "{current.tier.label()}" }
                    if current.vocal_tuning {
                        div { class: "estimate-line",
                            span { "Tuning ×{current.tuning_tracks}" }
                            span { "+${tuning_total}" }
                        }
                    }
                    if current.editing != EditingLevel::None {
                        div { class: "estimate-line",
                            span { "Editing" }
                            span { "+${current.editing.surcharge()}" }
                        }
                    }
                    if current.stem_delivery {
                        div { class: "estimate-line",
                            span { "Stems" }
                            span { "+${STEM_DELIVERY_FEE}" }
                        }
                    }
                    if current.rush_delivery {
                        div { class: "estimate-line estimate-rush",
                            span { "48hr Rush" }
                            span { "+${quote.rush_fee}" }
                        }
                    }
                }
                if quote.needs_custom_quote {
                    p { class: "estimate-custom", "+ items need custom quote" }
                }
                div { class: "estimate-total",
                    span { "TOTAL:" }
                    span { class: "font-marker estimate-total-value", "${quote.total}" }
                }
                div { class: "estimate-timeline", "⏱ {quote.timeline}" }
                button {
                    class: "cta-btn font-marker",
                    onclick: move |_| modal_open.set(true),
                    "LET'S WORK"
                }
                p { class: "estimate-footnote", "2 revisions included" }
            }
        }
    }
}
