//! The "Project Worksheet": every Selection field gets a control here, and
//! each change mutates the shared Selection signal so the estimate re-runs.

use dioxus::prelude::*;

use crate::{
    domain::{
        base_price, tuning_fee, EditingLevel, Selection, ServiceType, Tier, TuningTracks,
        STEM_DELIVERY_FEE, TUNING_PER_TRACK,
    },
    ui::{components::estimate_note::EstimateNote, shell::ESTIMATOR_ANCHOR},
};

#[component]
pub fn EstimatorSection() -> Element {
    let mut selection = use_context::<Signal<Selection>>();
    let current = selection();

    rsx! {
        section { id: ESTIMATOR_ANCHOR, class: "estimator",
            div { class: "worksheet-shadow" }
            div { class: "worksheet",
                PaperClip {}
                h2 { class: "font-marker worksheet-title", "PROJECT WORKSHEET" }

                div { class: "worksheet-grid",
                    div { class: "worksheet-form",
                        div { class: "question",
                            h4 { "1. What service?" }
                            div { class: "choice-row",
                                for service in ServiceType::ALL {
                                    ServiceButton {
                                        service,
                                        active: current.service == service,
                                        onclick: move |_| selection.with_mut(|s| s.service = service),
                                    }
                                }
                            }
                        }

                        div { class: "question",
                            h4 { "2. Project size?" }
                            div { class: "tier-grid",
                                for tier in Tier::ALL {
                                    TierButton {
                                        tier,
                                        // Switching services re-prices the tiers; it never resets them.
                                        price: base_price(tier, current.service),
                                        active: current.tier == tier,
                                        onclick: move |_| selection.with_mut(|s| s.tier = tier),
                                    }
                                }
                            }
                        }

                        div { class: "question",
                            h4 { "3. Extras" }
                            div { class: "extras",
                                TuningPanel { selection: selection, current: current }
                                EditingPanel { selection: selection, current: current }

                                div { class: "toggle-grid",
                                    ToggleCard {
                                        title: "Stem Delivery",
                                        subtitle: "Grouped stems",
                                        price_note: format!("+${STEM_DELIVERY_FEE}"),
                                        checked: current.stem_delivery,
                                        onclick: move |_| selection.with_mut(|s| s.stem_delivery = !s.stem_delivery),
                                    }
                                    ToggleCard {
                                        title: "48hr Rush",
                                        subtitle: "Priority delivery",
                                        price_note: "+50%".to_string(),
                                        checked: current.rush_delivery,
                                        onclick: move |_| selection.with_mut(|s| s.rush_delivery = !s.rush_delivery),
                                    }
                                }

                                div { class: "custom-quote",
                                    p { "Need custom quote:" }
                                    div { class: "custom-quote-row",
                                        CustomQuoteCheck {
                                            label: "Additional Recording",
                                            checked: current.additional_recording,
                                            onclick: move |_| selection.with_mut(|s| {
                                                s.additional_recording = !s.additional_recording
                                            }),
                                        }
                                        CustomQuoteCheck {
                                            label: "Additional Production",
                                            checked: current.additional_production,
                                            onclick: move |_| selection.with_mut(|s| {
                                                s.additional_production = !s.additional_production
                                            }),
                                        }
                                    }
                                }
                            }
                        }
                    }

                    EstimateNote {}
                }
            }
        }
    }
}

#[component]
fn ServiceButton(service: ServiceType, active: bool, onclick: EventHandler<()>) -> Element {
    let class = if active {
        "pick-btn pick-btn-active"
    } else {
        "pick-btn"
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{service.label()}"
            if service == ServiceType::Bundle {
                span { class: "deal-star", "★" }
            }
        }
    }
}

#[component]
fn TierButton(tier: Tier, price: u32, active: bool, onclick: EventHandler<()>) -> Element {
    let class = if active {
        "tier-btn tier-btn-active"
    } else {
        "tier-btn"
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            div { class: "tier-label", "{tier.label()}" }
            div { class: "tier-desc", "{tier.description()}" }
            div { class: "tier-price", "${price}" }
        }
    }
}

#[component]
fn TuningPanel(selection: Signal<Selection>, current: Selection) -> Element {
    let mut selection = selection;
    let panel_class = if current.vocal_tuning {
        "extra-panel extra-panel-active"
    } else {
        "extra-panel"
    };
    let tuning_total = tuning_fee(&current);

    rsx! {
        div { class: "{panel_class}",
            div { class: "extra-row",
                div {
                    class: "extra-check",
                    onclick: move |_| selection.with_mut(|s| s.vocal_tuning = !s.vocal_tuning),
                    CheckBox { checked: current.vocal_tuning }
                    span { class: "extra-name", "Vocal Tuning" }
                }
                span { class: "extra-price", "${TUNING_PER_TRACK}/track" }
            }
            if current.vocal_tuning {
                div { class: "track-row",
                    span { "Tracks:" }
                    for tracks in TuningTracks::all() {
                        TrackButton {
                            tracks,
                            active: current.tuning_tracks == tracks,
                            onclick: move |_| selection.with_mut(|s| s.tuning_tracks = tracks),
                        }
                    }
                    span { class: "track-total", "+${tuning_total}" }
                }
            }
        }
    }
}

#[component]
fn TrackButton(tracks: TuningTracks, active: bool, onclick: EventHandler<()>) -> Element {
    let class = if active {
        "track-btn track-btn-active"
    } else {
        "track-btn"
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{tracks}"
        }
    }
}

#[component]
fn EditingPanel(selection: Signal<Selection>, current: Selection) -> Element {
    let mut selection = selection;

    rsx! {
        div { class: "extra-panel",
            div { class: "extra-row",
                span { class: "extra-name", "Editing needed?" }
                span { class: "extra-price", "Non-linear editing complexity" }
            }
            div { class: "level-grid",
                for level in EditingLevel::ALL {
                    LevelButton {
                        level,
                        active: current.editing == level,
                        onclick: move |_| selection.with_mut(|s| s.editing = level),
                    }
                }
            }
            p { class: "level-desc", "{current.editing.description()}" }
        }
    }
}

#[component]
fn LevelButton(level: EditingLevel, active: bool, onclick: EventHandler<()>) -> Element {
    let class = if active {
        "level-btn level-btn-active"
    } else {
        "level-btn"
    };
    let price = if level.surcharge() > 0 {
        format!("+${}", level.surcharge())
    } else {
        "—".to_string()
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            div { class: "level-label", "{level.label()}" }
            div { class: "level-price", "{price}" }
        }
    }
}

#[component]
fn ToggleCard(
    title: &'static str,
    subtitle: &'static str,
    price_note: String,
    checked: bool,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        label { class: "toggle-card",
            div {
                class: "extra-check",
                onclick: move |_| onclick.call(()),
                CheckBox { checked }
                div {
                    div { class: "extra-name", "{title}" }
                    div { class: "extra-sub", "{subtitle}" }
                }
            }
            span { class: "extra-price", "{price_note}" }
        }
    }
}

#[component]
fn CustomQuoteCheck(label: &'static str, checked: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        label {
            class: "custom-quote-check",
            onclick: move |_| onclick.call(()),
            CheckBox { checked }
            span { "{label}" }
        }
    }
}

#[component]
fn CheckBox(checked: bool) -> Element {
    let class = if checked { "check check-on" } else { "check" };
    rsx! {
        div { class: "{class}",
            if checked {
                "✓"
            }
        }
    }
}

#[component]
fn PaperClip() -> Element {
    rsx! {
        div { class: "paper-clip",
            svg {
                view_box: "0 0 50 100",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                path { d: "M25 0 V 70 A 15 15 0 0 1 10 55 V 15" }
                path { d: "M25 0 V 80 A 10 10 0 0 0 45 80 V 10" }
            }
        }
    }
}
