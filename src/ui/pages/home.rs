use dioxus::prelude::*;

use crate::{
    domain::ServiceType,
    ui::{
        components::{
            icons::{BundleIcon, MasterIcon, MicIcon, MixIcon},
            service_card::ServiceCard,
        },
        pages::estimator::EstimatorSection,
        shell::{ABOUT_ANCHOR, SERVICES_ANCHOR},
    },
    util::site::CONTACT_EMAIL,
};

#[component]
pub fn HomePage() -> Element {
    rsx! {
        IntroSection {}
        ServicesSection {}
        EstimatorSection {}
        AboutSection {}
    }
}

#[component]
fn IntroSection() -> Element {
    rsx! {
        section { class: "intro",
            p {
                "I "
                span { class: "highlight", "built these tools" }
                " for myself because standard studios felt soulless. Now I'm sharing them."
            }
        }
    }
}

#[component]
fn ServicesSection() -> Element {
    rsx! {
        section { id: SERVICES_ANCHOR, class: "services",
            h2 { class: "font-marker section-title", "THE GOODS" }
            div { class: "service-grid",
                ServiceCard {
                    service: ServiceType::Mix,
                    blurb: "The glue. The vibe.",
                    icon: rsx! { MixIcon {} },
                }
                ServiceCard {
                    service: ServiceType::Master,
                    blurb: "Loud. Clear. Ready.",
                    icon: rsx! { MasterIcon {} },
                }
                ServiceCard {
                    service: ServiceType::Bundle,
                    blurb: "The full package.",
                    icon: rsx! { BundleIcon {} },
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    let email_display = CONTACT_EMAIL.to_uppercase();

    rsx! {
        section { id: ABOUT_ANCHOR, class: "about",
            div { class: "about-row",
                div { class: "polaroid tilt-left about-portrait",
                    div { class: "tape" }
                    div { class: "polaroid-frame", MicIcon {} }
                    h4 { class: "font-marker polaroid-title", "THE CRAFTSMAN" }
                }
                div { class: "about-copy",
                    h2 { class: "font-marker section-title", "THE WHY" }
                    p {
                        "We exist to serve "
                        span { class: "highlight", "unique talents" }
                        " that feel the need to create something special. Music business is human business. "
                        span { class: "italic", "Return on emotion" }
                        " is the metric."
                    }
                    p {
                        "We help you go from "
                        span { class: "strike", "confused/frustrated" }
                        " to "
                        strong { "unique and valuable" }
                        "."
                    }
                    div { class: "promise-box",
                        h4 { class: "font-marker", "OUR PROMISE" }
                        p { "The mentality is 80% of the outcome. I treat every track like it's my own record." }
                    }
                    div { class: "about-contact",
                        span { "Hit me up:" }
                        a {
                            class: "font-marker",
                            href: "mailto:{CONTACT_EMAIL}",
                            "{email_display}"
                        }
                    }
                }
            }
        }
    }
}
