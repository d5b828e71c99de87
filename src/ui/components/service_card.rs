use dioxus::prelude::*;

use crate::domain::{price_range, ServiceType};

/// Polaroid-style card for one service on "The Goods" board. The price range
/// spans the cheapest and priciest tier for that service.
#[component]
pub fn ServiceCard(service: ServiceType, blurb: &'static str, icon: Element) -> Element {
    let (low, high) = price_range(service);
    let tilt = match service {
        ServiceType::Mix | ServiceType::Bundle => "polaroid tilt-right",
        ServiceType::Master => "polaroid tilt-left",
    };

    rsx! {
        div { class: "{tilt}",
            div { class: "tape" }
            if service == ServiceType::Bundle {
                div { class: "deal-badge font-marker", "DEAL!" }
            }
            div { class: "polaroid-frame", {icon} }
            h3 { class: "font-marker polaroid-title", "{service.label()}" }
            p { class: "polaroid-blurb", "{blurb}" }
            p { class: "polaroid-price", "${low} – ${high}" }
        }
    }
}
