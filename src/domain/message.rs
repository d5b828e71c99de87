//! Outbound quote-request message and the WhatsApp deep link it rides on.
//!
//! Kept apart from the pricing engine so the engine can be tested without
//! touching any messaging concern. Nothing here feeds back into pricing.

use url::Url;

use super::entities::{ContactDetails, EditingLevel, Selection};
use super::pricing::{tuning_fee, Quote, STEM_DELIVERY_FEE};

const WHATSAPP_BASE: &str = "https://wa.me/573001234567";

/// Plain-text summary of the worksheet, formatted for WhatsApp (asterisks
/// render bold there). Empty contact fields show as an em dash.
pub fn format_quote_message(
    selection: &Selection,
    contact: &ContactDetails,
    quote: &Quote,
) -> String {
    let mut lines = vec![
        "*QUOTE REQUEST — SONIDO IGNACIO*".to_string(),
        String::new(),
        format!("Name: {}", placeholder(&contact.name)),
        format!("Email: {}", placeholder(&contact.email)),
        String::new(),
        "*PROJECT DETAILS*".to_string(),
        format!("Service: {}", selection.service.label()),
        format!(
            "Size: {} ({})",
            selection.tier.label(),
            selection.tier.description()
        ),
    ];

    if selection.vocal_tuning {
        lines.push(format!(
            "Vocal Tuning: {} track(s) (+${})",
            selection.tuning_tracks,
            tuning_fee(selection)
        ));
    }
    if selection.editing != EditingLevel::None {
        lines.push(format!(
            "Editing: {} (+${})",
            selection.editing.label(),
            selection.editing.surcharge()
        ));
    }
    if selection.stem_delivery {
        lines.push(format!("Stem Delivery: Yes (+${STEM_DELIVERY_FEE})"));
    }
    if selection.rush_delivery {
        lines.push(format!("48hr Rush: Yes (+${})", quote.rush_fee));
    }

    let custom_items = custom_quote_items(selection);
    if !custom_items.is_empty() {
        lines.push(String::new());
        lines.push("*NEEDS CUSTOM QUOTE:*".to_string());
        lines.push(custom_items.join(", "));
    }

    lines.push(String::new());
    lines.push(format!("*ESTIMATED TOTAL: ${} USD*", quote.total));
    lines.push(format!("Timeline: {}", quote.timeline));
    lines.push(String::new());
    lines.push(format!("Notes: {}", placeholder(&contact.notes)));

    lines.join("\n")
}

/// Items flagged for pricing outside the estimator.
pub fn custom_quote_items(selection: &Selection) -> Vec<&'static str> {
    let mut items = Vec::new();
    if selection.additional_recording {
        items.push("Additional Recording");
    }
    if selection.additional_production {
        items.push("Additional Production");
    }
    items
}

/// Deep link that opens a WhatsApp chat pre-filled with `message`.
pub fn whatsapp_url(message: &str) -> Url {
    let mut url = Url::parse(WHATSAPP_BASE)
        .unwrap_or_else(|err| panic!("invalid WhatsApp base URL: {err}"));
    url.query_pairs_mut().append_pair("text", message);
    url
}

fn placeholder(field: &str) -> &str {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        "—"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ServiceType, Tier, TuningTracks};
    use crate::domain::pricing::estimate;

    fn sample_selection() -> Selection {
        Selection {
            service: ServiceType::Mix,
            tier: Tier::Simple,
            vocal_tuning: true,
            tuning_tracks: TuningTracks::new(3),
            editing: EditingLevel::Light,
            rush_delivery: true,
            additional_recording: true,
            ..Selection::default()
        }
    }

    #[test]
    fn message_lists_every_selected_line() {
        let selection = sample_selection();
        let quote = estimate(&selection);
        let contact = ContactDetails {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            notes: "Indie pop EP".into(),
        };
        let message = format_quote_message(&selection, &contact, &quote);

        assert!(message.starts_with("*QUOTE REQUEST — SONIDO IGNACIO*"));
        assert!(message.contains("Name: Ana"));
        assert!(message.contains("Email: ana@example.com"));
        assert!(message.contains("Service: MIXING"));
        assert!(message.contains("Size: Inst + Acapella (2 stems)"));
        assert!(message.contains("Vocal Tuning: 3 track(s) (+$150)"));
        assert!(message.contains("Editing: Light (+$40)"));
        assert!(message.contains(&format!("48hr Rush: Yes (+${})", quote.rush_fee)));
        assert!(message.contains("*NEEDS CUSTOM QUOTE:*\nAdditional Recording"));
        assert!(message.contains(&format!("*ESTIMATED TOTAL: ${} USD*", quote.total)));
        assert!(message.contains("Timeline: 48 hours"));
        assert!(message.contains("Notes: Indie pop EP"));
    }

    #[test]
    fn unselected_extras_leave_no_trace() {
        let selection = Selection::default();
        let quote = estimate(&selection);
        let message = format_quote_message(&selection, &ContactDetails::default(), &quote);

        assert!(!message.contains("Vocal Tuning"));
        assert!(!message.contains("Editing:"));
        assert!(!message.contains("Stem Delivery"));
        assert!(!message.contains("48hr Rush"));
        assert!(!message.contains("NEEDS CUSTOM QUOTE"));
        assert!(message.contains("Name: —"));
        assert!(message.contains("Notes: —"));
    }

    #[test]
    fn custom_items_cover_both_flags() {
        let mut selection = Selection::default();
        assert!(custom_quote_items(&selection).is_empty());
        selection.additional_recording = true;
        selection.additional_production = true;
        assert_eq!(
            custom_quote_items(&selection),
            vec!["Additional Recording", "Additional Production"]
        );
    }

    #[test]
    fn deep_link_round_trips_the_message() {
        let url = whatsapp_url("Hola! Quiero una *mezcla* — ¿precio?");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/573001234567");

        let (key, value) = url.query_pairs().next().expect("text parameter present");
        assert_eq!(key, "text");
        assert_eq!(value, "Hola! Quiero una *mezcla* — ¿precio?");
    }
}
