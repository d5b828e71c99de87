use dioxus::prelude::*;

use crate::{
    domain::{estimate, format_quote_message, whatsapp_url, ContactDetails, Selection},
    ui::components::{
        icons::WhatsAppIcon,
        toast::{push_toast, ToastKind, ToastMessage},
    },
};

/// Finalize-quote modal: contact fields plus the WhatsApp hand-off. The send
/// control is a plain anchor carrying the deep link; the click handler only
/// runs the presence checks and cancels navigation when they fail.
#[component]
pub fn QuoteModal() -> Element {
    let selection = use_context::<Signal<Selection>>();
    let contact = use_context::<Signal<ContactDetails>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut modal_open = use_context::<Signal<bool>>();

    if !modal_open() {
        return rsx! { Fragment {} };
    }

    let current = selection();
    let quote = estimate(&current);
    let details = contact();
    let message = format_quote_message(&current, &details, &quote);
    let link = whatsapp_url(&message);

    let send_disabled = details.validate().is_err();
    let send_class = if send_disabled {
        "send-btn font-marker send-btn-disabled"
    } else {
        "send-btn font-marker"
    };

    let on_send = {
        let contact = contact.clone();
        let toasts = toasts.clone();
        let mut modal_open = modal_open.clone();
        move |evt: MouseEvent| {
            if let Err(err) = contact().validate() {
                evt.prevent_default();
                push_toast(toasts.clone(), ToastKind::Warning, err.to_string());
                return;
            }
            modal_open.set(false);
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                "Opening WhatsApp with your quote request.",
            );
        }
    };

    let mut name_field = contact.clone();
    let mut email_field = contact.clone();
    let mut notes_field = contact.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                button {
                    class: "modal-close",
                    onclick: move |_| modal_open.set(false),
                    "✕"
                }
                h3 { class: "font-marker modal-title", "FINALIZE QUOTE" }

                div { class: "modal-fields",
                    div { class: "field",
                        label { "Your name" }
                        input {
                            r#type: "text",
                            value: "{details.name}",
                            placeholder: "Name",
                            oninput: move |evt| name_field.with_mut(|c| c.name = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{details.email}",
                            placeholder: "you@email.com",
                            oninput: move |evt| email_field.with_mut(|c| c.email = evt.value()),
                        }
                    }
                    div { class: "field",
                        label { "Project notes" }
                        textarea {
                            value: "{details.notes}",
                            placeholder: "Tell me about your project...",
                            rows: "2",
                            oninput: move |evt| notes_field.with_mut(|c| c.notes = evt.value()),
                        }
                    }
                }

                div { class: "sticky-note modal-total",
                    div { class: "modal-total-line",
                        span { "Estimated total" }
                        span { class: "font-marker modal-total-value", "${quote.total} USD" }
                    }
                    if quote.needs_custom_quote {
                        p { class: "estimate-custom", "+ items need custom pricing" }
                    }
                }

                a {
                    class: "{send_class}",
                    href: "{link}",
                    onclick: on_send,
                    WhatsAppIcon {}
                    "SEND VIA WHATSAPP"
                }
            }
        }
    }
}
