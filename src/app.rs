use dioxus::prelude::*;

use crate::{
    domain::{ContactDetails, Selection},
    ui::{
        components::{
            quote_modal::QuoteModal,
            toast::{Toast, ToastMessage},
        },
        pages::HomePage,
        shell::Shell,
    },
    util::assets,
};

#[component]
pub fn App() -> Element {
    // The presentation layer owns the single mutable Selection slot; every
    // mutation re-renders and re-runs the pure estimate over it.
    let selection = use_signal(Selection::default);
    use_context_provider(|| selection.clone());

    // Contact fields live apart from the Selection: they feed the outbound
    // message only, never the pricing.
    let contact = use_signal(ContactDetails::default);
    use_context_provider(|| contact.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // Whether the finalize-quote modal is showing.
    let quote_modal_open = use_signal(|| false);
    use_context_provider(|| quote_modal_open.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { HomePage {} }
        QuoteModal {}
        Toast {}
    }
}
