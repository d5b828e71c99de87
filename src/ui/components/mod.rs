pub mod estimate_note;
pub mod icons;
pub mod quote_modal;
pub mod service_card;
pub mod toast;
