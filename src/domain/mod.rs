//! Domain logic for the pricing estimator lives here.

pub mod entities;
pub mod message;
pub mod pricing;

#[allow(unused_imports)]
pub use entities::{
    ContactDetails, ContactError, EditingLevel, Selection, ServiceType, Tier, TuningTracks,
};
#[allow(unused_imports)]
pub use message::{custom_quote_items, format_quote_message, whatsapp_url};
#[allow(unused_imports)]
pub use pricing::{
    base_price, estimate, price_range, timeline, tuning_fee, Quote, RUSH_MULTIPLIER,
    STEM_DELIVERY_FEE, TUNING_PER_TRACK,
};
