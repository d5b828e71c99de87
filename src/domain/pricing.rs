//! The pricing engine: a pure map from a [`Selection`] to a [`Quote`].
//!
//! All arithmetic is in integer USD. The only rounding anywhere is the rush
//! fee, which is half of the post-extras subtotal rounded half-up, applied
//! once to the combined subtotal rather than per line item.

use super::entities::{Selection, ServiceType, Tier};

/// Per-track surcharge for vocal tuning.
pub const TUNING_PER_TRACK: u32 = 50;
/// Flat surcharge for delivering grouped stems alongside the final bounce.
pub const STEM_DELIVERY_FEE: u32 = 75;
/// Rush turnaround adds this fraction of the pre-rush subtotal.
pub const RUSH_MULTIPLIER: f64 = 0.5;

/// Base price for a tier/service pair.
pub fn base_price(tier: Tier, service: ServiceType) -> u32 {
    use ServiceType::{Bundle, Master, Mix};
    match (tier, service) {
        (Tier::Simple, Mix) => 130,
        (Tier::Simple, Master) => 50,
        (Tier::Simple, Bundle) => 180,
        (Tier::Small, Mix) => 200,
        (Tier::Small, Master) => 80,
        (Tier::Small, Bundle) => 280,
        (Tier::Standard, Mix) => 280,
        (Tier::Standard, Master) => 100,
        (Tier::Standard, Bundle) => 380,
        (Tier::Complex, Mix) => 420,
        (Tier::Complex, Master) => 150,
        (Tier::Complex, Bundle) => 550,
    }
}

/// Lowest and highest base price across tiers for one service. Drives the
/// "$130 – $420" range shown on the service cards.
pub fn price_range(service: ServiceType) -> (u32, u32) {
    let mut prices = Tier::ALL.map(|tier| base_price(tier, service));
    prices.sort_unstable();
    (prices[0], prices[3])
}

/// Cost breakdown derived from one [`Selection`]. Recomputed fresh on every
/// change; never stored anywhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub base: u32,
    pub extras: u32,
    pub rush_fee: u32,
    pub total: u32,
    /// The displayed total is a floor, not a ceiling: some requested items
    /// are priced outside this estimator. Never blocks total computation.
    pub needs_custom_quote: bool,
    pub timeline: &'static str,
}

/// Computes the estimate for a selection. Pure and deterministic: the same
/// selection always yields the same quote.
pub fn estimate(selection: &Selection) -> Quote {
    let base = base_price(selection.tier, selection.service);

    let mut extras = 0;
    if selection.vocal_tuning {
        extras += tuning_fee(selection);
    }
    extras += selection.editing.surcharge();
    if selection.stem_delivery {
        extras += STEM_DELIVERY_FEE;
    }

    let needs_custom_quote = selection.additional_recording || selection.additional_production;

    let subtotal = base + extras;
    let (rush_fee, total) = if selection.rush_delivery {
        let fee = (f64::from(subtotal) * RUSH_MULTIPLIER).round() as u32;
        (fee, subtotal + fee)
    } else {
        (0, subtotal)
    };

    Quote {
        base,
        extras,
        rush_fee,
        total,
        needs_custom_quote,
        timeline: timeline(selection.tier, selection.rush_delivery),
    }
}

/// Vocal-tuning line amount for the current track count.
pub fn tuning_fee(selection: &Selection) -> u32 {
    u32::from(selection.tuning_tracks.count()) * TUNING_PER_TRACK
}

/// Estimated turnaround. Rush overrides the tier-based timeline entirely.
pub fn timeline(tier: Tier, rush: bool) -> &'static str {
    if rush {
        return "48 hours";
    }
    match tier {
        Tier::Simple => "3–5 days",
        Tier::Small | Tier::Standard => "5–7 days",
        Tier::Complex => "7–10 days",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EditingLevel, TuningTracks};

    fn bare(tier: Tier, service: ServiceType) -> Selection {
        Selection {
            tier,
            service,
            ..Selection::default()
        }
    }

    #[test]
    fn base_only_totals_match_price_table() {
        for tier in Tier::ALL {
            for service in ServiceType::ALL {
                let quote = estimate(&bare(tier, service));
                assert_eq!(quote.base, base_price(tier, service));
                assert_eq!(quote.extras, 0);
                assert_eq!(quote.rush_fee, 0);
                assert_eq!(quote.total, base_price(tier, service));
                assert!(!quote.needs_custom_quote);
            }
        }
    }

    #[test]
    fn scenario_standard_bundle_all_off() {
        let quote = estimate(&bare(Tier::Standard, ServiceType::Bundle));
        assert_eq!(quote.base, 380);
        assert_eq!(quote.extras, 0);
        assert_eq!(quote.rush_fee, 0);
        assert_eq!(quote.total, 380);
        assert!(!quote.needs_custom_quote);
        assert_eq!(quote.timeline, "5–7 days");
    }

    #[test]
    fn scenario_simple_mix_with_tuning_and_light_editing() {
        let selection = Selection {
            vocal_tuning: true,
            tuning_tracks: TuningTracks::new(3),
            editing: EditingLevel::Light,
            ..bare(Tier::Simple, ServiceType::Mix)
        };
        let quote = estimate(&selection);
        assert_eq!(quote.base, 130);
        assert_eq!(quote.extras, 3 * 50 + 40);
        assert_eq!(quote.total, 320);
        assert_eq!(quote.timeline, "3–5 days");
    }

    #[test]
    fn scenario_complex_master_stems_rush() {
        let selection = Selection {
            stem_delivery: true,
            rush_delivery: true,
            ..bare(Tier::Complex, ServiceType::Master)
        };
        let quote = estimate(&selection);
        assert_eq!(quote.base, 150);
        assert_eq!(quote.extras, 75);
        // subtotal 225, half of it rounds up to 113
        assert_eq!(quote.rush_fee, 113);
        assert_eq!(quote.total, 338);
        assert_eq!(quote.timeline, "48 hours");
    }

    #[test]
    fn scenario_small_bundle_additional_recording() {
        let selection = Selection {
            additional_recording: true,
            ..bare(Tier::Small, ServiceType::Bundle)
        };
        let quote = estimate(&selection);
        assert_eq!(quote.total, 280);
        assert!(quote.needs_custom_quote);
    }

    #[test]
    fn scenario_standard_mix_heavy_editing_rush() {
        let selection = Selection {
            editing: EditingLevel::Heavy,
            rush_delivery: true,
            ..bare(Tier::Standard, ServiceType::Mix)
        };
        let quote = estimate(&selection);
        assert_eq!(quote.base, 280);
        assert_eq!(quote.extras, 150);
        assert_eq!(quote.rush_fee, 215);
        assert_eq!(quote.total, 645);
    }

    #[test]
    fn rush_fee_is_half_the_pre_rush_subtotal() {
        for tier in Tier::ALL {
            for service in ServiceType::ALL {
                let selection = Selection {
                    vocal_tuning: true,
                    tuning_tracks: TuningTracks::new(2),
                    stem_delivery: true,
                    rush_delivery: true,
                    ..bare(tier, service)
                };
                let quote = estimate(&selection);
                let subtotal = quote.base + quote.extras;
                let expected = (f64::from(subtotal) * 0.5).round() as u32;
                assert_eq!(quote.rush_fee, expected);
                assert_eq!(quote.total, subtotal + expected);
            }
        }
    }

    #[test]
    fn enabling_any_extra_never_decreases_total() {
        let baseline = bare(Tier::Standard, ServiceType::Mix);
        let base_total = estimate(&baseline).total;

        let variants = [
            Selection {
                vocal_tuning: true,
                ..baseline
            },
            Selection {
                editing: EditingLevel::Light,
                ..baseline
            },
            Selection {
                editing: EditingLevel::Medium,
                ..baseline
            },
            Selection {
                editing: EditingLevel::Heavy,
                ..baseline
            },
            Selection {
                stem_delivery: true,
                ..baseline
            },
            Selection {
                rush_delivery: true,
                ..baseline
            },
        ];
        for variant in variants {
            assert!(estimate(&variant).total >= base_total);
        }
    }

    #[test]
    fn custom_quote_flag_depends_only_on_custom_items() {
        let baseline = bare(Tier::Complex, ServiceType::Bundle);
        assert!(!estimate(&baseline).needs_custom_quote);

        let recording = Selection {
            additional_recording: true,
            ..baseline
        };
        let production = Selection {
            additional_production: true,
            ..baseline
        };
        let both = Selection {
            additional_recording: true,
            additional_production: true,
            rush_delivery: true,
            vocal_tuning: true,
            ..baseline
        };
        assert!(estimate(&recording).needs_custom_quote);
        assert!(estimate(&production).needs_custom_quote);
        assert!(estimate(&both).needs_custom_quote);

        // The flag never changes the total.
        assert_eq!(estimate(&recording).total, estimate(&baseline).total);
    }

    #[test]
    fn rush_forces_48_hour_timeline_for_every_tier() {
        for tier in Tier::ALL {
            let rushed = Selection {
                rush_delivery: true,
                ..bare(tier, ServiceType::Mix)
            };
            assert_eq!(estimate(&rushed).timeline, "48 hours");
        }
        assert_eq!(timeline(Tier::Simple, false), "3–5 days");
        assert_eq!(timeline(Tier::Small, false), "5–7 days");
        assert_eq!(timeline(Tier::Standard, false), "5–7 days");
        assert_eq!(timeline(Tier::Complex, false), "7–10 days");
    }

    #[test]
    fn estimate_is_idempotent() {
        let selection = Selection {
            vocal_tuning: true,
            tuning_tracks: TuningTracks::new(4),
            editing: EditingLevel::Medium,
            stem_delivery: true,
            rush_delivery: true,
            additional_production: true,
            ..bare(Tier::Small, ServiceType::Bundle)
        };
        assert_eq!(estimate(&selection), estimate(&selection));
    }

    #[test]
    fn switching_service_only_moves_the_base_column() {
        let selection = Selection {
            vocal_tuning: true,
            tuning_tracks: TuningTracks::new(2),
            editing: EditingLevel::Light,
            ..bare(Tier::Standard, ServiceType::Mix)
        };
        let as_master = Selection {
            service: ServiceType::Master,
            ..selection
        };
        let mix_quote = estimate(&selection);
        let master_quote = estimate(&as_master);
        assert_eq!(mix_quote.extras, master_quote.extras);
        assert_eq!(master_quote.base, base_price(Tier::Standard, ServiceType::Master));
    }

    #[test]
    fn service_price_ranges() {
        assert_eq!(price_range(ServiceType::Mix), (130, 420));
        assert_eq!(price_range(ServiceType::Master), (50, 150));
        assert_eq!(price_range(ServiceType::Bundle), (180, 550));
    }
}
