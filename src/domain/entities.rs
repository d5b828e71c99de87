use std::fmt;

use thiserror::Error;

/// Which service the client is asking for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Mix,
    Master,
    #[default]
    Bundle,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [ServiceType::Mix, ServiceType::Master, ServiceType::Bundle];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Mix => "MIXING",
            ServiceType::Master => "MASTERING",
            ServiceType::Bundle => "MIX + MASTER",
        }
    }
}

/// Project-size bracket. Each tier carries its own base price per service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    Simple,
    Small,
    #[default]
    Standard,
    Complex,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Simple, Tier::Small, Tier::Standard, Tier::Complex];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Simple => "Inst + Acapella",
            Tier::Small => "3–8 tracks",
            Tier::Standard => "9–24 channels",
            Tier::Complex => "25+ channels",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::Simple => "2 stems",
            Tier::Small => "Small production",
            Tier::Standard => "Standard production",
            Tier::Complex => "Large production",
        }
    }
}

/// How much session cleanup the project needs before mixing can start.
/// Ordered from none to heavy; exactly one level is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditingLevel {
    #[default]
    None,
    Light,
    Medium,
    Heavy,
}

impl EditingLevel {
    pub const ALL: [EditingLevel; 4] = [
        EditingLevel::None,
        EditingLevel::Light,
        EditingLevel::Medium,
        EditingLevel::Heavy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditingLevel::None => "None",
            EditingLevel::Light => "Light",
            EditingLevel::Medium => "Medium",
            EditingLevel::Heavy => "Heavy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EditingLevel::None => "Session is clean",
            EditingLevel::Light => "Minor fixes needed",
            EditingLevel::Medium => "Some cleanup work",
            EditingLevel::Heavy => "Significant editing",
        }
    }

    /// Flat surcharge in USD, additive with every other extra.
    pub fn surcharge(&self) -> u32 {
        match self {
            EditingLevel::None => 0,
            EditingLevel::Light => 40,
            EditingLevel::Medium => 80,
            EditingLevel::Heavy => 150,
        }
    }
}

/// Number of vocal tracks to tune. Only meaningful while vocal tuning is
/// enabled; always within 1..=5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TuningTracks(u8);

impl TuningTracks {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> Self {
        Self(count.clamp(Self::MIN, Self::MAX))
    }

    pub fn count(&self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = TuningTracks> {
        (Self::MIN..=Self::MAX).map(TuningTracks)
    }
}

impl Default for TuningTracks {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for TuningTracks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the visitor has picked on the worksheet. The sole input to
/// [`crate::domain::pricing::estimate`]; the engine never sees other state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub service: ServiceType,
    pub tier: Tier,
    pub vocal_tuning: bool,
    pub tuning_tracks: TuningTracks,
    pub editing: EditingLevel,
    pub stem_delivery: bool,
    pub rush_delivery: bool,
    pub additional_recording: bool,
    pub additional_production: bool,
}

/// Contact fields from the finalize-quote modal. Used only for the outbound
/// message, never for pricing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub notes: String,
}

impl ContactDetails {
    /// Presence check on the two required fields. Notes stay optional.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingEmail);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Add your name so I know who to reply to.")]
    MissingName,
    #[error("Add an email so I can send the final quote.")]
    MissingEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_tracks_clamp_to_valid_range() {
        assert_eq!(TuningTracks::new(0).count(), 1);
        assert_eq!(TuningTracks::new(3).count(), 3);
        assert_eq!(TuningTracks::new(99).count(), 5);
    }

    #[test]
    fn default_selection_matches_landing_state() {
        let selection = Selection::default();
        assert_eq!(selection.service, ServiceType::Bundle);
        assert_eq!(selection.tier, Tier::Standard);
        assert!(!selection.vocal_tuning);
        assert_eq!(selection.tuning_tracks.count(), 1);
        assert_eq!(selection.editing, EditingLevel::None);
        assert!(!selection.stem_delivery);
        assert!(!selection.rush_delivery);
        assert!(!selection.additional_recording);
        assert!(!selection.additional_production);
    }

    #[test]
    fn contact_presence_checks() {
        let mut contact = ContactDetails::default();
        assert_eq!(contact.validate(), Err(ContactError::MissingName));

        contact.name = "Ana".into();
        assert_eq!(contact.validate(), Err(ContactError::MissingEmail));

        contact.email = "ana@example.com".into();
        assert_eq!(contact.validate(), Ok(()));

        contact.name = "   ".into();
        assert_eq!(contact.validate(), Err(ContactError::MissingName));
    }
}
