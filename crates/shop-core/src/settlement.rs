//! Settlement sizes and their magic item availability.
//!
//! Each of the eight sizes has a fixed obtainable value and a rule per aura
//! strength tier: roll `NdM` items, stock none, or treat the whole tier as
//! available.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShopError;
use crate::item::AuraStrength;

/// Individually rolled items may cost up to this many times a settlement's
/// obtainable value.
pub const PRICE_CAP_MULTIPLIER: u64 = 100;

/// One of the eight settlement sizes, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TownSize {
    /// Hamlet.
    Weiler,
    /// Thorp.
    Nest,
    /// Settlement.
    Ansiedlung,
    /// Small village.
    KleinesDorf,
    /// Large village.
    GrossesDorf,
    /// Small town.
    Kleinstadt,
    /// Large city.
    Grossstadt,
    /// Metropolis.
    Metropole,
}

impl TownSize {
    /// All sizes, smallest to largest.
    pub const ALL: [TownSize; 8] = [
        Self::Weiler,
        Self::Nest,
        Self::Ansiedlung,
        Self::KleinesDorf,
        Self::GrossesDorf,
        Self::Kleinstadt,
        Self::Grossstadt,
        Self::Metropole,
    ];

    /// The display name used by the rules, e.g. "Großes Dorf".
    pub fn name(self) -> &'static str {
        match self {
            Self::Weiler => "Weiler",
            Self::Nest => "Nest",
            Self::Ansiedlung => "Ansiedlung",
            Self::KleinesDorf => "Kleines Dorf",
            Self::GrossesDorf => "Großes Dorf",
            Self::Kleinstadt => "Kleinstadt",
            Self::Grossstadt => "Großstadt",
            Self::Metropole => "Metropole",
        }
    }

    /// The availability rules for this size.
    pub fn profile(self) -> SettlementProfile {
        use TierRule::{FullyOffered, NotOffered};
        let roll = TierRule::roll;
        let (obtainable, faint, moderate, strong) = match self {
            Self::Weiler => (50, roll(1, 4), NotOffered, NotOffered),
            Self::Nest => (200, roll(1, 6), NotOffered, NotOffered),
            Self::Ansiedlung => (500, roll(2, 4), roll(1, 4), NotOffered),
            Self::KleinesDorf => (1000, roll(3, 4), roll(1, 6), NotOffered),
            Self::GrossesDorf => (2000, roll(3, 4), roll(2, 4), roll(1, 4)),
            Self::Kleinstadt => (4000, roll(4, 4), roll(3, 4), roll(1, 6)),
            Self::Grossstadt => (8000, roll(4, 4), roll(3, 4), roll(2, 6)),
            Self::Metropole => (16000, FullyOffered, roll(4, 4), roll(3, 4)),
        };
        SettlementProfile {
            town: self,
            obtainable,
            faint,
            moderate,
            strong,
        }
    }
}

impl fmt::Display for TownSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TownSize {
    type Err = ShopError;

    /// Case-insensitive; "ss" is accepted for "ß".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold(s);
        Self::ALL
            .into_iter()
            .find(|size| fold(size.name()) == wanted)
            .ok_or_else(|| ShopError::InvalidSettlement(s.to_string()))
    }
}

impl TryFrom<String> for TownSize {
    type Error = ShopError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TownSize> for String {
    fn from(size: TownSize) -> Self {
        size.name().to_string()
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase().replace('ß', "ss")
}

/// How a settlement stocks one aura strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierRule {
    /// Roll `count`d`sides` to get the number of items drawn.
    Roll {
        /// Number of dice.
        count: u32,
        /// Sides per die.
        sides: u32,
    },
    /// The tier is never stocked.
    NotOffered,
    /// Every item of the tier is assumed available; nothing is drawn.
    FullyOffered,
}

impl TierRule {
    /// Shorthand for [`TierRule::Roll`].
    pub const fn roll(count: u32, sides: u32) -> Self {
        Self::Roll { count, sides }
    }
}

impl fmt::Display for TierRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roll { count, sides } => write!(f, "{count}d{sides}"),
            Self::NotOffered => write!(f, "none"),
            Self::FullyOffered => write!(f, "all"),
        }
    }
}

/// The fixed availability rules of one settlement size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementProfile {
    /// The size these rules belong to.
    pub town: TownSize,
    /// Price ceiling for generic commerce.
    pub obtainable: u64,
    /// Rule for faint items.
    pub faint: TierRule,
    /// Rule for moderate items.
    pub moderate: TierRule,
    /// Rule for strong items.
    pub strong: TierRule,
}

impl SettlementProfile {
    /// The most an individually rolled item may cost here.
    pub fn max_price(&self) -> u64 {
        self.obtainable.saturating_mul(PRICE_CAP_MULTIPLIER)
    }

    /// The rule for a tier. Items without aura strength are never offered.
    pub fn rule(&self, tier: AuraStrength) -> TierRule {
        match tier {
            AuraStrength::Faint => self.faint,
            AuraStrength::Moderate => self.moderate,
            AuraStrength::Strong => self.strong,
            AuraStrength::None => TierRule::NotOffered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_ordered_by_obtainable_value() {
        let values: Vec<u64> = TownSize::ALL.iter().map(|t| t.profile().obtainable).collect();
        assert_eq!(values, vec![50, 200, 500, 1000, 2000, 4000, 8000, 16000]);
        assert!(TownSize::Weiler < TownSize::Metropole);
    }

    #[test]
    fn moderate_skipped_for_two_smallest() {
        for town in &TownSize::ALL[..2] {
            assert_eq!(town.profile().moderate, TierRule::NotOffered);
        }
        for town in &TownSize::ALL[2..] {
            assert!(matches!(town.profile().moderate, TierRule::Roll { .. }));
        }
    }

    #[test]
    fn strong_skipped_for_four_smallest() {
        for town in &TownSize::ALL[..4] {
            assert_eq!(town.profile().strong, TierRule::NotOffered);
        }
        for town in &TownSize::ALL[4..] {
            assert!(matches!(town.profile().strong, TierRule::Roll { .. }));
        }
    }

    #[test]
    fn only_metropole_offers_all_faint_items() {
        for town in TownSize::ALL {
            let fully = town.profile().faint == TierRule::FullyOffered;
            assert_eq!(fully, town == TownSize::Metropole, "{town}");
        }
    }

    #[test]
    fn ansiedlung_profile() {
        let profile = TownSize::Ansiedlung.profile();
        assert_eq!(profile.obtainable, 500);
        assert_eq!(profile.max_price(), 50_000);
        assert_eq!(profile.faint, TierRule::roll(2, 4));
        assert_eq!(profile.rule(AuraStrength::Moderate), TierRule::roll(1, 4));
        assert_eq!(profile.rule(AuraStrength::None), TierRule::NotOffered);
    }

    #[test]
    fn parse_town_size() {
        assert_eq!("Weiler".parse::<TownSize>().unwrap(), TownSize::Weiler);
        assert_eq!("Großes Dorf".parse::<TownSize>().unwrap(), TownSize::GrossesDorf);
        assert_eq!("grossstadt".parse::<TownSize>().unwrap(), TownSize::Grossstadt);
        assert_eq!(" kleines dorf ".parse::<TownSize>().unwrap(), TownSize::KleinesDorf);
    }

    #[test]
    fn parse_unknown_town_size() {
        let err = "Village".parse::<TownSize>().unwrap_err();
        assert!(matches!(err, ShopError::InvalidSettlement(ref s) if s == "Village"));
        assert_eq!(err.to_string(), "unknown settlement size: \"Village\"");
    }

    #[test]
    fn names_round_trip() {
        for town in TownSize::ALL {
            assert_eq!(town.name().parse::<TownSize>().unwrap(), town);
        }
    }

    #[test]
    fn tier_rule_display() {
        assert_eq!(TierRule::roll(3, 4).to_string(), "3d4");
        assert_eq!(TierRule::NotOffered.to_string(), "none");
        assert_eq!(TierRule::FullyOffered.to_string(), "all");
    }
}
