//! Enumeration types for the Organic Life game.
//!
//! Serialized names match the string literals the browser client already
//! stores and sends (element symbols, lowercase rarities, snake-case
//! challenge kinds), so persisted blobs stay readable by both sides.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

/// One of the six resource elements consumed by synthesis recipes.
///
/// Ordered C, H, O, N, P, S, which is also the display order of the
/// element inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Element {
    /// Carbon.
    #[serde(rename = "C")]
    Carbon,
    /// Hydrogen.
    #[serde(rename = "H")]
    Hydrogen,
    /// Oxygen.
    #[serde(rename = "O")]
    Oxygen,
    /// Nitrogen.
    #[serde(rename = "N")]
    Nitrogen,
    /// Phosphorus.
    #[serde(rename = "P")]
    Phosphorus,
    /// Sulfur.
    #[serde(rename = "S")]
    Sulfur,
}

impl Element {
    /// Every element in inventory display order.
    pub const ALL: [Self; 6] = [
        Self::Carbon,
        Self::Hydrogen,
        Self::Oxygen,
        Self::Nitrogen,
        Self::Phosphorus,
        Self::Sulfur,
    ];

    /// The chemical symbol (`"C"`, `"H"`, ...).
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Carbon => "C",
            Self::Hydrogen => "H",
            Self::Oxygen => "O",
            Self::Nitrogen => "N",
            Self::Phosphorus => "P",
            Self::Sulfur => "S",
        }
    }

    /// Parse a chemical symbol. Case-sensitive.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.symbol() == symbol)
    }
}

impl core::fmt::Display for Element {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Content classification
// ---------------------------------------------------------------------------

/// Rarity tier of an achievement or limited achievement.
///
/// Declared in ascending order so `Ord` sorts common before legendary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Entry-level achievements.
    Common,
    /// Only used by limited achievements.
    Uncommon,
    /// Mid-game achievements.
    Rare,
    /// Late-game achievements.
    Epic,
    /// The hardest achievements.
    Legendary,
}

/// Difficulty of a recipe or challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Difficulty {
    /// Easy.
    Easy,
    /// Medium.
    Medium,
    /// Hard.
    Hard,
    /// Timed challenges only.
    Extreme,
}

/// Biological family of a biomolecule recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum MoleculeFamily {
    /// Amino-acid polymers.
    Protein,
    /// Nucleic acids (both DNA and RNA).
    Dna,
    /// Fats.
    Lipid,
    /// Sugars and polysaccharides.
    Carbohydrate,
}

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

/// Visual style of an [`AnimationEvent`](crate::structs::AnimationEvent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum AnimationKind {
    /// Particle burst.
    Particle,
    /// Pulsing glow.
    Pulse,
    /// Rising text such as `+10`.
    FloatingText,
}

// ---------------------------------------------------------------------------
// Challenges and events
// ---------------------------------------------------------------------------

/// Archetype of a randomly generated timed challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TimedChallengeKind {
    /// Reach a high score under doubled energy drain.
    Blackhole,
    /// Element supply is cut to 30%.
    ElementStorm,
    /// Synthesize as many molecules as possible.
    SynthesisFrenzy,
    /// Energy drains twice as fast.
    EnergyCrisis,
    /// Stabilize mutations with extra element cost.
    MutationSurge,
}

/// Kind of a calendar-bound seasonal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SeasonalEventKind {
    /// Reduced element supply.
    ElementScarcity,
    /// Synthesize as much as possible.
    SynthesisMarathon,
    /// Race to unlock cell types.
    CellEvolutionRace,
    /// Doubled energy consumption.
    MoleculeMadness,
}

/// Meteorological season used for seasonal leaderboards.
///
/// Numbered 1 (winter) to 4 (autumn) to match the stored season index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Season {
    /// December to February.
    Winter,
    /// March to May.
    Spring,
    /// June to August.
    Summer,
    /// September to November.
    Autumn,
}

impl Season {
    /// The 1-based season index.
    pub const fn number(self) -> u8 {
        match self {
            Self::Winter => 1,
            Self::Spring => 2,
            Self::Summer => 3,
            Self::Autumn => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_symbols_round_trip() {
        for element in Element::ALL {
            assert_eq!(Element::from_symbol(element.symbol()), Some(element));
        }
        assert_eq!(Element::from_symbol("X"), None);
        assert_eq!(Element::from_symbol("c"), None);
    }

    #[test]
    fn element_serializes_as_symbol() {
        let json = serde_json::to_string(&Element::Phosphorus).unwrap_or_default();
        assert_eq!(json, "\"P\"");
    }

    #[test]
    fn rarity_orders_common_first() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Epic < Rarity::Legendary);
    }

    #[test]
    fn challenge_kind_uses_snake_case() {
        let json = serde_json::to_string(&TimedChallengeKind::ElementStorm).unwrap_or_default();
        assert_eq!(json, "\"element_storm\"");
    }

    #[test]
    fn animation_kind_uses_kebab_case() {
        let json = serde_json::to_string(&AnimationKind::FloatingText).unwrap_or_default();
        assert_eq!(json, "\"floating-text\"");
    }
}
