//! Core entity structs for the Organic Life game.
//!
//! Covers the player's mutable state, the stats snapshot that achievement
//! predicates read, ephemeral animation events, generated timed challenges
//! and leaderboard rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{AnimationKind, Difficulty, Element, MoleculeFamily, TimedChallengeKind};
use crate::ids::{AnimationId, MoleculeRecordId, TimedChallengeId};

/// Upper bound for energy and health.
pub const VITAL_MAX: u32 = 100;

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// Screen position an effect is anchored at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Position {
    /// Horizontal offset in CSS pixels.
    pub x: f64,
    /// Vertical offset in CSS pixels.
    pub y: f64,
}

impl Position {
    /// Construct a position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Player state
// ---------------------------------------------------------------------------

/// A single synthesized monomer or macromolecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MoleculeRecord {
    /// Unique record identifier.
    pub id: MoleculeRecordId,
    /// ID of the content definition this record was built from
    /// (e.g. `"glucose"`). Keys the per-definition creation counter.
    pub definition_id: String,
    /// Display name.
    pub name: String,
    /// Chemical formula for display.
    pub formula: String,
    /// Biological family, when the definition has one.
    pub family: Option<MoleculeFamily>,
}

/// The player's complete mutable game state.
///
/// Element counts are unsigned so they can never go negative; removals
/// that would underflow are rejected by the store. Energy and health are
/// kept within `0..=VITAL_MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerState {
    /// Current player level (starts at 1).
    pub level: u32,
    /// Current score.
    pub score: u64,
    /// Element inventory.
    pub elements: BTreeMap<Element, u32>,
    /// Monomers synthesized this session.
    pub monomers: Vec<MoleculeRecord>,
    /// Macromolecules synthesized this session.
    pub macromolecules: Vec<MoleculeRecord>,
    /// Cell health (0--100).
    pub health: u32,
    /// Cell energy (0--100).
    pub energy: u32,
    /// ID of the cell type currently shown.
    pub current_cell_id: String,
    /// Total monomers ever created this session.
    pub total_monomers_created: u32,
    /// Total macromolecules ever created this session.
    pub total_macromolecules_created: u32,
    /// Creation count per content definition ID.
    pub molecules_created: BTreeMap<String, u32>,
    /// Cell type IDs unlocked so far, in unlock order.
    pub cells_unlocked: Vec<String>,
}

impl PlayerState {
    /// Current count of a single element.
    pub fn element(&self, element: Element) -> u32 {
        self.elements.get(&element).copied().unwrap_or(0)
    }

    /// Build the stats snapshot that achievement predicates read.
    pub fn stats(&self) -> GameStats {
        GameStats {
            score: self.score,
            level: self.level,
            total_monomers: self.total_monomers_created,
            total_macromolecules: self.total_macromolecules_created,
            cells_unlocked: u32::try_from(self.cells_unlocked.len()).unwrap_or(u32::MAX),
            max_energy: VITAL_MAX,
            max_health: VITAL_MAX,
            molecules_created: self.molecules_created.clone(),
            cells_evolved: self.cells_unlocked.clone(),
        }
    }
}

/// Point-in-time player statistics evaluated by achievement predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameStats {
    /// Current score.
    pub score: u64,
    /// Current level.
    pub level: u32,
    /// Total monomers created.
    pub total_monomers: u32,
    /// Total macromolecules created.
    pub total_macromolecules: u32,
    /// Number of unlocked cell types.
    pub cells_unlocked: u32,
    /// Energy ceiling.
    pub max_energy: u32,
    /// Health ceiling.
    pub max_health: u32,
    /// Creation count per content definition ID.
    pub molecules_created: BTreeMap<String, u32>,
    /// IDs of unlocked cell types.
    pub cells_evolved: Vec<String>,
}

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

/// A purely cosmetic effect queued by a state mutation.
///
/// Carries no game-state authority; it is removed once `duration_ms` has
/// elapsed on the store's clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AnimationEvent {
    /// Unique event identifier.
    pub id: AnimationId,
    /// Visual style.
    pub kind: AnimationKind,
    /// Anchor position.
    pub position: Position,
    /// CSS color, if the effect is tinted.
    pub color: Option<String>,
    /// Text payload for floating text.
    pub text: Option<String>,
    /// Lifetime in milliseconds.
    pub duration_ms: u64,
}

// ---------------------------------------------------------------------------
// Timed challenges
// ---------------------------------------------------------------------------

/// Multipliers a timed challenge applies while active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ChallengeModifier {
    /// Score multiplier.
    pub score_multiplier: Option<f64>,
    /// Element cost multiplier.
    pub element_consumption: Option<f64>,
    /// Energy cost multiplier.
    pub energy_consumption: Option<f64>,
    /// Fraction of normal element supply that remains.
    pub element_reduction: Option<f64>,
}

/// Rewards granted when a timed challenge is completed in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ChallengeRewards {
    /// Base score reward.
    pub score: u64,
    /// Bonus score reward.
    pub bonus: u64,
    /// Limited achievement unlocked on completion.
    pub limited_achievement: Option<String>,
}

/// A generated, time-boxed challenge instance.
///
/// Timestamps are Unix milliseconds. Persisted as JSON while active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct TimedChallenge {
    /// Unique instance identifier.
    pub id: TimedChallengeId,
    /// Archetype this instance was stamped from.
    #[serde(rename = "type")]
    pub kind: TimedChallengeKind,
    /// Display name.
    pub name: String,
    /// Objective description.
    pub description: String,
    /// Display icon.
    pub icon: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Total duration in seconds.
    pub duration_seconds: u32,
    /// Start time (Unix ms).
    pub start_time: i64,
    /// End time (Unix ms).
    pub end_time: i64,
    /// Score the player must reach.
    pub target_score: u64,
    /// Active multipliers.
    pub modifier: ChallengeModifier,
    /// Completion rewards.
    pub rewards: ChallengeRewards,
    /// Whether the challenge is still running.
    pub active: bool,
    /// Whether the target was reached in time.
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// A single row of the global leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: u32,
    /// Player display name.
    pub player_name: String,
    /// Submitted score.
    pub score: u64,
    /// Level at submission time.
    pub level: u32,
    /// Submission date (`YYYY-MM-DD`).
    pub date: String,
    /// Cell type name at submission time.
    pub cell_type: String,
}

/// What the game core knows about the signed-in player.
///
/// Session internals stay with the auth collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlayerIdentity {
    /// Whether a session is present.
    pub authenticated: bool,
    /// Display name from the auth provider, if any.
    pub display_name: Option<String>,
}

impl PlayerIdentity {
    /// Name used when the provider supplies none.
    pub const GUEST_NAME: &'static str = "Player";

    /// The name to show and submit, falling back to [`Self::GUEST_NAME`].
    pub fn name_or_guest(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(Self::GUEST_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> PlayerState {
        PlayerState {
            level: 3,
            score: 120,
            elements: BTreeMap::from([(Element::Carbon, 4)]),
            monomers: Vec::new(),
            macromolecules: Vec::new(),
            health: 90,
            energy: 80,
            current_cell_id: String::from("animal"),
            total_monomers_created: 2,
            total_macromolecules_created: 1,
            molecules_created: BTreeMap::from([(String::from("glucose"), 1)]),
            cells_unlocked: vec![String::from("prokaryotic"), String::from("animal")],
        }
    }

    #[test]
    fn missing_element_counts_as_zero() {
        let state = sample_state();
        assert_eq!(state.element(Element::Carbon), 4);
        assert_eq!(state.element(Element::Sulfur), 0);
    }

    #[test]
    fn stats_snapshot_mirrors_state() {
        let stats = sample_state().stats();
        assert_eq!(stats.score, 120);
        assert_eq!(stats.level, 3);
        assert_eq!(stats.total_monomers, 2);
        assert_eq!(stats.total_macromolecules, 1);
        assert_eq!(stats.cells_unlocked, 2);
        assert_eq!(stats.max_energy, VITAL_MAX);
        assert_eq!(stats.cells_evolved.len(), 2);
        assert_eq!(stats.molecules_created.get("glucose").copied(), Some(1));
    }

    #[test]
    fn identity_falls_back_to_guest() {
        let anon = PlayerIdentity::default();
        assert_eq!(anon.name_or_guest(), PlayerIdentity::GUEST_NAME);

        let blank = PlayerIdentity {
            authenticated: true,
            display_name: Some(String::from("   ")),
        };
        assert_eq!(blank.name_or_guest(), PlayerIdentity::GUEST_NAME);

        let named = PlayerIdentity {
            authenticated: true,
            display_name: Some(String::from(" Ada ")),
        };
        assert_eq!(named.name_or_guest(), "Ada");
    }

    #[test]
    fn leaderboard_entry_uses_camel_case() {
        let entry = LeaderboardEntry {
            rank: 1,
            player_name: String::from("Ada"),
            score: 10,
            level: 2,
            date: String::from("2026-01-01"),
            cell_type: String::from("Animal Cell"),
        };
        let json = serde_json::to_value(&entry).unwrap_or_default();
        assert_eq!(json["playerName"], "Ada");
        assert_eq!(json["cellType"], "Animal Cell");
    }
}
