//! Shared type definitions for the Organic Life game.
//!
//! This crate is the single source of truth for all types used across the
//! workspace. Types defined here flow downstream to `TypeScript` via
//! `ts-rs` for the browser client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for ephemeral records
//! - [`enums`] -- Elements, rarities, difficulties, challenge kinds
//! - [`structs`] -- Player state, stats snapshot, animations, leaderboard rows
//! - [`api`] -- Leaderboard API request/response payloads

pub mod api;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use api::{LeaderboardPage, LeaderboardStats, ScoreSubmission, SubmitOutcome};
pub use enums::{
    AnimationKind, Difficulty, Element, MoleculeFamily, Rarity, Season, SeasonalEventKind,
    TimedChallengeKind,
};
pub use ids::{AnimationId, MoleculeRecordId, TimedChallengeId};
pub use structs::{
    AnimationEvent, ChallengeModifier, ChallengeRewards, GameStats, LeaderboardEntry,
    MoleculeRecord, PlayerIdentity, PlayerState, Position, TimedChallenge, VITAL_MAX,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::AnimationId::export_all();
        let _ = crate::ids::MoleculeRecordId::export_all();
        let _ = crate::ids::TimedChallengeId::export_all();

        // Enums
        let _ = crate::enums::Element::export_all();
        let _ = crate::enums::Rarity::export_all();
        let _ = crate::enums::Difficulty::export_all();
        let _ = crate::enums::MoleculeFamily::export_all();
        let _ = crate::enums::AnimationKind::export_all();
        let _ = crate::enums::TimedChallengeKind::export_all();
        let _ = crate::enums::SeasonalEventKind::export_all();
        let _ = crate::enums::Season::export_all();

        // Structs
        let _ = crate::structs::Position::export_all();
        let _ = crate::structs::MoleculeRecord::export_all();
        let _ = crate::structs::PlayerState::export_all();
        let _ = crate::structs::GameStats::export_all();
        let _ = crate::structs::AnimationEvent::export_all();
        let _ = crate::structs::ChallengeModifier::export_all();
        let _ = crate::structs::ChallengeRewards::export_all();
        let _ = crate::structs::TimedChallenge::export_all();
        let _ = crate::structs::LeaderboardEntry::export_all();
        let _ = crate::structs::PlayerIdentity::export_all();

        // API
        let _ = crate::api::LeaderboardPage::export_all();
        let _ = crate::api::ScoreSubmission::export_all();
        let _ = crate::api::SubmitOutcome::export_all();
        let _ = crate::api::LeaderboardStats::export_all();
    }
}
