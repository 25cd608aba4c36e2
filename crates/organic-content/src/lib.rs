//! Static content tables and progress derivations for the Organic Life game.
//!
//! Every table is a `&'static` slice of plain definitions; every
//! derivation is a pure function from a table plus a player snapshot to a
//! derived view. Nothing here owns mutable state.
//!
//! # Modules
//!
//! - [`achievements`] -- Achievement table, unlocks, progress bars
//! - [`biomolecules`] -- Macromolecule recipes and monomer definitions
//! - [`cells`] -- Cell types and evolution progress
//! - [`daily`] -- Daily challenge rotation
//! - [`seasonal`] -- Calendar-bound events and season numbering
//! - [`signin`] -- Seven-day sign-in streak and rewards
//! - [`timed`] -- Timed challenges and limited achievements
//! - [`random`] -- Injectable randomness for table picks
//! - [`percent`] -- Clamped percentage helpers

pub mod achievements;
pub mod biomolecules;
pub mod cells;
pub mod daily;
pub mod percent;
pub mod random;
pub mod seasonal;
pub mod signin;
pub mod timed;

pub use achievements::{
    ALL_ACHIEVEMENTS, Achievement, Requirement, achievement_by_id, achievement_progress,
    achievements_by_rarity, next_achievements, total_achievement_points, unlocked_achievements,
};
pub use biomolecules::{
    ALL_BIOMOLECULES, ALL_MONOMERS, BiomoleculeRecipe, MonomerDefinition, monomer_by_id,
    recipe_by_id, recipes_by_difficulty, recipes_by_family,
};
pub use cells::{
    ALL_CELL_TYPES, CellEvolutionProgress, CellType, available_cells, cell_by_id,
    cell_evolution_progress, next_cell,
};
pub use daily::{ALL_DAILY_CHALLENGES, DailyChallenge, daily_challenge_met, todays_challenges};
pub use random::{RandomSource, RngSource, SequenceRandom, ThreadRandom};
pub use seasonal::{
    ALL_SEASONAL_EVENTS, Milestone, SeasonalEvent, active_seasonal_events, season_for_month,
    seasonal_milestones_reached,
};
pub use signin::{SIGN_IN_REWARDS, SignInProgress, SignInReward, advance_sign_in_streak, sign_in_reward_for_day};
pub use timed::{
    ALL_TIMED_ARCHETYPES, ChallengeCompletion, LIMITED_ACHIEVEMENTS, LimitedAchievement,
    LimitedTrigger, TimedChallengeArchetype, complete_timed_challenge,
    earned_limited_achievements, generate_random_timed_challenge, is_expired,
    limited_achievement_completion, progress_percent, remaining_seconds,
};
