//! Timed challenges and limited achievements.
//!
//! A timed challenge is stamped from one of five archetypes at a given
//! instant and runs for a fixed number of seconds. All helpers take the
//! current time explicitly as Unix milliseconds so they stay pure.
//!
//! Limited achievements are badges earned by completing timed challenges.

use std::collections::BTreeSet;

use organic_types::{
    ChallengeModifier, ChallengeRewards, Difficulty, Rarity, TimedChallenge, TimedChallengeId,
    TimedChallengeKind,
};
use serde::Serialize;

use crate::percent::percent_of;
use crate::random::RandomSource;

/// Milliseconds per second.
const MS_PER_SECOND: u64 = 1000;

// ---------------------------------------------------------------------------
// Archetypes
// ---------------------------------------------------------------------------

/// Template a [`TimedChallenge`] is stamped from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedChallengeArchetype {
    /// Archetype kind.
    pub kind: TimedChallengeKind,
    /// Display name.
    pub name: &'static str,
    /// Objective description.
    pub description: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Duration in seconds.
    pub duration_seconds: u32,
    /// Score the player must reach.
    pub target_score: u64,
    /// Active multipliers.
    pub modifier: ChallengeModifier,
    /// Base score reward.
    pub reward_score: u64,
    /// Bonus score reward.
    pub reward_bonus: u64,
    /// Limited achievement unlocked on completion.
    pub limited_achievement: &'static str,
}

impl TimedChallengeArchetype {
    /// Stamp a fresh, active challenge starting at `now_ms`.
    pub fn instantiate(&self, now_ms: i64) -> TimedChallenge {
        let duration_ms = i64::from(self.duration_seconds).saturating_mul(1000);
        TimedChallenge {
            id: TimedChallengeId::new(),
            kind: self.kind,
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            icon: self.icon.to_owned(),
            difficulty: self.difficulty,
            duration_seconds: self.duration_seconds,
            start_time: now_ms,
            end_time: now_ms.saturating_add(duration_ms),
            target_score: self.target_score,
            modifier: self.modifier,
            rewards: ChallengeRewards {
                score: self.reward_score,
                bonus: self.reward_bonus,
                limited_achievement: Some(self.limited_achievement.to_owned()),
            },
            active: true,
            completed: false,
        }
    }
}

/// Energy drains fast while score multiplies.
pub const BLACKHOLE: TimedChallengeArchetype = TimedChallengeArchetype {
    kind: TimedChallengeKind::Blackhole,
    name: "Black Hole",
    description: "A black hole is devouring energy! Score 500 within 3 minutes",
    icon: "🌌",
    difficulty: Difficulty::Extreme,
    duration_seconds: 180,
    target_score: 500,
    modifier: ChallengeModifier {
        score_multiplier: Some(2.5),
        element_consumption: None,
        energy_consumption: Some(1.5),
        element_reduction: None,
    },
    reward_score: 1000,
    reward_bonus: 500,
    limited_achievement: "blackhole_survivor",
};

/// Element supply cut to 30%, double score.
pub const ELEMENT_STORM: TimedChallengeArchetype = TimedChallengeArchetype {
    kind: TimedChallengeKind::ElementStorm,
    name: "Element Storm",
    description: "An element storm hits! Supply drops by 70% but score doubles",
    icon: "⛈️",
    difficulty: Difficulty::Extreme,
    duration_seconds: 120,
    target_score: 300,
    modifier: ChallengeModifier {
        score_multiplier: Some(2.0),
        element_consumption: None,
        energy_consumption: None,
        element_reduction: Some(0.3),
    },
    reward_score: 800,
    reward_bonus: 400,
    limited_achievement: "storm_chaser",
};

/// Cheaper synthesis for five minutes.
pub const SYNTHESIS_FRENZY: TimedChallengeArchetype = TimedChallengeArchetype {
    kind: TimedChallengeKind::SynthesisFrenzy,
    name: "Synthesis Frenzy",
    description: "Frenzy mode! Synthesize 10 molecules within 5 minutes",
    icon: "🔥",
    difficulty: Difficulty::Hard,
    duration_seconds: 300,
    target_score: 400,
    modifier: ChallengeModifier {
        score_multiplier: Some(1.8),
        element_consumption: Some(0.8),
        energy_consumption: None,
        element_reduction: None,
    },
    reward_score: 600,
    reward_bonus: 300,
    limited_achievement: "synthesis_master",
};

/// Energy costs double.
pub const ENERGY_CRISIS: TimedChallengeArchetype = TimedChallengeArchetype {
    kind: TimedChallengeKind::EnergyCrisis,
    name: "Energy Crisis",
    description: "Energy is running out! Restore it to 80% within 4 minutes",
    icon: "⚡",
    difficulty: Difficulty::Hard,
    duration_seconds: 240,
    target_score: 350,
    modifier: ChallengeModifier {
        score_multiplier: Some(1.5),
        element_consumption: None,
        energy_consumption: Some(2.0),
        element_reduction: None,
    },
    reward_score: 500,
    reward_bonus: 250,
    limited_achievement: "energy_savior",
};

/// Synthesis costs 20% more elements.
pub const MUTATION_SURGE: TimedChallengeArchetype = TimedChallengeArchetype {
    kind: TimedChallengeKind::MutationSurge,
    name: "Mutation Surge",
    description: "The cell is mutating! Synthesize special molecules to stabilize its genome",
    icon: "🧬",
    difficulty: Difficulty::Medium,
    duration_seconds: 150,
    target_score: 250,
    modifier: ChallengeModifier {
        score_multiplier: Some(1.3),
        element_consumption: Some(1.2),
        energy_consumption: None,
        element_reduction: None,
    },
    reward_score: 400,
    reward_bonus: 200,
    limited_achievement: "mutation_handler",
};

/// Every archetype, one per [`TimedChallengeKind`].
pub const ALL_TIMED_ARCHETYPES: &[TimedChallengeArchetype] = &[
    BLACKHOLE,
    ELEMENT_STORM,
    SYNTHESIS_FRENZY,
    ENERGY_CRISIS,
    MUTATION_SURGE,
];

/// The archetype for a kind.
pub fn archetype_for(kind: TimedChallengeKind) -> Option<&'static TimedChallengeArchetype> {
    ALL_TIMED_ARCHETYPES.iter().find(|a| a.kind == kind)
}

// ---------------------------------------------------------------------------
// Challenge lifecycle
// ---------------------------------------------------------------------------

/// Stamp a challenge from a uniformly chosen archetype.
pub fn generate_random_timed_challenge(
    rng: &mut impl RandomSource,
    now_ms: i64,
) -> TimedChallenge {
    let archetype = rng
        .next_index(ALL_TIMED_ARCHETYPES.len())
        .and_then(|i| ALL_TIMED_ARCHETYPES.get(i))
        .unwrap_or(&BLACKHOLE);
    archetype.instantiate(now_ms)
}

/// Whole seconds left, rounded up. Zero once the end time has passed.
pub fn remaining_seconds(challenge: &TimedChallenge, now_ms: i64) -> u64 {
    let remaining_ms = u64::try_from(challenge.end_time.saturating_sub(now_ms)).unwrap_or(0);
    remaining_ms.div_ceil(MS_PER_SECOND)
}

/// Whether `now_ms` is past the end time.
pub const fn is_expired(challenge: &TimedChallenge, now_ms: i64) -> bool {
    now_ms > challenge.end_time
}

/// Elapsed share of the challenge duration, clamped to `0.0..=100.0`.
pub fn progress_percent(challenge: &TimedChallenge, now_ms: i64) -> f64 {
    let elapsed = u64::try_from(now_ms.saturating_sub(challenge.start_time)).unwrap_or(0);
    let total = u64::from(challenge.duration_seconds).saturating_mul(MS_PER_SECOND);
    percent_of(elapsed, total)
}

/// Result of completing a timed challenge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCompletion {
    /// Kind of the completed challenge.
    pub kind: TimedChallengeKind,
    /// Rewards granted.
    pub rewards: ChallengeRewards,
    /// Seconds that were left on the clock.
    pub remaining_seconds: u64,
    /// Score multiplier that was active.
    pub score_multiplier: Option<f64>,
}

impl ChallengeCompletion {
    /// Base plus bonus points.
    pub const fn total_reward(&self) -> u64 {
        self.rewards.score.saturating_add(self.rewards.bonus)
    }
}

/// Mark `challenge` complete if it is still running and `score` reached
/// the target.
///
/// Returns `None` and leaves the challenge untouched otherwise. A challenge
/// completes at most once.
pub fn complete_timed_challenge(
    challenge: &mut TimedChallenge,
    score: u64,
    now_ms: i64,
) -> Option<ChallengeCompletion> {
    if challenge.completed || is_expired(challenge, now_ms) || score < challenge.target_score {
        return None;
    }
    challenge.completed = true;
    challenge.active = false;
    Some(ChallengeCompletion {
        kind: challenge.kind,
        rewards: challenge.rewards.clone(),
        remaining_seconds: remaining_seconds(challenge, now_ms),
        score_multiplier: challenge.modifier.score_multiplier,
    })
}

// ---------------------------------------------------------------------------
// Limited achievements
// ---------------------------------------------------------------------------

/// What unlocks a limited achievement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum LimitedTrigger {
    /// Complete a challenge of this kind.
    Challenge(TimedChallengeKind),
    /// Complete at least one challenge of every kind.
    EveryKind,
    /// Complete any challenge whose score multiplier is at least this.
    ScoreMultiplierAtLeast(f64),
    /// Complete any challenge with at most this many seconds left.
    FinishedWithin(u64),
}

/// A static limited achievement definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedAchievement {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Unlock condition.
    pub trigger: LimitedTrigger,
}

impl LimitedAchievement {
    /// Whether `completion` earns this badge, given every kind completed
    /// so far (including the current one).
    pub fn is_earned_by(
        &self,
        completion: &ChallengeCompletion,
        completed_kinds: &BTreeSet<TimedChallengeKind>,
    ) -> bool {
        match self.trigger {
            LimitedTrigger::Challenge(kind) => completion.kind == kind,
            LimitedTrigger::EveryKind => ALL_TIMED_ARCHETYPES
                .iter()
                .all(|a| completed_kinds.contains(&a.kind)),
            LimitedTrigger::ScoreMultiplierAtLeast(min) => {
                completion.score_multiplier.is_some_and(|m| m >= min)
            }
            LimitedTrigger::FinishedWithin(seconds) => completion.remaining_seconds <= seconds,
        }
    }
}

/// Every limited achievement.
pub const LIMITED_ACHIEVEMENTS: &[LimitedAchievement] = &[
    LimitedAchievement {
        id: "blackhole_survivor",
        name: "Black Hole Survivor",
        description: "Survive the black hole challenge",
        icon: "🌌",
        rarity: Rarity::Legendary,
        trigger: LimitedTrigger::Challenge(TimedChallengeKind::Blackhole),
    },
    LimitedAchievement {
        id: "storm_chaser",
        name: "Storm Chaser",
        description: "Complete a challenge during an element storm",
        icon: "⛈️",
        rarity: Rarity::Legendary,
        trigger: LimitedTrigger::Challenge(TimedChallengeKind::ElementStorm),
    },
    LimitedAchievement {
        id: "synthesis_master",
        name: "Synthesis Master",
        description: "Show outstanding skill in a synthesis frenzy",
        icon: "🔥",
        rarity: Rarity::Epic,
        trigger: LimitedTrigger::Challenge(TimedChallengeKind::SynthesisFrenzy),
    },
    LimitedAchievement {
        id: "energy_savior",
        name: "Energy Savior",
        description: "Save the cell during an energy crisis",
        icon: "⚡",
        rarity: Rarity::Epic,
        trigger: LimitedTrigger::Challenge(TimedChallengeKind::EnergyCrisis),
    },
    LimitedAchievement {
        id: "mutation_handler",
        name: "Mutation Handler",
        description: "Successfully handle a cell mutation",
        icon: "🧬",
        rarity: Rarity::Rare,
        trigger: LimitedTrigger::Challenge(TimedChallengeKind::MutationSurge),
    },
    LimitedAchievement {
        id: "challenge_collector",
        name: "Challenge Collector",
        description: "Complete every type of timed challenge",
        icon: "🏆",
        rarity: Rarity::Epic,
        trigger: LimitedTrigger::EveryKind,
    },
    LimitedAchievement {
        id: "speed_demon",
        name: "Speed Demon",
        description: "Earn a 3x score multiplier in a timed challenge",
        icon: "⚙️",
        rarity: Rarity::Rare,
        trigger: LimitedTrigger::ScoreMultiplierAtLeast(3.0),
    },
    LimitedAchievement {
        id: "perfect_timing",
        name: "Perfect Timing",
        description: "Reach the target in the last 10 seconds of a timed challenge",
        icon: "⏰",
        rarity: Rarity::Rare,
        trigger: LimitedTrigger::FinishedWithin(10),
    },
];

/// Look up a limited achievement by ID.
pub fn limited_achievement_by_id(id: &str) -> Option<&'static LimitedAchievement> {
    LIMITED_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Limited achievements earned by `completion`, in table order.
pub fn earned_limited_achievements(
    completion: &ChallengeCompletion,
    completed_kinds: &BTreeSet<TimedChallengeKind>,
) -> Vec<&'static LimitedAchievement> {
    LIMITED_ACHIEVEMENTS
        .iter()
        .filter(|a| a.is_earned_by(completion, completed_kinds))
        .collect()
}

/// Share of limited achievements unlocked, `0.0..=100.0`.
///
/// Unknown IDs are ignored.
pub fn limited_achievement_completion<S: AsRef<str>>(unlocked_ids: &[S]) -> f64 {
    let unlocked = LIMITED_ACHIEVEMENTS
        .iter()
        .filter(|a| unlocked_ids.iter().any(|id| id.as_ref() == a.id))
        .count();
    percent_of(
        u64::try_from(unlocked).unwrap_or(0),
        u64::try_from(LIMITED_ACHIEVEMENTS.len()).unwrap_or(0),
    )
}
