//! Daily challenge rotation.
//!
//! Five challenges rotate by day of year; each day offers three
//! consecutive entries starting at `day_of_year % 5`.

use chrono::{Datelike, NaiveDate};
use organic_types::Difficulty;
use serde::Serialize;

/// Number of challenges offered per day.
pub const CHALLENGES_PER_DAY: usize = 3;

/// A static daily challenge definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChallenge {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Objective description.
    pub description: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Recipe the challenge is themed around, if any.
    pub target_molecule: Option<&'static str>,
    /// Score the player must reach.
    pub target_score: u64,
    /// Base score reward.
    pub reward_score: u64,
    /// Bonus score reward.
    pub reward_bonus: u64,
    /// Difficulty tier.
    pub difficulty: Difficulty,
}

impl DailyChallenge {
    /// Base plus bonus reward.
    pub const fn total_reward(&self) -> u64 {
        self.reward_score.saturating_add(self.reward_bonus)
    }
}

/// Synthesize five glucose molecules.
pub const GLUCOSE_RUSH: DailyChallenge = DailyChallenge {
    id: "glucose_rush",
    name: "Glucose Rush",
    description: "Synthesize 5 glucose molecules within 10 minutes",
    icon: "🍬",
    target_molecule: Some("glucose"),
    target_score: 50,
    reward_score: 100,
    reward_bonus: 50,
    difficulty: Difficulty::Easy,
};

/// Synthesize three proteins.
pub const PROTEIN_MASTER: DailyChallenge = DailyChallenge {
    id: "protein_master",
    name: "Protein Master",
    description: "Synthesize 3 protein molecules",
    icon: "💪",
    target_molecule: Some("protein"),
    target_score: 150,
    reward_score: 200,
    reward_bonus: 100,
    difficulty: Difficulty::Medium,
};

/// Synthesize one DNA molecule.
pub const DNA_EXPLORER: DailyChallenge = DailyChallenge {
    id: "dna_explorer",
    name: "DNA Explorer",
    description: "Successfully synthesize 1 DNA molecule",
    icon: "🧬",
    target_molecule: Some("dna"),
    target_score: 100,
    reward_score: 300,
    reward_bonus: 150,
    difficulty: Difficulty::Hard,
};

/// Collect a hundred elements.
pub const ELEMENT_COLLECTOR: DailyChallenge = DailyChallenge {
    id: "element_collector",
    name: "Element Collector",
    description: "Collect 100 elements",
    icon: "⚛️",
    target_molecule: None,
    target_score: 100,
    reward_score: 150,
    reward_bonus: 75,
    difficulty: Difficulty::Easy,
};

/// Reach level 3.
pub const CELL_EVOLUTION: DailyChallenge = DailyChallenge {
    id: "cell_evolution",
    name: "Cell Evolver",
    description: "Reach level 3",
    icon: "🦠",
    target_molecule: None,
    target_score: 200,
    reward_score: 250,
    reward_bonus: 125,
    difficulty: Difficulty::Medium,
};

/// Every daily challenge in rotation order.
pub const ALL_DAILY_CHALLENGES: &[DailyChallenge] = &[
    GLUCOSE_RUSH,
    PROTEIN_MASTER,
    DNA_EXPLORER,
    ELEMENT_COLLECTOR,
    CELL_EVOLUTION,
];

/// The challenges offered on the given 1-based day of the year.
pub fn challenges_for_day(day_of_year: u32) -> Vec<&'static DailyChallenge> {
    let start = usize::try_from(day_of_year)
        .ok()
        .and_then(|day| day.checked_rem(ALL_DAILY_CHALLENGES.len()))
        .unwrap_or(0);
    ALL_DAILY_CHALLENGES
        .iter()
        .cycle()
        .skip(start)
        .take(CHALLENGES_PER_DAY)
        .collect()
}

/// The challenges offered on `date`.
pub fn todays_challenges(date: NaiveDate) -> Vec<&'static DailyChallenge> {
    challenges_for_day(date.ordinal())
}

/// Whether `score` meets the challenge target.
pub const fn daily_challenge_met(challenge: &DailyChallenge, score: u64) -> bool {
    score >= challenge.target_score
}
