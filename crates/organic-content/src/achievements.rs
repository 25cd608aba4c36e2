//! Achievement table and unlock derivations.
//!
//! Achievements are static badges unlocked when the player's
//! [`GameStats`] satisfy a threshold. The table is ordered by tier
//! (common, rare, epic, legendary) and every derivation preserves that
//! order.

use organic_types::{GameStats, Rarity};
use serde::Serialize;

use crate::percent::percent_of;

// ---------------------------------------------------------------------------
// Requirement
// ---------------------------------------------------------------------------

/// The threshold an achievement checks against [`GameStats`].
///
/// Each variant names the metric it reads, so both the unlock predicate
/// and the progress bar derive from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "metric", content = "threshold", rename_all = "snake_case")]
pub enum Requirement {
    /// `total_monomers >= n`.
    MonomersCreated(u32),
    /// `total_macromolecules >= n`.
    MacromoleculesCreated(u32),
    /// `score >= n`.
    Score(u64),
    /// `level >= n`.
    Level(u32),
    /// At least `n` distinct molecule definitions created.
    DistinctMolecules(u32),
    /// `cells_unlocked >= n`.
    CellsUnlocked(u32),
}

impl Requirement {
    /// Return `(current, threshold)` for this requirement.
    fn measure(self, stats: &GameStats) -> (u64, u64) {
        match self {
            Self::MonomersCreated(n) => (u64::from(stats.total_monomers), u64::from(n)),
            Self::MacromoleculesCreated(n) => {
                (u64::from(stats.total_macromolecules), u64::from(n))
            }
            Self::Score(n) => (stats.score, n),
            Self::Level(n) => (u64::from(stats.level), u64::from(n)),
            Self::DistinctMolecules(n) => (
                u64::try_from(stats.molecules_created.len()).unwrap_or(u64::MAX),
                u64::from(n),
            ),
            Self::CellsUnlocked(n) => (u64::from(stats.cells_unlocked), u64::from(n)),
        }
    }

    /// Whether `stats` meets the threshold.
    pub fn is_met(self, stats: &GameStats) -> bool {
        let (current, threshold) = self.measure(stats);
        current >= threshold
    }
}

// ---------------------------------------------------------------------------
// Achievement
// ---------------------------------------------------------------------------

/// A static achievement definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Stable identifier.
    pub id: &'static str,
    /// English name.
    pub name: &'static str,
    /// Traditional Chinese name shown in the client.
    pub chinese_name: &'static str,
    /// What the player has to do.
    pub description: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Badge color.
    pub color: &'static str,
    /// Unlock threshold.
    pub requirement: Requirement,
    /// Achievement points awarded.
    pub points: u32,
    /// Rarity tier.
    pub rarity: Rarity,
}

impl Achievement {
    /// Whether the achievement is unlocked under `stats`.
    pub fn is_unlocked(&self, stats: &GameStats) -> bool {
        self.requirement.is_met(stats)
    }
}

// --- Common ---

/// Synthesize the first monomer.
pub const FIRST_MONOMER: Achievement = Achievement {
    id: "first_monomer",
    name: "First Step",
    chinese_name: "初次合成",
    description: "Synthesize your first monomer",
    icon: "🌱",
    color: "#84cc16",
    requirement: Requirement::MonomersCreated(1),
    points: 10,
    rarity: Rarity::Common,
};

/// Assemble the first macromolecule.
pub const FIRST_MACROMOLECULE: Achievement = Achievement {
    id: "first_macromolecule",
    name: "Life Builder",
    chinese_name: "首次組裝",
    description: "Assemble your first macromolecule",
    icon: "🧬",
    color: "#a855f7",
    requirement: Requirement::MacromoleculesCreated(1),
    points: 15,
    rarity: Rarity::Common,
};

/// Reach 100 points.
pub const SCORE_100: Achievement = Achievement {
    id: "score_100",
    name: "Rising Star",
    chinese_name: "初露頭角",
    description: "Reach 100 points",
    icon: "⭐",
    color: "#f59e0b",
    requirement: Requirement::Score(100),
    points: 20,
    rarity: Rarity::Common,
};

// --- Rare ---

/// Reach 500 points.
pub const SCORE_500: Achievement = Achievement {
    id: "score_500",
    name: "Molecular Master",
    chinese_name: "分子大師",
    description: "Reach 500 points",
    icon: "🔬",
    color: "#06b6d4",
    requirement: Requirement::Score(500),
    points: 50,
    rarity: Rarity::Rare,
};

/// Reach level 5.
pub const LEVEL_5: Achievement = Achievement {
    id: "level_5",
    name: "Evolution Expert",
    chinese_name: "進化專家",
    description: "Reach level 5",
    icon: "🦾",
    color: "#ec4899",
    requirement: Requirement::Level(5),
    points: 40,
    rarity: Rarity::Rare,
};

/// Create six distinct kinds of molecule.
pub const ALL_MOLECULES: Achievement = Achievement {
    id: "all_molecules",
    name: "Molecular Collection",
    chinese_name: "分子收集家",
    description: "Synthesize every kind of molecule",
    icon: "📚",
    color: "#8b5cf6",
    requirement: Requirement::DistinctMolecules(6),
    points: 60,
    rarity: Rarity::Rare,
};

// --- Epic ---

/// Reach 1000 points.
pub const SCORE_1000: Achievement = Achievement {
    id: "score_1000",
    name: "Genetic Engineer",
    chinese_name: "遺傳工程師",
    description: "Reach 1000 points",
    icon: "🧪",
    color: "#ef4444",
    requirement: Requirement::Score(1000),
    points: 100,
    rarity: Rarity::Epic,
};

/// Reach level 10.
pub const LEVEL_10: Achievement = Achievement {
    id: "level_10",
    name: "Supreme Creator",
    chinese_name: "至高創造者",
    description: "Reach level 10",
    icon: "👑",
    color: "#fbbf24",
    requirement: Requirement::Level(10),
    points: 80,
    rarity: Rarity::Epic,
};

/// Unlock all five cell types.
pub const UNLOCK_ALL_CELLS: Achievement = Achievement {
    id: "unlock_all_cells",
    name: "Cell Evolution Master",
    chinese_name: "細胞進化大師",
    description: "Unlock every cell type",
    icon: "🌍",
    color: "#10b981",
    requirement: Requirement::CellsUnlocked(5),
    points: 150,
    rarity: Rarity::Epic,
};

// --- Legendary ---

/// Reach 5000 points.
pub const SCORE_5000: Achievement = Achievement {
    id: "score_5000",
    name: "Life Architect",
    chinese_name: "生命建築師",
    description: "Reach 5000 points",
    icon: "🏛️",
    color: "#06b6d4",
    requirement: Requirement::Score(5000),
    points: 250,
    rarity: Rarity::Legendary,
};

/// Synthesize 100 monomers.
pub const MONOMER_MASTER: Achievement = Achievement {
    id: "monomer_master",
    name: "Monomer Maestro",
    chinese_name: "單體大師",
    description: "Synthesize 100 monomers",
    icon: "🎵",
    color: "#a855f7",
    requirement: Requirement::MonomersCreated(100),
    points: 200,
    rarity: Rarity::Legendary,
};

/// Assemble 50 macromolecules.
pub const MACROMOLECULE_MASTER: Achievement = Achievement {
    id: "macromolecule_master",
    name: "Macromolecule Maestro",
    chinese_name: "大分子大師",
    description: "Assemble 50 macromolecules",
    icon: "🎼",
    color: "#ec4899",
    requirement: Requirement::MacromoleculesCreated(50),
    points: 200,
    rarity: Rarity::Legendary,
};

/// Every achievement in tier order.
pub const ALL_ACHIEVEMENTS: &[Achievement] = &[
    FIRST_MONOMER,
    FIRST_MACROMOLECULE,
    SCORE_100,
    SCORE_500,
    LEVEL_5,
    ALL_MOLECULES,
    SCORE_1000,
    LEVEL_10,
    UNLOCK_ALL_CELLS,
    SCORE_5000,
    MONOMER_MASTER,
    MACROMOLECULE_MASTER,
];

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Look up an achievement by ID.
pub fn achievement_by_id(id: &str) -> Option<&'static Achievement> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Achievements of a single rarity, in table order.
pub fn achievements_by_rarity(rarity: Rarity) -> Vec<&'static Achievement> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.rarity == rarity)
        .collect()
}

/// Every achievement unlocked under `stats`, in table order.
pub fn unlocked_achievements(stats: &GameStats) -> Vec<&'static Achievement> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.is_unlocked(stats))
        .collect()
}

/// Sum of points over unlocked achievements.
pub fn total_achievement_points(stats: &GameStats) -> u32 {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.is_unlocked(stats))
        .fold(0_u32, |sum, a| sum.saturating_add(a.points))
}

/// The first `limit` locked achievements, in table order.
pub fn next_achievements(stats: &GameStats, limit: usize) -> Vec<&'static Achievement> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| !a.is_unlocked(stats))
        .take(limit)
        .collect()
}

/// Progress toward `achievement` as a percentage in `0.0..=100.0`.
///
/// Single-step achievements (threshold 1) read as 0 or 100.
pub fn achievement_progress(achievement: &Achievement, stats: &GameStats) -> f64 {
    let (current, threshold) = achievement.requirement.measure(stats);
    percent_of(current, threshold)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn requirement_serializes_metric_and_threshold() {
        let json = serde_json::to_value(Requirement::Score(100)).unwrap();
        assert_eq!(json, serde_json::json!({ "metric": "score", "threshold": 100 }));

        let achievement = serde_json::to_value(FIRST_MONOMER).unwrap();
        assert_eq!(achievement["id"], FIRST_MONOMER.id);
        assert_eq!(achievement["chineseName"], FIRST_MONOMER.chinese_name);
        assert!(achievement["requirement"]["metric"].is_string());
    }

    fn stats(score: u64, level: u32) -> GameStats {
        GameStats {
            score,
            level,
            max_energy: 100,
            max_health: 100,
            cells_unlocked: 1,
            ..GameStats::default()
        }
    }

    fn ids(list: &[&Achievement]) -> Vec<&'static str> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn ids_are_unique() {
        let unique: BTreeSet<&str> = ALL_ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(unique.len(), ALL_ACHIEVEMENTS.len());
    }

    #[test]
    fn table_is_in_tier_order() {
        let rarities: Vec<Rarity> = ALL_ACHIEVEMENTS.iter().map(|a| a.rarity).collect();
        let mut sorted = rarities.clone();
        sorted.sort();
        assert_eq!(rarities, sorted);
    }

    #[test]
    fn fresh_player_has_nothing() {
        let s = stats(0, 1);
        assert!(unlocked_achievements(&s).is_empty());
        assert_eq!(total_achievement_points(&s), 0);
    }

    #[test]
    fn score_thresholds_unlock_in_order() {
        let s = stats(600, 1);
        assert_eq!(ids(&unlocked_achievements(&s)), vec!["score_100", "score_500"]);
        assert_eq!(total_achievement_points(&s), 70);
    }

    #[test]
    fn next_achievements_skips_unlocked() {
        let s = stats(150, 1);
        let next = next_achievements(&s, 3);
        assert_eq!(ids(&next), vec!["first_monomer", "first_macromolecule", "score_500"]);
    }

    #[test]
    fn next_achievements_respects_limit() {
        assert!(next_achievements(&stats(0, 1), 0).is_empty());
        assert_eq!(next_achievements(&stats(0, 1), 100).len(), ALL_ACHIEVEMENTS.len());
    }

    #[test]
    fn distinct_molecules_counts_keys() {
        let mut s = stats(0, 1);
        s.molecules_created = (0..6).map(|i| (format!("m{i}"), 1)).collect::<BTreeMap<_, _>>();
        assert!(ALL_MOLECULES.is_unlocked(&s));
        assert_close(achievement_progress(&ALL_MOLECULES, &s), 100.0);

        s.molecules_created.remove("m0");
        s.molecules_created.remove("m1");
        s.molecules_created.remove("m2");
        assert!(!ALL_MOLECULES.is_unlocked(&s));
        assert_close(achievement_progress(&ALL_MOLECULES, &s), 50.0);
    }

    #[test]
    fn progress_is_ratio_of_threshold() {
        let s = stats(250, 4);
        assert_close(achievement_progress(&SCORE_500, &s), 50.0);
        assert_close(achievement_progress(&SCORE_100, &s), 100.0);
        assert_close(achievement_progress(&LEVEL_10, &s), 40.0);
    }

    #[test]
    fn single_step_progress_is_binary() {
        let mut s = stats(0, 1);
        assert_close(achievement_progress(&FIRST_MONOMER, &s), 0.0);
        s.total_monomers = 3;
        assert_close(achievement_progress(&FIRST_MONOMER, &s), 100.0);
    }

    #[test]
    fn unlocks_are_monotonic() {
        let samples = [
            stats(0, 1),
            stats(99, 2),
            stats(100, 5),
            stats(999, 9),
            stats(5000, 12),
        ];
        for lower in &samples {
            for higher in &samples {
                if higher.score >= lower.score && higher.level >= lower.level {
                    let low: BTreeSet<&str> =
                        unlocked_achievements(lower).iter().map(|a| a.id).collect();
                    let high: BTreeSet<&str> =
                        unlocked_achievements(higher).iter().map(|a| a.id).collect();
                    assert!(low.is_subset(&high));
                }
            }
        }
    }

    #[test]
    fn rarity_grouping() {
        assert_eq!(achievements_by_rarity(Rarity::Common).len(), 3);
        assert_eq!(achievements_by_rarity(Rarity::Legendary).len(), 3);
        assert!(achievements_by_rarity(Rarity::Uncommon).is_empty());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(achievement_by_id("level_5").map(|a| a.points), Some(40));
        assert!(achievement_by_id("nope").is_none());
    }
}
