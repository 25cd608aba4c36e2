//! Cell types and evolution derivations.
//!
//! A cell type is unlocked once the player's level AND score both reach
//! its thresholds. The table is sorted by ascending unlock thresholds, so
//! "the last available cell" is the most evolved one.

use organic_types::Element;
use serde::Serialize;

use crate::percent::percent_of;

/// A static cell type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellType {
    /// Stable identifier.
    pub id: &'static str,
    /// English name.
    pub name: &'static str,
    /// Traditional Chinese name shown in the client.
    pub chinese_name: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Minimum level.
    pub unlock_level: u32,
    /// Minimum score.
    pub unlock_score: u64,
    /// Display icon.
    pub icon: &'static str,
    /// Primary color.
    pub color: &'static str,
    /// Glow color.
    pub glow_color: &'static str,
    /// Element composition used for the cell's idle animation.
    pub base_elements: [(Element, u32); 6],
    /// Flavor bonus text.
    pub special_ability: &'static str,
    /// Short tags.
    pub characteristics: &'static [&'static str],
}

impl CellType {
    /// Whether this cell is available at `level` and `score`.
    pub const fn is_available(&self, level: u32, score: u64) -> bool {
        self.unlock_level <= level && self.unlock_score <= score
    }
}

const fn composition(c: u32, h: u32, o: u32, n: u32, p: u32, s: u32) -> [(Element, u32); 6] {
    [
        (Element::Carbon, c),
        (Element::Hydrogen, h),
        (Element::Oxygen, o),
        (Element::Nitrogen, n),
        (Element::Phosphorus, p),
        (Element::Sulfur, s),
    ]
}

/// Bacteria and archaea. Always available.
pub const PROKARYOTIC_CELL: CellType = CellType {
    id: "prokaryotic",
    name: "Prokaryotic Cell",
    chinese_name: "原核細胞",
    description: "The simplest cell: no nucleus, includes bacteria and archaea",
    unlock_level: 1,
    unlock_score: 0,
    icon: "🦠",
    color: "#06b6d4",
    glow_color: "rgba(6, 182, 212, 0.5)",
    base_elements: composition(5, 8, 4, 2, 1, 0),
    special_ability: "Rapid division: +10% score on every synthesis",
    characteristics: &["No nucleus", "No organelles", "Rapid division", "Highly adaptable"],
};

/// Eukaryotic cell without a wall.
pub const ANIMAL_CELL: CellType = CellType {
    id: "animal",
    name: "Animal Cell",
    chinese_name: "動物細胞",
    description: "A wall-less eukaryotic cell with centrioles and a flexible shape",
    unlock_level: 2,
    unlock_score: 100,
    icon: "🧬",
    color: "#a855f7",
    glow_color: "rgba(168, 85, 247, 0.5)",
    base_elements: composition(7, 11, 5, 3, 1, 1),
    special_ability: "Nerve conduction: +20% score on every synthesis",
    characteristics: &["No cell wall", "Centrioles", "Flexible shape", "Active metabolism"],
};

/// Eukaryotic cell with a wall and chloroplasts.
pub const PLANT_CELL: CellType = CellType {
    id: "plant",
    name: "Plant Cell",
    chinese_name: "植物細胞",
    description: "A eukaryotic cell with a cell wall and chloroplasts for photosynthesis",
    unlock_level: 3,
    unlock_score: 200,
    icon: "🌱",
    color: "#84cc16",
    glow_color: "rgba(132, 204, 22, 0.5)",
    base_elements: composition(8, 12, 6, 3, 2, 1),
    special_ability: "Photosynthesis: restores 15% energy on every synthesis",
    characteristics: &["Cell wall", "Chloroplasts", "Photosynthesis", "Rigid structure"],
};

/// Heterotrophic eukaryotic cell with a chitin wall.
pub const FUNGAL_CELL: CellType = CellType {
    id: "fungal",
    name: "Fungal Cell",
    chinese_name: "真菌細胞",
    description: "A eukaryotic cell with a wall but no chloroplasts; heterotrophic",
    unlock_level: 4,
    unlock_score: 350,
    icon: "🍄",
    color: "#f59e0b",
    glow_color: "rgba(245, 158, 11, 0.5)",
    base_elements: composition(9, 13, 7, 3, 2, 1),
    special_ability: "Decomposition: restores 10% health on every synthesis",
    characteristics: &["Cell wall", "No chloroplasts", "Heterotrophic", "Strong decomposer"],
};

/// Genetic material in a protein coat.
pub const VIRAL_CELL: CellType = CellType {
    id: "viral",
    name: "Viral Particle",
    chinese_name: "病毒",
    description: "The simplest carrier of genetic material; needs a host to replicate",
    unlock_level: 5,
    unlock_score: 500,
    icon: "🦠",
    color: "#ef4444",
    glow_color: "rgba(239, 68, 68, 0.5)",
    base_elements: composition(4, 6, 3, 2, 1, 0),
    special_ability: "Parasitic replication: costs 5 points per synthesis but grants +50% reward",
    characteristics: &["No membrane", "Needs a host", "Fast replication", "Highly specific"],
};

/// Every cell type in ascending unlock order.
pub const ALL_CELL_TYPES: &[CellType] = &[
    PROKARYOTIC_CELL,
    ANIMAL_CELL,
    PLANT_CELL,
    FUNGAL_CELL,
    VIRAL_CELL,
];

/// Current cell, next cell and percentage progress between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellEvolutionProgress {
    /// Most evolved available cell.
    pub current: &'static CellType,
    /// First cell not yet available, if any.
    pub next: Option<&'static CellType>,
    /// Score progress from `current` to `next`, `0.0..=100.0`.
    pub progress_percent: f64,
}

/// Look up a cell type by ID.
pub fn cell_by_id(id: &str) -> Option<&'static CellType> {
    ALL_CELL_TYPES.iter().find(|c| c.id == id)
}

/// Every cell available at `level` and `score`, in unlock order.
pub fn available_cells(level: u32, score: u64) -> Vec<&'static CellType> {
    ALL_CELL_TYPES
        .iter()
        .filter(|c| c.is_available(level, score))
        .collect()
}

/// The first cell not yet available, or `None` once everything is unlocked.
pub fn next_cell(level: u32, score: u64) -> Option<&'static CellType> {
    ALL_CELL_TYPES.iter().find(|c| !c.is_available(level, score))
}

/// Evolution progress toward the next cell.
///
/// Progress interpolates the score between the current cell's and the
/// next cell's score thresholds. When every cell is available the
/// progress is 100.
pub fn cell_evolution_progress(level: u32, score: u64) -> CellEvolutionProgress {
    let current = ALL_CELL_TYPES
        .iter()
        .rev()
        .find(|c| c.is_available(level, score))
        .unwrap_or(&PROKARYOTIC_CELL);
    let next = next_cell(level, score);

    let progress_percent = next.map_or(100.0, |next| {
        let gained = score.saturating_sub(current.unlock_score);
        let span = next.unlock_score.saturating_sub(current.unlock_score);
        percent_of(gained, span)
    });

    CellEvolutionProgress {
        current,
        next,
        progress_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    fn ids(list: &[&CellType]) -> Vec<&'static str> {
        list.iter().map(|c| c.id).collect()
    }

    #[test]
    fn table_is_ascending() {
        for pair in ALL_CELL_TYPES.windows(2) {
            if let [a, b] = pair {
                assert!(a.unlock_level < b.unlock_level);
                assert!(a.unlock_score < b.unlock_score);
            }
        }
    }

    #[test]
    fn starting_player_only_has_prokaryotic() {
        assert_eq!(ids(&available_cells(1, 0)), vec!["prokaryotic"]);
    }

    #[test]
    fn veteran_player_has_everything() {
        assert_eq!(available_cells(5, 500).len(), 5);
        assert!(next_cell(5, 500).is_none());
    }

    #[test]
    fn both_thresholds_are_required() {
        // Enough score, not enough level.
        assert_eq!(ids(&available_cells(1, 1000)), vec!["prokaryotic"]);
        // Enough level, not enough score.
        assert_eq!(ids(&available_cells(9, 50)), vec!["prokaryotic"]);
    }

    #[test]
    fn fresh_progress_is_zero() {
        let p = cell_evolution_progress(1, 0);
        assert_eq!(p.current.id, "prokaryotic");
        assert_eq!(p.next.map(|c| c.id), Some("animal"));
        assert_close(p.progress_percent, 0.0);
    }

    #[test]
    fn reaching_threshold_advances_next_cell() {
        assert_eq!(next_cell(2, 99).map(|c| c.id), Some("animal"));
        assert_eq!(next_cell(2, 100).map(|c| c.id), Some("plant"));
        assert!(available_cells(2, 100).iter().any(|c| c.id == "animal"));
    }

    #[test]
    fn progress_interpolates_between_thresholds() {
        // animal (100) -> plant (200)
        let p = cell_evolution_progress(2, 150);
        assert_eq!(p.current.id, "animal");
        assert_close(p.progress_percent, 50.0);
    }

    #[test]
    fn level_gated_progress_clamps_to_full() {
        // Score past the animal threshold but still level 1.
        let p = cell_evolution_progress(1, 180);
        assert_eq!(p.current.id, "prokaryotic");
        assert_eq!(p.next.map(|c| c.id), Some("animal"));
        assert_close(p.progress_percent, 100.0);
    }

    #[test]
    fn completed_evolution_is_full() {
        let p = cell_evolution_progress(10, 10_000);
        assert_eq!(p.current.id, "viral");
        assert!(p.next.is_none());
        assert_close(p.progress_percent, 100.0);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(cell_by_id("fungal").map(|c| c.unlock_score), Some(350));
        assert!(cell_by_id("archaea").is_none());
    }
}
