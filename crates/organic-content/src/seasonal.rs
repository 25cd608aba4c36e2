//! Seasonal events and season numbering.
//!
//! Events are bound to a calendar window. Both window ends are inclusive
//! dates in `YYYY-MM-DD` form.

use chrono::NaiveDate;
use organic_types::{Season, SeasonalEventKind};
use serde::Serialize;

/// Date format of event windows.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Multipliers applied while an event is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalModifier {
    /// Element supply multiplier.
    pub element_multiplier: Option<f64>,
    /// Score multiplier.
    pub score_multiplier: Option<f64>,
    /// Energy cost multiplier.
    pub energy_consumption: Option<f64>,
}

/// A score milestone and its reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Score that must be reached.
    pub milestone: u64,
    /// Points awarded.
    pub reward: u64,
}

/// A static seasonal event definition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalEvent {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Description.
    pub description: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// First day of the event.
    pub start_date: &'static str,
    /// Last day of the event.
    pub end_date: &'static str,
    /// Event kind.
    #[serde(rename = "type")]
    pub kind: SeasonalEventKind,
    /// Active multipliers.
    pub modifier: SeasonalModifier,
    /// Milestones in ascending order.
    pub rewards: &'static [Milestone],
}

impl SeasonalEvent {
    /// Whether `date` falls within the event window.
    ///
    /// An event whose dates do not parse is never active.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        let start = NaiveDate::parse_from_str(self.start_date, DATE_FORMAT);
        let end = NaiveDate::parse_from_str(self.end_date, DATE_FORMAT);
        match (start, end) {
            (Ok(start), Ok(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}

const fn milestone(milestone: u64, reward: u64) -> Milestone {
    Milestone { milestone, reward }
}

/// Halved element supply at the end of December.
pub const WINTER_SCARCITY: SeasonalEvent = SeasonalEvent {
    id: "winter_scarcity",
    name: "Winter Element Scarcity",
    description: "Complete synthesis challenges with element supply cut by 50%",
    icon: "❄️",
    start_date: "2025-12-21",
    end_date: "2025-12-31",
    kind: SeasonalEventKind::ElementScarcity,
    modifier: SeasonalModifier {
        element_multiplier: Some(0.5),
        score_multiplier: Some(1.5),
        energy_consumption: None,
    },
    rewards: &[milestone(100, 500), milestone(300, 1000), milestone(500, 2000)],
};

/// Double score for a week in March.
pub const SPRING_MARATHON: SeasonalEvent = SeasonalEvent {
    id: "spring_marathon",
    name: "Spring Synthesis Marathon",
    description: "Synthesize as many molecules as possible within 24 hours",
    icon: "🌸",
    start_date: "2026-03-20",
    end_date: "2026-03-27",
    kind: SeasonalEventKind::SynthesisMarathon,
    modifier: SeasonalModifier {
        element_multiplier: None,
        score_multiplier: Some(2.0),
        energy_consumption: None,
    },
    rewards: &[milestone(50, 300), milestone(150, 800), milestone(300, 1500)],
};

/// Race to unlock new cell types in June.
pub const SUMMER_CELL_RACE: SeasonalEvent = SeasonalEvent {
    id: "summer_cell_race",
    name: "Summer Cell Evolution Race",
    description: "Be the first to unlock a new cell type",
    icon: "☀️",
    start_date: "2026-06-21",
    end_date: "2026-06-28",
    kind: SeasonalEventKind::CellEvolutionRace,
    modifier: SeasonalModifier {
        element_multiplier: None,
        score_multiplier: Some(1.2),
        energy_consumption: None,
    },
    rewards: &[milestone(200, 600), milestone(400, 1200), milestone(600, 2000)],
};

/// Doubled energy cost in September.
pub const AUTUMN_MADNESS: SeasonalEvent = SeasonalEvent {
    id: "autumn_madness",
    name: "Autumn Molecule Madness",
    description: "Complete synthesis with doubled energy consumption",
    icon: "🍂",
    start_date: "2026-09-22",
    end_date: "2026-09-29",
    kind: SeasonalEventKind::MoleculeMadness,
    modifier: SeasonalModifier {
        element_multiplier: None,
        score_multiplier: Some(1.8),
        energy_consumption: Some(2.0),
    },
    rewards: &[milestone(100, 400), milestone(250, 900), milestone(400, 1800)],
};

/// Every seasonal event in calendar order.
pub const ALL_SEASONAL_EVENTS: &[SeasonalEvent] = &[
    WINTER_SCARCITY,
    SPRING_MARATHON,
    SUMMER_CELL_RACE,
    AUTUMN_MADNESS,
];

/// Events running on `date`.
pub fn active_seasonal_events(date: NaiveDate) -> Vec<&'static SeasonalEvent> {
    ALL_SEASONAL_EVENTS
        .iter()
        .filter(|e| e.is_active_on(date))
        .collect()
}

/// Season for a calendar month (1 = January). Out-of-range months fall
/// into autumn.
pub const fn season_for_month(month: u32) -> Season {
    match month {
        12 | 1 | 2 => Season::Winter,
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        _ => Season::Autumn,
    }
}

/// Milestones of `event` that `score` has reached, in ascending order.
pub fn seasonal_milestones_reached(event: &SeasonalEvent, score: u64) -> Vec<Milestone> {
    event
        .rewards
        .iter()
        .filter(|m| score >= m.milestone)
        .copied()
        .collect()
}
