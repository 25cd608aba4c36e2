//! Leaderboard ranking.
//!
//! [`Leaderboard`] holds the ranked list through a [`LeaderboardStore`]
//! and owns every rule about who gets in: a submission enters when the
//! board has room or when it beats the lowest score, the list is kept
//! sorted by score descending with ranks `1..=N`, and anything past the
//! capacity falls off. Ties keep the earlier entry ahead.

use chrono::NaiveDate;
use organic_types::{
    LeaderboardEntry, LeaderboardPage, LeaderboardStats, ScoreSubmission, SubmitOutcome,
};
use tracing::{debug, info};

/// Default number of ranked entries kept.
pub const DEFAULT_CAPACITY: usize = 10;

/// Name reported as the top player of an empty board.
pub const UNKNOWN_PLAYER: &str = "unknown";

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Holds the ranked entry list.
pub trait LeaderboardStore {
    /// Entries in rank order.
    fn entries(&self) -> &[LeaderboardEntry];

    /// Replace the whole list.
    fn replace(&mut self, entries: Vec<LeaderboardEntry>);
}

/// Process-local [`LeaderboardStore`]. Lost on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    entries: Vec<LeaderboardEntry>,
}

impl InMemoryStore {
    /// Empty store.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store holding `entries` as given.
    pub const fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }
}

impl LeaderboardStore for InMemoryStore {
    fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    fn replace(&mut self, entries: Vec<LeaderboardEntry>) {
        self.entries = entries;
    }
}

/// Sample entries a fresh server starts with.
pub fn seed_entries() -> Vec<LeaderboardEntry> {
    [
        ("Quantum Scientist", 5000, 15, "2025-12-31", "Animal Cell"),
        ("Molecular Engineer", 4500, 14, "2025-12-30", "Plant Cell"),
        ("Life Explorer", 4200, 13, "2025-12-29", "Fungal Cell"),
        ("Element Collector", 3800, 12, "2025-12-28", "Prokaryotic Cell"),
        ("Synthesis Master", 3500, 11, "2025-12-27", "Viral Particle"),
    ]
    .into_iter()
    .zip(1_u32..)
    .map(|((name, score, level, date, cell), rank)| LeaderboardEntry {
        rank,
        player_name: name.to_owned(),
        score,
        level,
        date: date.to_owned(),
        cell_type: cell.to_owned(),
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// The global leaderboard.
#[derive(Debug, Clone)]
pub struct Leaderboard<S> {
    store: S,
    capacity: usize,
}

impl<S: LeaderboardStore> Leaderboard<S> {
    /// Board over `store` keeping at most `capacity` entries.
    pub const fn new(store: S, capacity: usize) -> Self {
        Self { store, capacity }
    }

    /// Maximum number of entries kept.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// All entries in rank order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        self.store.entries()
    }

    /// Up to `limit` entries starting at `offset`.
    pub fn page(&self, limit: usize, offset: usize) -> LeaderboardPage {
        let entries = self.store.entries();
        LeaderboardPage {
            leaderboard: entries.iter().skip(offset).take(limit).cloned().collect(),
            total: count_u32(entries.len()),
            has_more: offset.saturating_add(limit) < entries.len(),
        }
    }

    /// Submit a final score, dated `date`.
    ///
    /// A score that does not qualify leaves the board untouched and is
    /// reported as `success: false`. A qualifying score tied with the
    /// last place may still be pushed off by the truncation; that is
    /// also reported as a rejection.
    pub fn submit(&mut self, submission: ScoreSubmission, date: NaiveDate) -> SubmitOutcome {
        let entries = self.store.entries();
        let lowest = entries.last().map_or(0, |e| e.score);
        let has_room = entries.len() < self.capacity;

        if !has_room && submission.score <= lowest {
            debug!(
                player = %submission.player_name,
                score = submission.score,
                lowest,
                "score did not qualify for leaderboard"
            );
            return rejected(submission.score);
        }

        let mut ranked = entries.to_vec();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        let position = ranked.partition_point(|e| e.score >= submission.score);
        let score = submission.score;
        let player = submission.player_name.clone();
        ranked.insert(
            position,
            LeaderboardEntry {
                rank: 0,
                player_name: submission.player_name,
                score,
                level: submission.level,
                date: date.format("%Y-%m-%d").to_string(),
                cell_type: submission.cell_type,
            },
        );
        ranked.truncate(self.capacity);
        for (entry, rank) in ranked.iter_mut().zip(1_u32..) {
            entry.rank = rank;
        }
        let kept = position < ranked.len();
        self.store.replace(ranked);

        if !kept {
            debug!(player = %player, score, "score evicted by tie at last place");
            return rejected(score);
        }

        let rank = count_u32(position.saturating_add(1));
        info!(player = %player, score, rank, "leaderboard entry accepted");
        SubmitOutcome {
            success: true,
            rank: Some(rank),
            message: format!(
                "Congratulations! You reached rank {rank} on the global leaderboard!"
            ),
        }
    }

    /// First entry belonging to `player_name`.
    pub fn player_rank(&self, player_name: &str) -> Option<&LeaderboardEntry> {
        self.store
            .entries()
            .iter()
            .find(|e| e.player_name == player_name)
    }

    /// Aggregate statistics over the board.
    pub fn stats(&self) -> LeaderboardStats {
        let entries = self.store.entries();
        let count = u64::try_from(entries.len()).unwrap_or(u64::MAX);
        let total = entries
            .iter()
            .fold(0_u64, |sum, e| sum.saturating_add(e.score));
        let avg_score = total
            .saturating_add(count / 2)
            .checked_div(count)
            .unwrap_or(0);

        LeaderboardStats {
            total_players: count_u32(entries.len()),
            avg_score,
            max_score: entries.first().map_or(0, |e| e.score),
            min_score: entries.last().map_or(0, |e| e.score),
            top_player: entries
                .first()
                .map_or_else(|| UNKNOWN_PLAYER.to_owned(), |e| e.player_name.clone()),
        }
    }
}

fn rejected(score: u64) -> SubmitOutcome {
    SubmitOutcome {
        success: false,
        rank: None,
        message: format!("Your score {score} did not make the leaderboard."),
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
