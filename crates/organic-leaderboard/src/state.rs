//! Shared application state for the leaderboard API.
//!
//! The whole board sits behind one [`Mutex`]. A submission's
//! check, insert, re-sort and re-rank all happen under a single lock, and
//! readers take the same lock, so no request ever sees a half-ranked list.

use std::sync::Arc;

use organic_core::Clock;
use organic_core::config::LeaderboardSettings;
use tokio::sync::Mutex;

use crate::board::{InMemoryStore, Leaderboard, seed_entries};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
pub struct AppState {
    /// The global leaderboard.
    pub leaderboard: Mutex<Leaderboard<InMemoryStore>>,
    /// Source of submission dates.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl AppState {
    /// State over an existing board.
    pub fn new(
        leaderboard: Leaderboard<InMemoryStore>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            leaderboard: Mutex::new(leaderboard),
            clock,
        }
    }

    /// State built from configuration, seeded with the sample entries
    /// when `settings.seed_entries` is set.
    pub fn from_settings(
        settings: &LeaderboardSettings,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        let entries = if settings.seed_entries {
            seed_entries().into_iter().take(settings.capacity).collect()
        } else {
            Vec::new()
        };
        let board = Leaderboard::new(InMemoryStore::with_entries(entries), settings.capacity);
        Self::new(board, clock)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("now_ms", &self.clock.now_ms())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use organic_core::ManualClock;

    use super::*;

    #[tokio::test]
    async fn seeding_respects_capacity() {
        let settings = LeaderboardSettings {
            capacity: 3,
            seed_entries: true,
        };
        let state = AppState::from_settings(&settings, Arc::new(ManualClock::new(0)));
        let board = state.leaderboard.lock().await;
        assert_eq!(board.entries().len(), 3);
        assert_eq!(board.capacity(), 3);
    }

    #[tokio::test]
    async fn unseeded_board_is_empty() {
        let settings = LeaderboardSettings {
            capacity: 10,
            seed_entries: false,
        };
        let state = AppState::from_settings(&settings, Arc::new(ManualClock::new(0)));
        assert!(state.leaderboard.lock().await.entries().is_empty());
    }
}
