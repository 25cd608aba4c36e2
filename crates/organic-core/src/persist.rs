//! Local key-value persistence.
//!
//! The browser keeps a handful of values in local storage between
//! sessions. [`LocalStore`] models that storage as string keys and string
//! values; the typed helpers here encode each value as JSON.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use organic_content::timed::is_expired;
use organic_content::{SignInProgress, cell_by_id};
use organic_types::{LeaderboardEntry, PlayerState, TimedChallenge};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::GameError;

/// Key of the cached leaderboard snapshot.
pub const LEADERBOARD_KEY: &str = "organic-life-leaderboard";
/// Key of the last sign-in date.
pub const LAST_SIGN_IN_DATE_KEY: &str = "lastSignInDate";
/// Key of the current sign-in streak.
pub const SIGN_IN_STREAK_KEY: &str = "signInStreak";
/// Key of the total number of sign-in rewards claimed.
pub const SIGN_IN_REWARDS_CLAIMED_KEY: &str = "signInRewardsClaimed";
/// Key of the date the last sign-in reward was claimed.
pub const SIGN_IN_LAST_CLAIM_KEY: &str = "signInLastClaimDate";
/// Key of the running timed challenge.
pub const TIMED_CHALLENGE_KEY: &str = "currentTimedChallenge";

/// String key-value storage.
pub trait LocalStore {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Delete `key`.
    fn remove(&mut self, key: &str);
}

/// In-memory [`LocalStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocalStore {
    values: BTreeMap<String, String>,
}

impl MemoryLocalStore {
    /// Empty store.
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl LocalStore for MemoryLocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn read_json<T: DeserializeOwned>(
    store: &impl LocalStore,
    key: &str,
) -> Result<Option<T>, GameError> {
    store
        .get(key)
        .map(|raw| serde_json::from_str(&raw))
        .transpose()
        .map_err(|source| GameError::Persistence {
            key: key.to_owned(),
            source,
        })
}

fn write_json<T: Serialize + ?Sized>(
    store: &mut impl LocalStore,
    key: &str,
    value: &T,
) -> Result<(), GameError> {
    let raw = serde_json::to_string(value).map_err(|source| GameError::Persistence {
        key: key.to_owned(),
        source,
    })?;
    store.set(key, raw);
    Ok(())
}

// ---------------------------------------------------------------------------
// Leaderboard snapshot
// ---------------------------------------------------------------------------

/// Cache a leaderboard snapshot.
pub fn save_leaderboard(
    store: &mut impl LocalStore,
    entries: &[LeaderboardEntry],
) -> Result<(), GameError> {
    write_json(store, LEADERBOARD_KEY, entries)
}

/// The cached leaderboard snapshot, empty if none was saved.
pub fn load_leaderboard(store: &impl LocalStore) -> Result<Vec<LeaderboardEntry>, GameError> {
    Ok(read_json(store, LEADERBOARD_KEY)?.unwrap_or_default())
}

/// Number of finished games kept in the local leaderboard.
pub const LOCAL_LEADERBOARD_SIZE: usize = 10;

/// Add the finished game in `state` to the cached local leaderboard.
///
/// The snapshot is re-sorted by score, re-ranked and cut to
/// [`LOCAL_LEADERBOARD_SIZE`] before saving. Returns the new entry's rank,
/// or `None` if it did not make the cut. Ties keep earlier games ahead.
pub fn record_local_result(
    store: &mut impl LocalStore,
    player_name: &str,
    state: &PlayerState,
    date: NaiveDate,
) -> Result<Option<u32>, GameError> {
    let mut entries = load_leaderboard(store)?;
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    let position = entries.partition_point(|e| e.score >= state.score);
    let cell_type = cell_by_id(&state.current_cell_id)
        .map_or_else(|| state.current_cell_id.clone(), |cell| cell.name.to_owned());
    entries.insert(
        position,
        LeaderboardEntry {
            rank: 0,
            player_name: player_name.to_owned(),
            score: state.score,
            level: state.level,
            date: date.format("%Y-%m-%d").to_string(),
            cell_type,
        },
    );
    entries.truncate(LOCAL_LEADERBOARD_SIZE);
    for (entry, rank) in entries.iter_mut().zip(1_u32..) {
        entry.rank = rank;
    }
    save_leaderboard(store, &entries)?;

    Ok(entries.get(position).map(|entry| entry.rank))
}

// ---------------------------------------------------------------------------
// Sign-in
// ---------------------------------------------------------------------------

/// Persist sign-in progress under its individual keys.
pub fn save_sign_in(
    store: &mut impl LocalStore,
    progress: &SignInProgress,
) -> Result<(), GameError> {
    match progress.last_sign_in_date {
        Some(date) => write_json(store, LAST_SIGN_IN_DATE_KEY, &date)?,
        None => store.remove(LAST_SIGN_IN_DATE_KEY),
    }
    match progress.last_claim_date {
        Some(date) => write_json(store, SIGN_IN_LAST_CLAIM_KEY, &date)?,
        None => store.remove(SIGN_IN_LAST_CLAIM_KEY),
    }
    write_json(store, SIGN_IN_STREAK_KEY, &progress.streak)?;
    write_json(store, SIGN_IN_REWARDS_CLAIMED_KEY, &progress.rewards_claimed)
}

/// Load sign-in progress. Missing keys read as a fresh player.
pub fn load_sign_in(store: &impl LocalStore) -> Result<SignInProgress, GameError> {
    Ok(SignInProgress {
        last_sign_in_date: read_json::<NaiveDate>(store, LAST_SIGN_IN_DATE_KEY)?,
        streak: read_json(store, SIGN_IN_STREAK_KEY)?.unwrap_or(0),
        rewards_claimed: read_json(store, SIGN_IN_REWARDS_CLAIMED_KEY)?.unwrap_or(0),
        last_claim_date: read_json::<NaiveDate>(store, SIGN_IN_LAST_CLAIM_KEY)?,
    })
}

// ---------------------------------------------------------------------------
// Timed challenge
// ---------------------------------------------------------------------------

/// Persist the running timed challenge.
pub fn save_timed_challenge(
    store: &mut impl LocalStore,
    challenge: &TimedChallenge,
) -> Result<(), GameError> {
    write_json(store, TIMED_CHALLENGE_KEY, challenge)
}

/// Load the running timed challenge.
///
/// An expired challenge is removed from storage and reads as `None`.
pub fn load_timed_challenge(
    store: &mut impl LocalStore,
    now_ms: i64,
) -> Result<Option<TimedChallenge>, GameError> {
    let Some(challenge) = read_json::<TimedChallenge>(store, TIMED_CHALLENGE_KEY)? else {
        return Ok(None);
    };
    if is_expired(&challenge, now_ms) {
        tracing::debug!(id = %challenge.id, "dropping expired timed challenge");
        store.remove(TIMED_CHALLENGE_KEY);
        return Ok(None);
    }
    Ok(Some(challenge))
}

/// Forget the running timed challenge.
pub fn clear_timed_challenge(store: &mut impl LocalStore) {
    store.remove(TIMED_CHALLENGE_KEY);
}

#[cfg(test)]
mod tests {
    use organic_content::random::SequenceRandom;
    use organic_content::timed::generate_random_timed_challenge;

    use super::*;
    use crate::config::GameSettings;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leaderboard_snapshot_round_trip() {
        let mut store = MemoryLocalStore::new();
        assert!(load_leaderboard(&store).unwrap().is_empty());

        let entries = vec![LeaderboardEntry {
            rank: 1,
            player_name: "Ada".to_owned(),
            score: 900,
            level: 7,
            date: "2026-01-02".to_owned(),
            cell_type: "Plant Cell".to_owned(),
        }];
        save_leaderboard(&mut store, &entries).unwrap();
        assert_eq!(load_leaderboard(&store).unwrap(), entries);

        let raw = store.get(LEADERBOARD_KEY).unwrap();
        assert!(raw.contains("\"playerName\":\"Ada\""));
    }

    #[test]
    fn corrupt_value_is_a_persistence_error() {
        let mut store = MemoryLocalStore::new();
        store.set(LEADERBOARD_KEY, "{not json".to_owned());
        let err = load_leaderboard(&store).unwrap_err();
        assert!(matches!(err, GameError::Persistence { ref key, .. } if key == LEADERBOARD_KEY));
    }

    fn finished_game(score: u64, level: u32) -> PlayerState {
        let mut state = GameSettings::default().initial_state();
        state.score = score;
        state.level = level;
        state
    }

    #[test]
    fn local_result_is_ranked_and_saved() {
        let mut store = MemoryLocalStore::new();
        let day = date(2026, 5, 2);

        let rank = record_local_result(&mut store, "Ada", &finished_game(300, 4), day).unwrap();
        assert_eq!(rank, Some(1));
        let rank = record_local_result(&mut store, "Ada", &finished_game(500, 6), day).unwrap();
        assert_eq!(rank, Some(1));
        let rank = record_local_result(&mut store, "Ada", &finished_game(300, 3), day).unwrap();
        assert_eq!(rank, Some(3));

        let saved = load_leaderboard(&store).unwrap();
        let scores: Vec<(u32, u64, u32)> =
            saved.iter().map(|e| (e.rank, e.score, e.level)).collect();
        assert_eq!(scores, vec![(1, 500, 6), (2, 300, 4), (3, 300, 3)]);
        assert_eq!(saved[0].cell_type, "Prokaryotic Cell");
        assert_eq!(saved[0].date, "2026-05-02");
    }

    #[test]
    fn local_leaderboard_keeps_top_ten() {
        let mut store = MemoryLocalStore::new();
        let day = date(2026, 5, 2);
        for score in 1..=10 {
            let game = finished_game(score * 100, 2);
            assert!(record_local_result(&mut store, "Ada", &game, day).unwrap().is_some());
        }

        let low = record_local_result(&mut store, "Ada", &finished_game(50, 1), day).unwrap();
        assert!(low.is_none());
        let high = record_local_result(&mut store, "Ada", &finished_game(550, 5), day).unwrap();
        assert_eq!(high, Some(6));

        let saved = load_leaderboard(&store).unwrap();
        assert_eq!(saved.len(), LOCAL_LEADERBOARD_SIZE);
        assert_eq!(saved.last().map(|e| e.score), Some(200));
    }

    #[test]
    fn sign_in_round_trip() {
        let mut store = MemoryLocalStore::new();
        assert_eq!(load_sign_in(&store).unwrap(), SignInProgress::default());

        let mut progress = SignInProgress::default();
        let today = date(2026, 4, 1);
        progress.check_in(today);
        assert!(progress.claim(1, today).is_some());
        save_sign_in(&mut store, &progress).unwrap();

        assert_eq!(store.get(SIGN_IN_STREAK_KEY).as_deref(), Some("1"));
        assert_eq!(
            store.get(LAST_SIGN_IN_DATE_KEY).as_deref(),
            Some("\"2026-04-01\"")
        );
        assert_eq!(load_sign_in(&store).unwrap(), progress);
    }

    #[test]
    fn active_challenge_survives_reload() {
        let mut store = MemoryLocalStore::new();
        let mut rng = SequenceRandom::new(vec![0]);
        let challenge = generate_random_timed_challenge(&mut rng, 1_000);
        save_timed_challenge(&mut store, &challenge).unwrap();

        let loaded = load_timed_challenge(&mut store, 2_000).unwrap();
        assert_eq!(loaded, Some(challenge));
    }

    #[test]
    fn expired_challenge_is_dropped() {
        let mut store = MemoryLocalStore::new();
        let mut rng = SequenceRandom::new(vec![0]);
        let challenge = generate_random_timed_challenge(&mut rng, 1_000);
        save_timed_challenge(&mut store, &challenge).unwrap();

        let after_end = challenge.end_time + 1;
        assert!(load_timed_challenge(&mut store, after_end).unwrap().is_none());
        assert!(store.get(TIMED_CHALLENGE_KEY).is_none());
    }

    #[test]
    fn clear_forgets_challenge() {
        let mut store = MemoryLocalStore::new();
        let mut rng = SequenceRandom::new(vec![2]);
        let challenge = generate_random_timed_challenge(&mut rng, 0);
        save_timed_challenge(&mut store, &challenge).unwrap();
        clear_timed_challenge(&mut store);
        assert!(load_timed_challenge(&mut store, 0).unwrap().is_none());
    }
}
