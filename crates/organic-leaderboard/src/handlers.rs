//! REST API endpoint handlers for the leaderboard.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/health` | Liveness probe |
//! | `GET` | `/api/leaderboard` | One page of the board |
//! | `POST` | `/api/leaderboard/submit` | Submit a final score |
//! | `GET` | `/api/leaderboard/player/{name}` | A player's entry, or `null` |
//! | `GET` | `/api/leaderboard/stats` | Aggregate statistics |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use organic_types::{LeaderboardPage, LeaderboardStats, ScoreSubmission, SubmitOutcome};

use crate::error::LeaderboardError;
use crate::state::AppState;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 10;
/// Largest accepted page size.
pub const MAX_LIMIT: usize = 100;
/// Longest accepted player name, in characters.
pub const MAX_PLAYER_NAME_CHARS: usize = 50;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/leaderboard`.
#[derive(Debug, serde::Deserialize)]
pub struct PageQuery {
    /// Page size, 1 to 100 (default 10).
    pub limit: Option<usize>,
    /// Entries to skip (default 0).
    pub offset: Option<usize>,
}

fn validate_player_name(name: &str) -> Result<(), LeaderboardError> {
    let chars = name.chars().count();
    if chars == 0 || chars > MAX_PLAYER_NAME_CHARS {
        return Err(LeaderboardError::InvalidInput(format!(
            "playerName must be 1 to {MAX_PLAYER_NAME_CHARS} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness probe.
#[allow(clippy::unused_async)]
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// GET /api/leaderboard
// ---------------------------------------------------------------------------

/// Return one page of the leaderboard.
///
/// # Query Parameters
///
/// - `limit`: page size, 1 to 100 (default 10)
/// - `offset`: entries to skip (default 0)
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<LeaderboardPage>, LeaderboardError> {
    let Query(params) = query.map_err(|e| LeaderboardError::InvalidInput(e.body_text()))?;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(LeaderboardError::InvalidInput(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }
    let offset = params.offset.unwrap_or(0);

    let board = state.leaderboard.lock().await;
    Ok(Json(board.page(limit, offset)))
}

// ---------------------------------------------------------------------------
// POST /api/leaderboard/submit
// ---------------------------------------------------------------------------

/// Submit a final score.
///
/// A score too low to rank still answers `200` with `success: false`.
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ScoreSubmission>, JsonRejection>,
) -> Result<Json<SubmitOutcome>, LeaderboardError> {
    let Json(submission) = body.map_err(|e| LeaderboardError::InvalidInput(e.body_text()))?;
    validate_player_name(&submission.player_name)?;
    if submission.level < 1 {
        return Err(LeaderboardError::InvalidInput(String::from(
            "level must be at least 1",
        )));
    }

    let today = state.clock.today();
    let mut board = state.leaderboard.lock().await;
    Ok(Json(board.submit(submission, today)))
}

// ---------------------------------------------------------------------------
// GET /api/leaderboard/player/{name}
// ---------------------------------------------------------------------------

/// Return the named player's entry, or `null` if they are not ranked.
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, LeaderboardError> {
    validate_player_name(&name)?;
    let board = state.leaderboard.lock().await;
    let entry = serde_json::to_value(board.player_rank(&name))
        .map_err(|e| LeaderboardError::Internal(format!("JSON error: {e}")))?;
    Ok(Json(entry))
}

// ---------------------------------------------------------------------------
// GET /api/leaderboard/stats
// ---------------------------------------------------------------------------

/// Return aggregate statistics over the board.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<LeaderboardStats> {
    let board = state.leaderboard.lock().await;
    Json(board.stats())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_bounds() {
        assert!(validate_player_name("").is_err());
        assert!(validate_player_name("a").is_ok());
        assert!(validate_player_name(&"x".repeat(50)).is_ok());
        assert!(validate_player_name(&"x".repeat(51)).is_err());
    }

    #[test]
    fn player_name_counts_characters_not_bytes() {
        let name = "細".repeat(50);
        assert!(name.len() > MAX_PLAYER_NAME_CHARS);
        assert!(validate_player_name(&name).is_ok());
    }
}
