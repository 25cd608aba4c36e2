//! Request and response payloads for the leaderboard API.
//!
//! Field names are camelCase on the wire so the browser client can use
//! the generated `TypeScript` bindings directly.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::structs::LeaderboardEntry;

/// A page of the global leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LeaderboardPage {
    /// Entries in rank order.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Total entries on the board.
    pub total: u32,
    /// Whether entries exist beyond this page.
    pub has_more: bool,
}

/// Body of a score submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ScoreSubmission {
    /// Display name, 1 to 50 characters.
    pub player_name: String,
    /// Final score.
    pub score: u64,
    /// Final level (at least 1).
    pub level: u32,
    /// Cell type name at submission time.
    pub cell_type: String,
}

/// Result of a score submission.
///
/// A score too low to enter the board is reported with `success: false`;
/// it is an informational outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SubmitOutcome {
    /// Whether the score entered the board.
    pub success: bool,
    /// New rank when accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Human-readable result.
    pub message: String,
}

/// Aggregate statistics over the current board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LeaderboardStats {
    /// Number of entries on the board.
    pub total_players: u32,
    /// Mean score, rounded to the nearest integer (0 when empty).
    pub avg_score: u64,
    /// Highest score (0 when empty).
    pub max_score: u64,
    /// Lowest score (0 when empty).
    pub min_score: u64,
    /// Name of the rank-1 player.
    pub top_player: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_outcome_omits_rank() {
        let outcome = SubmitOutcome {
            success: false,
            rank: None,
            message: String::from("too low"),
        };
        let json = serde_json::to_value(&outcome).unwrap_or_default();
        assert!(json.get("rank").is_none());
        assert_eq!(json["success"], false);
    }

    #[test]
    fn submission_reads_camel_case() {
        let body = r#"{"playerName":"Ada","score":120,"level":3,"cellType":"Plant Cell"}"#;
        let parsed: Result<ScoreSubmission, _> = serde_json::from_str(body);
        assert!(parsed.is_ok());
        if let Ok(sub) = parsed {
            assert_eq!(sub.player_name, "Ada");
            assert_eq!(sub.score, 120);
        }
    }
}
