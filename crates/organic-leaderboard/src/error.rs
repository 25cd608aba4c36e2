//! Error types for the leaderboard API.
//!
//! [`LeaderboardError`] converts into an Axum response carrying a JSON
//! body of the form `{"error": ..., "status": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors returned by leaderboard endpoints.
///
/// A score too low to rank is not an error; it is a normal
/// [`SubmitOutcome`](organic_types::SubmitOutcome) with `success: false`.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    /// A query parameter or request body failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for LeaderboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_bad_request() {
        let response = LeaderboardError::InvalidInput(String::from("limit")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_is_server_error() {
        let response = LeaderboardError::Internal(String::from("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
