//! Axum router construction for the leaderboard API.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the leaderboard server.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `GET /api/leaderboard` -- paged board
/// - `POST /api/leaderboard/submit` -- score submission
/// - `GET /api/leaderboard/player/{name}` -- single player entry
/// - `GET /api/leaderboard/stats` -- aggregate statistics
///
/// CORS allows any origin so the browser client can be served from
/// another host.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/leaderboard", get(handlers::get_leaderboard))
        .route("/api/leaderboard/submit", post(handlers::submit_score))
        .route("/api/leaderboard/player/{name}", get(handlers::get_player))
        .route("/api/leaderboard/stats", get(handlers::get_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
