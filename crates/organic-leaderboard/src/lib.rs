//! Global leaderboard for the Organic Life game.
//!
//! [`board`] holds the ranking rules and is usable on its own; the rest
//! of the crate exposes it as a JSON HTTP API over Axum.
//!
//! # Modules
//!
//! - [`board`] -- [`Leaderboard`] ranking and the [`LeaderboardStore`] seam
//! - [`state`] -- Shared [`AppState`]
//! - [`handlers`] -- Endpoint handlers
//! - [`router`] -- Route table and middleware
//! - [`server`] -- Bind and serve
//! - [`error`] -- [`LeaderboardError`]

pub mod board;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use board::{InMemoryStore, Leaderboard, LeaderboardStore, seed_entries};
pub use error::LeaderboardError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
