//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Wraps each startup and serving failure so `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration loading or game setup failed.
    #[error("game error: {source}")]
    Game {
        /// The underlying game error.
        #[from]
        source: organic_core::GameError,
    },

    /// The leaderboard server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: organic_leaderboard::ServerError,
    },
}
