//! Game state, synthesis and local persistence for the Organic Life game.
//!
//! This crate owns everything that mutates: the player's state store, the
//! synthesis policy that spends elements on recipes, the animation queue,
//! the clock those depend on, and the local key-value persistence the
//! browser client uses between sessions.
//!
//! # Modules
//!
//! - [`store`] -- [`GameStore`], the explicit owner of player state
//! - [`synthesis`] -- Check-then-spend macromolecule synthesis
//! - [`animation`] -- Ephemeral animation event queue
//! - [`clock`] -- Injectable wall clock
//! - [`config`] -- YAML configuration with env overrides
//! - [`persist`] -- Local key-value storage and typed helpers
//! - [`requests`] -- Stale-response request tokens
//! - [`error`] -- [`GameError`]

pub mod animation;
pub mod clock;
pub mod config;
pub mod error;
pub mod persist;
pub mod requests;
pub mod store;
pub mod synthesis;

pub use animation::AnimationQueue;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, GameConfig, GameSettings, LogFormat};
pub use error::{ElementShortfall, GameError};
pub use persist::{LocalStore, MemoryLocalStore};
pub use requests::{RequestGuard, RequestToken};
pub use store::{GameStore, RewardSettings};
pub use synthesis::{SynthesisOutcome, synthesize, synthesize_by_id};
