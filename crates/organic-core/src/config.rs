//! Configuration loading and typed config structures for Organic Life.
//!
//! The canonical configuration lives in `organic-config.yaml` at the
//! project root. Every field has a default, so an empty or missing file
//! yields a playable game and a server on the default port.

use std::collections::BTreeMap;
use std::path::Path;

use organic_types::{Element, PlayerState, VITAL_MAX};
use serde::Deserialize;

/// Default score per monomer.
pub const MONOMER_SCORE_REWARD: u64 = 10;

/// Default score per macromolecule.
pub const MACROMOLECULE_SCORE_REWARD: u64 = 50;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `organic-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Initial player state and reward constants.
    #[serde(default)]
    pub game: GameSettings,

    /// Leaderboard service settings.
    #[serde(default)]
    pub leaderboard: LeaderboardSettings,

    /// HTTP bind address.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the bind address:
    /// - `ORGANIC_HOST` overrides `server.host`
    /// - `ORGANIC_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load from `path`, falling back to defaults when the file does not
    /// exist. Environment overrides apply either way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        let mut config = Self::default();
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.server.apply_env_overrides();
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// Initial player snapshot and reward constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSettings {
    /// Starting element inventory.
    #[serde(default = "default_initial_elements")]
    pub initial_elements: BTreeMap<Element, u32>,

    /// Starting energy (clamped to 100).
    #[serde(default = "default_vital")]
    pub initial_energy: u32,

    /// Starting health (clamped to 100).
    #[serde(default = "default_vital")]
    pub initial_health: u32,

    /// Starting cell type ID.
    #[serde(default = "default_initial_cell")]
    pub initial_cell: String,

    /// Score awarded per monomer.
    #[serde(default = "default_monomer_score_reward")]
    pub monomer_score_reward: u64,

    /// Score awarded per macromolecule.
    #[serde(default = "default_macromolecule_score_reward")]
    pub macromolecule_score_reward: u64,
}

impl GameSettings {
    /// The player state a new or reset game starts from.
    pub fn initial_state(&self) -> PlayerState {
        PlayerState {
            level: 1,
            score: 0,
            elements: self.initial_elements.clone(),
            monomers: Vec::new(),
            macromolecules: Vec::new(),
            health: self.initial_health.min(VITAL_MAX),
            energy: self.initial_energy.min(VITAL_MAX),
            current_cell_id: self.initial_cell.clone(),
            total_monomers_created: 0,
            total_macromolecules_created: 0,
            molecules_created: BTreeMap::new(),
            cells_unlocked: vec![self.initial_cell.clone()],
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            initial_elements: default_initial_elements(),
            initial_energy: default_vital(),
            initial_health: default_vital(),
            initial_cell: default_initial_cell(),
            monomer_score_reward: default_monomer_score_reward(),
            macromolecule_score_reward: default_macromolecule_score_reward(),
        }
    }
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// Leaderboard service settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeaderboardSettings {
    /// Maximum number of ranked entries kept.
    #[serde(default = "default_leaderboard_capacity")]
    pub capacity: usize,

    /// Whether to seed the board with sample entries at startup.
    #[serde(default = "default_true")]
    pub seed_entries: bool,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            capacity: default_leaderboard_capacity(),
            seed_entries: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// HTTP bind address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    /// Override host and port with `ORGANIC_HOST` / `ORGANIC_PORT` when set.
    ///
    /// An unparseable port is ignored with a warning.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ORGANIC_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("ORGANIC_PORT") {
            match val.parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = %val, error = %e, "ignoring invalid ORGANIC_PORT"),
            }
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Pretty,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_initial_elements() -> BTreeMap<Element, u32> {
    BTreeMap::from([
        (Element::Carbon, 10),
        (Element::Hydrogen, 15),
        (Element::Oxygen, 8),
        (Element::Nitrogen, 3),
        (Element::Phosphorus, 2),
        (Element::Sulfur, 1),
    ])
}

const fn default_vital() -> u32 {
    VITAL_MAX
}

fn default_initial_cell() -> String {
    "prokaryotic".to_owned()
}

const fn default_monomer_score_reward() -> u64 {
    MONOMER_SCORE_REWARD
}

const fn default_macromolecule_score_reward() -> u64 {
    MACROMOLECULE_SCORE_REWARD
}

const fn default_leaderboard_capacity() -> usize {
    10
}

const fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_owned()
}
