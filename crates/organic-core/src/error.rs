//! Error types for the organic-core crate.
//!
//! Game-state operations that can fail return typed errors rather than
//! panicking. A failed operation never leaves the store half-updated.

use organic_types::Element;

use crate::config::ConfigError;

/// Amount of one element a recipe needs beyond what the player holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementShortfall {
    /// The element that is short.
    pub element: Element,
    /// Amount the recipe requires.
    pub required: u32,
    /// Amount the player holds.
    pub available: u32,
}

impl core::fmt::Display for ElementShortfall {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}/{}", self.element, self.available, self.required)
    }
}

/// Errors that can occur during game-state operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A recipe needs more elements than the player holds.
    #[error("insufficient elements: {}", describe_shortfalls(.missing))]
    InsufficientElements {
        /// Every element that is short, in inventory order.
        missing: Vec<ElementShortfall>,
    },

    /// No recipe exists with the given ID.
    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    /// A persisted value could not be encoded or decoded.
    #[error("failed to persist {key}: {source}")]
    Persistence {
        /// Storage key involved.
        key: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn describe_shortfalls(missing: &[ElementShortfall]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortfall_message_lists_every_element() {
        let err = GameError::InsufficientElements {
            missing: vec![
                ElementShortfall {
                    element: Element::Carbon,
                    required: 10,
                    available: 4,
                },
                ElementShortfall {
                    element: Element::Nitrogen,
                    required: 4,
                    available: 3,
                },
            ],
        };
        assert_eq!(err.to_string(), "insufficient elements: C 4/10, N 3/4");
    }

    #[test]
    fn config_failure_converts() {
        let err = crate::config::GameConfig::parse("game: [unclosed").map_err(GameError::from);
        assert!(matches!(err, Err(GameError::Config(ConfigError::Yaml { .. }))));
    }

    #[test]
    fn unknown_recipe_message() {
        let err = GameError::UnknownRecipe(String::from("cellulose"));
        assert_eq!(err.to_string(), "unknown recipe: cellulose");
    }
}
