//! Macromolecule synthesis.
//!
//! Synthesis checks every required element before touching the
//! inventory, so a failed attempt leaves the store exactly as it was.

use organic_content::{BiomoleculeRecipe, recipe_by_id};
use organic_types::{
    AnimationEvent, AnimationId, AnimationKind, MoleculeRecord, MoleculeRecordId, Position,
};

use crate::clock::Clock;
use crate::error::{ElementShortfall, GameError};
use crate::store::GameStore;

/// Lifetime of the particle burst shown on a successful synthesis.
pub const SYNTHESIS_PARTICLE_DURATION_MS: u64 = 600;

/// State after a successful synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOutcome {
    /// Recipe that was synthesized.
    pub recipe_id: &'static str,
    /// Score after synthesis.
    pub score: u64,
    /// Level after synthesis.
    pub level: u32,
    /// Energy after synthesis.
    pub energy: u32,
    /// Health after synthesis.
    pub health: u32,
}

/// Every element the store is short of for `recipe`, in recipe order.
pub fn shortfalls<C: Clock>(
    store: &GameStore<C>,
    recipe: &BiomoleculeRecipe,
) -> Vec<ElementShortfall> {
    recipe
        .requirements
        .iter()
        .filter_map(|&(element, required)| {
            let available = store.state().element(element);
            (available < required).then_some(ElementShortfall {
                element,
                required,
                available,
            })
        })
        .collect()
}

/// Synthesize `recipe`, consuming its elements and energy and restoring
/// health. A particle burst is shown at `position`.
///
/// # Errors
///
/// Returns [`GameError::InsufficientElements`] listing every shortfall
/// when the player cannot afford the recipe. Nothing is deducted.
pub fn synthesize<C: Clock>(
    store: &mut GameStore<C>,
    recipe: &BiomoleculeRecipe,
    position: Position,
) -> Result<SynthesisOutcome, GameError> {
    let missing = shortfalls(store, recipe);
    if !missing.is_empty() {
        tracing::debug!(recipe = recipe.id, ?missing, "synthesis rejected");
        return Err(GameError::InsufficientElements { missing });
    }

    for &(element, amount) in recipe.requirements {
        if amount > 0 {
            let removed = store.remove_element(element, amount);
            debug_assert!(removed, "shortfall check passed but {element} removal failed");
        }
    }

    store.create_macromolecule(
        MoleculeRecord {
            id: MoleculeRecordId::new(),
            definition_id: recipe.id.to_owned(),
            name: recipe.name.to_owned(),
            formula: recipe.formula.to_owned(),
            family: Some(recipe.family),
        },
        position,
    );
    store.update_energy(0_i64.saturating_sub(i64::from(recipe.energy_cost)));
    store.update_health(i64::from(recipe.health_reward));
    store.trigger_animation(AnimationEvent {
        id: AnimationId::new(),
        kind: AnimationKind::Particle,
        position,
        color: Some(recipe.color.to_owned()),
        text: None,
        duration_ms: SYNTHESIS_PARTICLE_DURATION_MS,
    });

    let state = store.state();
    tracing::debug!(
        recipe = recipe.id,
        score = state.score,
        level = state.level,
        "synthesis complete"
    );
    Ok(SynthesisOutcome {
        recipe_id: recipe.id,
        score: state.score,
        level: state.level,
        energy: state.energy,
        health: state.health,
    })
}

/// Synthesize the recipe with ID `recipe_id`.
///
/// # Errors
///
/// Returns [`GameError::UnknownRecipe`] if no such recipe exists, or any
/// error [`synthesize`] returns.
pub fn synthesize_by_id<C: Clock>(
    store: &mut GameStore<C>,
    recipe_id: &str,
    position: Position,
) -> Result<SynthesisOutcome, GameError> {
    let recipe =
        recipe_by_id(recipe_id).ok_or_else(|| GameError::UnknownRecipe(recipe_id.to_owned()))?;
    synthesize(store, recipe, position)
}
