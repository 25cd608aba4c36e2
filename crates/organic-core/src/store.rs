//! The game state store.
//!
//! [`GameStore`] owns the player's state, the animation queue and the
//! clock. It is created explicitly by its owner and dropped with it; there
//! is no global instance. Every mutation takes `&mut self`, so a
//! check-then-update such as [`GameStore::remove_element`] is a single
//! atomic step from the caller's point of view.

use organic_content::available_cells;
use organic_types::{
    AnimationEvent, AnimationId, AnimationKind, Element, GameStats, MoleculeRecord, PlayerState,
    Position, VITAL_MAX,
};

use crate::animation::AnimationQueue;
use crate::clock::Clock;
use crate::config::GameSettings;

/// Color of the floating "+N" text shown when a monomer is created.
pub const MONOMER_TEXT_COLOR: &str = "#84cc16";

/// Lifetime of the monomer floating text.
pub const MONOMER_TEXT_DURATION_MS: u64 = 1000;

/// Lifetime of the pulse shown where a macromolecule forms.
pub const MACROMOLECULE_PULSE_DURATION_MS: u64 = 600;

/// Score constants applied by the creation mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardSettings {
    /// Score per monomer.
    pub monomer: u64,
    /// Score per macromolecule.
    pub macromolecule: u64,
}

impl Default for RewardSettings {
    fn default() -> Self {
        let settings = GameSettings::default();
        Self {
            monomer: settings.monomer_score_reward,
            macromolecule: settings.macromolecule_score_reward,
        }
    }
}

/// Owner of the player's mutable game state.
#[derive(Debug)]
pub struct GameStore<C: Clock> {
    state: PlayerState,
    initial: PlayerState,
    rewards: RewardSettings,
    animations: AnimationQueue,
    clock: C,
}

impl<C: Clock> GameStore<C> {
    /// Store starting from `initial` with the default reward constants.
    pub fn new(initial: PlayerState, clock: C) -> Self {
        Self::with_rewards(initial, RewardSettings::default(), clock)
    }

    /// Store starting from `initial` with explicit reward constants.
    pub fn with_rewards(initial: PlayerState, rewards: RewardSettings, clock: C) -> Self {
        Self {
            state: initial.clone(),
            initial,
            rewards,
            animations: AnimationQueue::new(),
            clock,
        }
    }

    /// Store built from configured game settings.
    pub fn from_settings(settings: &GameSettings, clock: C) -> Self {
        let rewards = RewardSettings {
            monomer: settings.monomer_score_reward,
            macromolecule: settings.macromolecule_score_reward,
        };
        Self::with_rewards(settings.initial_state(), rewards, clock)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Current player state.
    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The clock driving this store.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Reward constants in effect.
    pub const fn rewards(&self) -> RewardSettings {
        self.rewards
    }

    /// Stats snapshot for achievement evaluation.
    pub fn stats(&self) -> GameStats {
        self.state.stats()
    }

    /// Live animation events, after dropping expired ones.
    pub fn animations(&mut self) -> Vec<&AnimationEvent> {
        self.expire_animations();
        self.animations.events().collect()
    }

    // -----------------------------------------------------------------------
    // Elements
    // -----------------------------------------------------------------------

    /// Add `amount` of `element`. Saturates at `u32::MAX`.
    pub fn add_element(&mut self, element: Element, amount: u32) {
        let count = self.state.elements.entry(element).or_insert(0);
        *count = count.saturating_add(amount);
    }

    /// Remove `amount` of `element`.
    ///
    /// Returns `false` and leaves the state unchanged when the player holds
    /// less than `amount`.
    pub fn remove_element(&mut self, element: Element, amount: u32) -> bool {
        let current = self.state.element(element);
        let Some(remaining) = current.checked_sub(amount) else {
            tracing::debug!(
                %element,
                requested = amount,
                available = current,
                "element removal rejected"
            );
            return false;
        };
        self.state.elements.insert(element, remaining);
        true
    }

    // -----------------------------------------------------------------------
    // Molecules
    // -----------------------------------------------------------------------

    /// Record a synthesized monomer and show the score gain at `position`.
    pub fn create_monomer(&mut self, record: MoleculeRecord, position: Position) {
        let reward = self.rewards.monomer;
        self.count_definition(&record.definition_id);
        self.state.monomers.push(record);
        self.state.score = self.state.score.saturating_add(reward);
        self.state.total_monomers_created = self.state.total_monomers_created.saturating_add(1);

        self.trigger_animation(AnimationEvent {
            id: AnimationId::new(),
            kind: AnimationKind::FloatingText,
            position,
            color: Some(MONOMER_TEXT_COLOR.to_owned()),
            text: Some(format!("+{reward}")),
            duration_ms: MONOMER_TEXT_DURATION_MS,
        });
    }

    /// Record a synthesized macromolecule and pulse at `position`.
    ///
    /// Every macromolecule also raises the level by one.
    pub fn create_macromolecule(&mut self, record: MoleculeRecord, position: Position) {
        self.count_definition(&record.definition_id);
        self.state.macromolecules.push(record);
        self.state.score = self.state.score.saturating_add(self.rewards.macromolecule);
        self.state.level = self.state.level.saturating_add(1);
        self.state.total_macromolecules_created =
            self.state.total_macromolecules_created.saturating_add(1);

        self.trigger_animation(AnimationEvent {
            id: AnimationId::new(),
            kind: AnimationKind::Pulse,
            position,
            color: None,
            text: None,
            duration_ms: MACROMOLECULE_PULSE_DURATION_MS,
        });
    }

    fn count_definition(&mut self, definition_id: &str) {
        let count = self
            .state
            .molecules_created
            .entry(definition_id.to_owned())
            .or_insert(0);
        *count = count.saturating_add(1);
    }

    // -----------------------------------------------------------------------
    // Vitals, score and cells
    // -----------------------------------------------------------------------

    /// Apply `delta` to energy, clamped to `0..=100`.
    pub fn update_energy(&mut self, delta: i64) {
        self.state.energy = apply_vital_delta(self.state.energy, delta);
    }

    /// Apply `delta` to health, clamped to `0..=100`.
    pub fn update_health(&mut self, delta: i64) {
        self.state.health = apply_vital_delta(self.state.health, delta);
    }

    /// Add reward points (sign-in, daily or timed challenge rewards).
    pub fn add_score(&mut self, points: u64) {
        self.state.score = self.state.score.saturating_add(points);
    }

    /// Show `cell_id`. Eligibility is the caller's concern.
    pub fn switch_cell(&mut self, cell_id: &str) {
        cell_id.clone_into(&mut self.state.current_cell_id);
    }

    /// Record `cell_id` as unlocked. Returns whether it was newly added.
    pub fn unlock_cell(&mut self, cell_id: &str) -> bool {
        if self.state.cells_unlocked.iter().any(|c| c == cell_id) {
            return false;
        }
        tracing::info!(cell = cell_id, "cell unlocked");
        self.state.cells_unlocked.push(cell_id.to_owned());
        true
    }

    /// Unlock every cell available at the current level and score.
    ///
    /// Returns the IDs that were newly unlocked.
    pub fn refresh_unlocked_cells(&mut self) -> Vec<&'static str> {
        available_cells(self.state.level, self.state.score)
            .into_iter()
            .filter(|cell| self.unlock_cell(cell.id))
            .map(|cell| cell.id)
            .collect()
    }

    /// Restore the initial snapshot and drop all animations.
    pub fn reset_game(&mut self) {
        self.state = self.initial.clone();
        self.animations.clear_all();
        tracing::debug!("game reset");
    }

    // -----------------------------------------------------------------------
    // Animations
    // -----------------------------------------------------------------------

    /// Queue `event`; it expires `duration_ms` from now.
    ///
    /// Elapsed events are dropped first, so the queue stays bounded even
    /// when nobody reads it.
    pub fn trigger_animation(&mut self, event: AnimationEvent) {
        let now = self.clock.now_ms();
        self.animations.expire(now);
        self.animations.push(event, now);
    }

    /// Drop elapsed animations. Returns how many were removed.
    pub fn expire_animations(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.animations.expire(now)
    }

    /// Remove one animation. Returns whether it existed.
    pub fn clear_animation(&mut self, id: AnimationId) -> bool {
        self.animations.clear(id)
    }
}

/// `current + delta`, clamped to `0..=VITAL_MAX`.
fn apply_vital_delta(current: u32, delta: i64) -> u32 {
    let raw = i64::from(current).saturating_add(delta);
    let clamped = raw.clamp(0, i64::from(VITAL_MAX));
    u32::try_from(clamped).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use organic_types::MoleculeRecordId;

    use super::*;
    use crate::clock::ManualClock;

    fn store() -> (GameStore<Arc<ManualClock>>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let store = GameStore::new(GameSettings::default().initial_state(), Arc::clone(&clock));
        (store, clock)
    }

    fn record(definition_id: &str) -> MoleculeRecord {
        MoleculeRecord {
            id: MoleculeRecordId::new(),
            definition_id: definition_id.to_owned(),
            name: definition_id.to_owned(),
            formula: String::new(),
            family: None,
        }
    }

    #[test]
    fn add_then_remove_element() {
        let (mut store, _) = store();
        store.add_element(Element::Sulfur, 4);
        assert_eq!(store.state().element(Element::Sulfur), 5);
        assert!(store.remove_element(Element::Sulfur, 5));
        assert_eq!(store.state().element(Element::Sulfur), 0);
    }

    #[test]
    fn removal_past_zero_is_rejected() {
        let (mut store, _) = store();
        let before = store.state().clone();
        assert!(!store.remove_element(Element::Nitrogen, 4));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn add_element_saturates() {
        let (mut store, _) = store();
        store.add_element(Element::Carbon, u32::MAX);
        assert_eq!(store.state().element(Element::Carbon), u32::MAX);
    }

    #[test]
    fn monomer_awards_ten_and_floats_text() {
        let (mut store, _) = store();
        store.create_monomer(record("amino_acid"), Position::new(12.0, 34.0));

        let state = store.state();
        assert_eq!(state.score, 10);
        assert_eq!(state.total_monomers_created, 1);
        assert_eq!(state.molecules_created.get("amino_acid"), Some(&1));
        assert_eq!(state.level, 1);

        let animations = store.animations();
        assert_eq!(animations.len(), 1);
        let text = animations.first().map(|a| (a.kind, a.text.clone(), a.color.clone()));
        assert_eq!(
            text,
            Some((
                AnimationKind::FloatingText,
                Some("+10".to_owned()),
                Some(MONOMER_TEXT_COLOR.to_owned())
            ))
        );
    }

    #[test]
    fn macromolecule_awards_fifty_and_levels_up() {
        let (mut store, _) = store();
        store.create_macromolecule(record("glucose"), Position::default());
        store.create_macromolecule(record("glucose"), Position::default());

        let state = store.state();
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 3);
        assert_eq!(state.total_macromolecules_created, 2);
        assert_eq!(state.macromolecules.len(), 2);
        assert_eq!(state.molecules_created.get("glucose"), Some(&2));
        assert_eq!(store.stats().molecules_created.len(), 1);

        let kinds: Vec<AnimationKind> = store.animations().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AnimationKind::Pulse, AnimationKind::Pulse]);
    }

    #[test]
    fn vitals_clamp_both_ways() {
        let (mut store, _) = store();
        store.update_energy(-250);
        assert_eq!(store.state().energy, 0);
        store.update_energy(30);
        assert_eq!(store.state().energy, 30);
        store.update_health(500);
        assert_eq!(store.state().health, 100);
        store.update_health(i64::MIN);
        assert_eq!(store.state().health, 0);
    }

    #[test]
    fn switch_cell_does_not_validate() {
        let (mut store, _) = store();
        store.switch_cell("viral");
        assert_eq!(store.state().current_cell_id, "viral");
    }

    #[test]
    fn refresh_unlocks_available_cells_once() {
        let (mut store, _) = store();
        store.add_score(150);
        store.create_macromolecule(record("dna"), Position::default());
        // level 2, score 200
        let unlocked = store.refresh_unlocked_cells();
        assert_eq!(unlocked, vec!["animal"]);
        assert!(store.refresh_unlocked_cells().is_empty());
        assert_eq!(store.stats().cells_unlocked, 2);
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let (mut store, _) = store();
        let initial = store.state().clone();
        store.create_monomer(record("nucleotide"), Position::default());
        store.update_energy(-40);
        store.switch_cell("animal");

        store.reset_game();
        assert_eq!(store.state(), &initial);
        assert!(store.animations().is_empty());
    }

    #[test]
    fn animations_expire_on_clock() {
        let (mut store, clock) = store();
        store.create_monomer(record("monosaccharide"), Position::default());
        clock.advance(999);
        assert_eq!(store.animations().len(), 1);
        clock.advance(1);
        assert!(store.animations().is_empty());
    }

    #[test]
    fn unread_queue_drops_elapsed_events() {
        let (mut store, clock) = store();
        for _ in 0..10_000 {
            store.create_monomer(record("amino_acid"), Position::default());
            clock.advance(5_000);
        }
        assert_eq!(store.animations.len(), 1);
    }

    #[test]
    fn clear_animation_by_id() {
        let (mut store, _) = store();
        let event = AnimationEvent {
            id: AnimationId::new(),
            kind: AnimationKind::Particle,
            position: Position::default(),
            color: None,
            text: None,
            duration_ms: 5000,
        };
        let id = event.id;
        store.trigger_animation(event);
        assert!(store.clear_animation(id));
        assert!(store.animations().is_empty());
    }

    #[test]
    fn custom_rewards_apply() {
        let clock = ManualClock::new(0);
        let settings = GameSettings {
            monomer_score_reward: 3,
            ..GameSettings::default()
        };
        let mut store = GameStore::from_settings(&settings, clock);
        store.create_monomer(record("fatty_acid"), Position::default());
        assert_eq!(store.state().score, 3);
        let text = store.animations().first().and_then(|a| a.text.clone());
        assert_eq!(text.as_deref(), Some("+3"));
    }
}
