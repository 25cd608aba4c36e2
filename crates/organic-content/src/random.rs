//! Injectable randomness for content selection.
//!
//! Derivations that pick from a table take a [`RandomSource`] instead of
//! reaching for a global generator, so tests can script the outcome.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of uniform table indices.
pub trait RandomSource {
    /// A uniform index in `0..len`, or `None` when `len` is zero.
    fn next_index(&mut self, len: usize) -> Option<usize>;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }
}

/// The thread-local generator used outside tests.
pub type ThreadRandom = RngSource<ThreadRng>;

impl ThreadRandom {
    /// Source backed by [`rand::rng`].
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested length.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    /// Source that yields `values` in order.
    pub const fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, len: usize) -> Option<usize> {
        let position = self.cursor.checked_rem(self.values.len())?;
        let value = self.values.get(position).copied()?;
        self.cursor = self.cursor.wrapping_add(1);
        value.checked_rem(len)
    }
}
