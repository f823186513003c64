//! Injectable randomness for the deal shuffle and computer draws.
//!
//! ## Key Types
//!
//! - `RandomSource`: the capability the engine asks for uniform indices
//! - `GameRng`: seeded ChaCha8 source used for real games
//! - `ScriptedRng`: replays a recorded index sequence, for tests
//!
//! ## Usage
//!
//! ```
//! use old_maid::core::{shuffle, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut cards = vec![1, 2, 3, 4, 5];
//! shuffle(&mut cards, &mut rng);
//!
//! cards.sort();
//! assert_eq!(cards, vec![1, 2, 3, 4, 5]);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `[0, upper)`. Callers never pass `upper == 0`.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Deterministic RNG for a single game.
///
/// Uses ChaCha8 so that the same seed always yields the same deal and the
/// same computer draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The seed is still recorded so a game can be reported and replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.gen_range_usize(0..upper)
    }
}

/// Replays a fixed sequence of indices, cycling when exhausted.
///
/// Each recorded value is reduced modulo the requested bound, so any
/// sequence is valid for any hand size. An empty script always yields 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a source that replays `values` in order.
    #[must_use]
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of indices handed out so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, upper: usize) -> usize {
        debug_assert!(upper > 0);
        if self.values.is_empty() {
            self.cursor += 1;
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}

/// Shuffle a slice in place with Fisher-Yates.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `[0, i]`, so every permutation is equally
/// likely when `rng` is uniform.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}
