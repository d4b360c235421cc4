//! # Array Generator
//!
//! Pseudo-random input arrays. Seeded once per run so a result row can be
//! reproduced from the logged seed.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Exclusive upper bound of generated values.
pub const VALUE_BOUND: i32 = 100_000;

/// Deterministic generator of values in `[0, VALUE_BOUND)`.
pub struct ArrayGenerator {
    /// Stream state.
    rng: ChaCha8Rng,
    /// Seed the stream started from.
    seed: u64,
}

impl ArrayGenerator {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        // Low 64 bits carry all the entropy a clock has.
        #[allow(clippy::cast_possible_truncation)]
        let seed = nanos as u64;
        Self::new(seed)
    }

    /// The seed this generator started from.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns `n` fresh values.
    pub fn generate(&mut self, n: usize) -> Vec<i32> {
        let mut values = vec![0; n];
        self.fill(&mut values);
        values
    }

    /// Overwrites `buffer` with fresh values.
    pub fn fill(&mut self, buffer: &mut [i32]) {
        for value in buffer.iter_mut() {
            *value = self.rng.gen_range(0..VALUE_BOUND);
        }
    }
}

impl std::fmt::Debug for ArrayGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayGenerator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
