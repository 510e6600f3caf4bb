//! Seeded linear congruential generator.

use crate::hash::seed_hash;

const MODULUS: u64 = 1 << 31;
const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;

/// A 31-bit linear congruential generator seeded from a string.
///
/// The recurrence is `state = (state * 1103515245 + 12345) mod 2^31`, and
/// [`SeededRng::next_f64`] returns `state / 2^31` in `[0, 1)`. The initial
/// state is the seed hash reduced into `[0, 2^31)`.
///
/// This generator exists for reproducibility, not statistical quality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Creates a generator from a seed string.
    pub fn new(seed: &str) -> Self {
        Self::from_hash(seed_hash(seed))
    }

    /// Creates a generator from an already-computed seed hash.
    pub fn from_hash(hash: i32) -> Self {
        // MODULUS fits in i64, and rem_euclid maps negative hashes into range.
        let state = i64::from(hash).rem_euclid(MODULUS as i64) as u64;
        Self { state }
    }

    /// Returns the current internal state.
    pub fn state(&self) -> u32 {
        self.state as u32
    }

    /// Advances the generator and returns the new 31-bit state.
    pub fn next_state(&mut self) -> u32 {
        // state < 2^31 and MULTIPLIER < 2^31, so the product fits in u64.
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as u32
    }

    /// Advances the generator and returns a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_state()) / MODULUS as f64
    }

    /// Returns a uniformly drawn index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    pub(crate) fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index bound must be non-zero");
        let idx = (self.next_f64() * bound as f64) as usize;
        idx.min(bound - 1)
    }
}
