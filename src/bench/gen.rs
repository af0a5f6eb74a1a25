//! Synthetic benchmark inputs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Values drawn by the random generator fall in `0..RANDOM_DOMAIN`.
/// A small domain keeps accidental majorities plausible at small sizes.
const RANDOM_DOMAIN: i64 = 5;

/// Build an input with a guaranteed majority: the first `size / 2 + 1`
/// elements are 1, the remainder are 2.
pub fn majority_values(size: usize) -> Vec<i64> {
    let majority = size / 2 + 1;
    (0..size).map(|i| if i < majority { 1 } else { 2 }).collect()
}

/// Build a uniformly random input from a fixed seed. The same seed
/// always produces the same sequence.
pub fn random_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(0..RANDOM_DOMAIN)).collect()
}
