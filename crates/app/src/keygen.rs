//! Random key generation for demo runs.
//!
//! When no keys are scripted, we generate a small batch of distinct random
//! keys, the way the classroom demo seeds its table: a handful of values in
//! a small range so collisions are likely but not guaranteed.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed and
//! parameters, the generated keys are identical on every run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate `count` distinct keys in `[1, max]`.
///
/// If `count` exceeds the number of distinct values in range, the result is
/// capped at `max` keys.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `count`: how many keys to generate
/// - `max`: inclusive upper bound for key values
pub fn generate_keys(seed: u64, count: usize, max: u64) -> Vec<u64> {
    let count = count.min(max as usize);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut keys = Vec::with_capacity(count);

    while keys.len() < count {
        let key = rng.gen_range(1..=max);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys
}
