// Reproducible, non-secure integer draws
//
// Deliberately separate from `random::source`: these draws accept a
// caller-supplied seed and must never share a code path with salt or
// password generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur during seeded draws
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeededError {
    #[error("empty range: start {start} exceeds end {end}")]
    EmptyRange { start: i64, end: i64 },

    #[error("range must be positive")]
    ZeroRange,
}

fn rng_from_seed(seed: &[u8]) -> StdRng {
    let digest = Sha256::digest(seed);
    let mut key = [0u8; 32];
    key.copy_from_slice(digest.as_slice());
    StdRng::from_seed(key)
}

/// Random integer in `[start, end]`, inclusive on both ends.
///
/// With a seed the result is a pure function of `(start, end, seed)`;
/// without one the draw uses OS entropy. Either way the generator is a
/// private per-call instance, never a reseeded global.
pub fn rand_int(start: i64, end: i64, seed: Option<&[u8]>) -> Result<i64, SeededError> {
    if start > end {
        return Err(SeededError::EmptyRange { start, end });
    }
    let mut rng = match seed {
        Some(seed) => rng_from_seed(seed),
        None => StdRng::from_entropy(),
    };
    Ok(rng.gen_range(start..=end))
}

/// Value in `[0, range)` derived from the seed bytes.
///
/// Always seeded; the same `(range, seed)` pair yields the same value.
pub fn pick(range: u64, seed: &[u8]) -> Result<u64, SeededError> {
    if range == 0 {
        return Err(SeededError::ZeroRange);
    }
    Ok(rng_from_seed(seed).gen_range(0..range))
}
