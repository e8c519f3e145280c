//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the backend flows through this module. Each preset in a
//! batch gets its own generator, seeded by hashing the base seed with the
//! preset index, so inserting or removing one preset from a run does not
//! shift the randomness of the others.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed for one preset from the batch's base seed.
///
/// BLAKE3 over base seed ++ preset index, truncated to u32.
pub fn derive_preset_seed(base_seed: u32, preset_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&preset_index.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}

/// Creates the RNG for a specific preset in a batch.
pub fn create_preset_rng(base_seed: u32, preset_index: u32) -> Pcg32 {
    create_rng(derive_preset_seed(base_seed, preset_index))
}

/// Draws a base seed from OS entropy for unseeded runs.
pub fn seed_from_entropy() -> u32 {
    rand::random()
}

/// Uniform draw over `[lo, hi]`.
///
/// Expressed as `lo + r * (hi - lo)` rather than a `Uniform` distribution so
/// that reversed bounds (`lo > hi`) propagate instead of panicking: the draw
/// still lands within the interval's span.
pub fn random_float(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.gen::<f64>() * (hi - lo)
}

/// Uniform integer draw over `[lo, hi]` inclusive.
///
/// Reversed bounds are tolerated by swapping, since integer draws cannot
/// express a reversed span.
pub fn random_int(rng: &mut impl Rng, lo: i64, hi: i64) -> i64 {
    if lo <= hi {
        rng.gen_range(lo..=hi)
    } else {
        rng.gen_range(hi..=lo)
    }
}

/// Fair coin stored as the format's boolean encoding (`0.0` / `1.0`).
pub fn random_bool(rng: &mut impl Rng) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        0.0
    }
}

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random ASCII-alphabetic name, used for macro labels and fallback filenames.
pub fn random_name(rng: &mut impl Rng, length: usize) -> String {
    (0..length)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}
