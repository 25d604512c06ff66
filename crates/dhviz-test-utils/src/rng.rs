//! Deterministic RNG utilities for reproducible tests.

use std::f64::consts::PI;

use dhviz_core::{Chain, JointKind, JointParameter};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generate a chain of `len` joints with every parameter drawn at random.
///
/// Lengths and offsets fall in `[-2, 2]`, angles in `[-pi, pi]`, and the
/// kind is a coin flip.
pub fn random_chain(len: usize, seed: u64) -> Chain {
    let mut rng = seeded_rng(seed);
    (0..len)
        .map(|_| {
            let kind = if rng.gen_bool(0.5) {
                JointKind::Revolute
            } else {
                JointKind::Prismatic
            };
            JointParameter::new(
                kind,
                rng.gen_range(-2.0..=2.0),
                rng.gen_range(-PI..=PI),
                rng.gen_range(-2.0..=2.0),
                rng.gen_range(-PI..=PI),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
