//! Testing utilities for the octic tower field crates
pub mod strategies;

use octic_algorithms::Bls12381Fp8 as Fp8;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic element derived from a seed
pub fn fp8_from_seed(seed: u64) -> Fp8 {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    Fp8::random(&mut rng)
}
