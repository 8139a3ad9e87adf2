//! Octic tower test suite
//!
//! Tests are organized by tower level.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

mod field;

/// Deterministic generator so failures reproduce
fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
