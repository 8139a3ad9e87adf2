//! proptest strategies for tower field elements

use octic_algorithms::{Bls12381Fp8 as Fp8, Fp4};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::fp8_from_seed;

/// Uniformly random Fp8 elements
pub fn fp8() -> impl Strategy<Value = Fp8> {
    any::<u64>().prop_map(fp8_from_seed)
}

/// Random Fp8 elements other than zero
pub fn nonzero_fp8() -> impl Strategy<Value = Fp8> {
    fp8().prop_filter("element must be nonzero", |x| !bool::from(x.is_zero()))
}

/// Random elements of the real subfield
pub fn real_fp8() -> impl Strategy<Value = Fp8> {
    any::<u64>().prop_map(|seed| {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Fp8::from(Fp4::random(&mut rng))
    })
}

/// Byte buffers of any length except the encoded length
pub fn wrong_length_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
        .prop_filter("length must differ from the encoding", |v| {
            v.len() != Fp8::ENCODED_LEN
        })
}
