//! Constants for the octic tower over the BLS12-381 base field
//!
//! Tower: Fp2 = Fp[u]/(u² + 1), Fp4 = Fp2[v]/(v² − (1 + u)), Fp8 = Fp4[w]/(w² − v).

/// Size of the base-field modulus in bytes
pub const BLS12_381_MODULUS_BYTES: usize = 48;

/// Size of a serialized Fp element in bytes
pub const BLS12_381_FP_SIZE: usize = BLS12_381_MODULUS_BYTES;

/// Size of a serialized Fp2 element in bytes
pub const BLS12_381_FP2_SIZE: usize = 2 * BLS12_381_FP_SIZE;

/// Size of a serialized Fp4 element in bytes
pub const BLS12_381_FP4_SIZE: usize = 2 * BLS12_381_FP2_SIZE;

/// Size of a serialized Fp8 element in bytes
pub const BLS12_381_FP8_SIZE: usize = 2 * BLS12_381_FP4_SIZE;

/// Sign convention shared with point compression.
///
/// When set, the sign bit of an Fp element is "greater than (p − 1)/2" and a
/// composite element takes the sign of its imaginary part unless that part
/// is zero. When clear, the sign bit is the parity and the real part wins.
pub const BLS12_381_BIG_ENDIAN_SIGN: bool = true;

/// Whether multiplication by the Fp8 generator carries an extra negation
pub const BLS12_381_POSITIVE_TOWER: bool = false;
