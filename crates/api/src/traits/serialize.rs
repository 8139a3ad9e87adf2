//! Traits for byte serialization of field elements.

use alloc::vec::Vec;

use crate::Result;

/// A trait for public types with a fixed-length byte encoding.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    ///
    /// The slice must have exactly the encoded length; implementations never
    /// pad, truncate or reduce their input.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
