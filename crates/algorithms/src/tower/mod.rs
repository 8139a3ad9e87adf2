//! Octic tower fields.
//!
//! [`Fp8`] is the generic degree-8 engine; [`bls12_381`] ships a complete
//! tower under it.

mod macros;

pub mod bls12_381;
mod fp8;
pub mod traits;

pub use fp8::Fp8;
pub use traits::{OcticTower, QuadraticExtension, QuarticExtension};
