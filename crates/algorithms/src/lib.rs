//! Octic tower field arithmetic with constant-time implementation
//!
//! This crate provides the degree-8 extension field used by pairing-based
//! signature schemes over high-embedding-degree curves: Fp8 built as a
//! quadratic extension of a quartic sub-field Fp4, itself a quadratic
//! extension of Fp2 over the base prime field.
//!
//! The [`tower::Fp8`] engine is generic over an [`tower::OcticTower`]
//! configuration; a complete tower over the BLS12-381 base field ships in
//! [`tower::bls12_381`].
//!
//! # Security Features
//!
//! - Branch decisions inside square-root extraction use constant-time
//!   selection from [`subtle`]
//! - Field elements implement [`zeroize::DefaultIsZeroes`]
//! - No `unsafe` code

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Optional operation tracing
mod trace;

// Tower field arithmetic
pub mod tower;
pub use tower::{
    bls12_381::{Bls12381Tower, Fp, Fp2, Fp4, Fp8 as Bls12381Fp8},
    Fp8, OcticTower, QuadraticExtension, QuarticExtension,
};
