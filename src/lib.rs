//! # octic
//!
//! Octic extension field arithmetic for pairing-based cryptography.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! octic = "0.1"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: `serde` support for field elements
//! - `trace`: Operation tracing through the `tracing` crate
//! - `rand`: Re-export of `rand` for callers of `random`
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`octic-api`]: Error types and the `Serialize` trait
//! - [`octic-params`]: Curve-family constants
//! - [`octic-algorithms`]: The tower fields and the generic `Fp8` engine
//!
//! ```
//! use octic::prelude::*;
//!
//! let x = Bls12381Fp8::one().mul_by_nonresidue();
//! let root = x.square().sqrt(None);
//! assert_eq!(root.square(), x.square());
//! ```
//!
//! Constant-time choices and zeroization use the re-exported crates:
//!
//! ```
//! use octic::prelude::*;
//! use octic::subtle::ConditionallySelectable;
//! use octic::zeroize::Zeroize;
//!
//! let one = Bls12381Fp8::one();
//! let mut x = Bls12381Fp8::conditional_select(&Bls12381Fp8::zero(), &one, octic::subtle::Choice::from(1));
//! assert_eq!(x, one);
//! x.zeroize();
//! assert!(bool::from(x.is_zero()));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use octic_algorithms as algorithms;
pub use octic_api as api;
pub use octic_params as params;

// Re-export workspace dependencies that appear in the public API
pub use subtle;
pub use zeroize;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for octic users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, Serialize};

    // Re-export the tower
    pub use crate::algorithms::{
        Bls12381Fp8, Bls12381Tower, Fp, Fp2, Fp4, Fp8, OcticTower, QuadraticExtension,
        QuarticExtension,
    };
}
