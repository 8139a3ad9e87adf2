//! Public API traits and error types for the octic tower field crates
//!
//! This crate is the stable surface shared by the arithmetic crates and their
//! consumers: the common [`Error`] type and the byte [`Serialize`] trait.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};
pub use traits::Serialize;
