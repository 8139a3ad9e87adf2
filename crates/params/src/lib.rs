//! Constant values for the octic tower field crates
//!
//! Byte sizes and build-time tower flags for each supported curve family.
//! Nothing in this crate depends on a field implementation, so the values
//! can be consumed by encoders that never touch the arithmetic.

#![no_std]

pub mod tower;
