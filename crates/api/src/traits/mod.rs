//! Traits shared across the octic crates

pub mod serialize;

pub use serialize::Serialize;
