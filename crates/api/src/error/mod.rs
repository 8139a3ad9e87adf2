//! Error handling for the octic crates

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};

#[cfg(feature = "std")]
impl std::error::Error for Error {}
