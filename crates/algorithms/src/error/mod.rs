//! Error handling for tower field operations

use core::fmt;

use octic_api::Error as CoreError;

/// The error type for tower field operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed encoding: a coefficient is not a canonical field element
    Format {
        /// Type being decoded
        context: &'static str,
        /// What is wrong with the encoding
        details: &'static str,
    },
}

/// Result type for tower field operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            }
            Error::Format { context, details } => {
                write!(f, "Malformed {} encoding: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Format { context, details } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

pub mod validate;
