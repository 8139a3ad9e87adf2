//! Error type definitions for tower field operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for tower field operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Malformed encoding of a field element
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for tower field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping everything else
    pub fn with_context(mut self, context: &'static str) -> Self {
        match &mut self {
            Self::InvalidLength { context: c, .. }
            | Self::SerializationError { context: c, .. } => *c = context,
        }
        self
    }

    /// Attach a message (length errors carry none)
    #[cfg(feature = "std")]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidLength { .. } => {}
            Self::SerializationError { message: m, .. } => *m = message.into(),
        }
        self
    }

    /// Context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. } | Self::SerializationError { context, .. } => {
                *context
            }
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                return write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual);
            }
            Self::SerializationError { context, .. } => {
                write!(f, "Serialization error: {}", context)?
            }
        }

        #[cfg(feature = "std")]
        let message = match self {
            Self::InvalidLength { .. } => "",
            Self::SerializationError { message, .. } => message.as_str(),
        };
        #[cfg(not(feature = "std"))]
        let message = "";

        if !message.is_empty() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}
