//! Validation utilities for tower field encodings

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        crate::trace::trace_rejected!(context, "length");
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a decoded coefficient is canonical
#[inline(always)]
pub fn canonical(is_canonical: bool, context: &'static str) -> Result<()> {
    if !is_canonical {
        crate::trace::trace_rejected!(context, "non-canonical coefficient");
        return Err(Error::Format {
            context,
            details: "coefficient is not below the field modulus",
        });
    }
    Ok(())
}
