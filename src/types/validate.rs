//! Cross-cutting validation helpers for construction parameters.

use crate::Decimal;
use crate::types::error::{BookError, BookResult};

/// Validates that a configuration value is strictly positive.
///
/// # Errors
///
/// Returns [`BookError::InvalidConfiguration`] naming the offending field.
pub fn ensure_positive(label: &str, value: Decimal) -> BookResult<()> {
    if value <= Decimal::ZERO {
        return Err(BookError::InvalidConfiguration(format!(
            "{} must be positive, got {}",
            label, value
        )));
    }
    Ok(())
}

/// Validates that a configuration string is non-empty.
///
/// # Errors
///
/// Returns [`BookError::InvalidConfiguration`] naming the offending field.
pub fn ensure_non_empty(label: &str, value: &str) -> BookResult<()> {
    if value.is_empty() {
        return Err(BookError::InvalidConfiguration(format!(
            "{} must not be empty",
            label
        )));
    }
    Ok(())
}
