//! Error types for trading-book operations.

use thiserror::Error;

/// Errors that can occur in trading-book operations.
///
/// Construction-time errors abort the single failing operation and leave all
/// prior state untouched; a risk-limit breach is deliberately *not* an error
/// (see [`crate::risk::RiskLimitBreach`]).
///
/// # Example
///
/// ```rust
/// use trading_book_rs::types::BookError;
///
/// let err = BookError::InvalidPrice("price must be positive, got -1".to_string());
/// assert!(err.to_string().contains("positive"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Invalid construction parameters (empty name, non-positive limit).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Position built with neither notional nor shares.
    #[error("Missing quantity: {0}")]
    MissingQuantity(String),

    /// Price absent or non-positive where a derivation required one.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Symbol not present in the registry.
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// Derived share count not representable as a signed 64-bit integer.
    #[error("Quantity out of range: {0}")]
    QuantityOutOfRange(String),
}

/// Result type alias for trading-book operations.
pub type BookResult<T> = Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::InvalidConfiguration("name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: name must not be empty"
        );

        let err = BookError::MissingQuantity("notional or shares required".to_string());
        assert!(err.to_string().starts_with("Missing quantity"));

        let err = BookError::UnknownInstrument("XYZ".to_string());
        assert_eq!(err.to_string(), "Unknown instrument: XYZ");
    }

    #[test]
    fn test_error_equality() {
        let a = BookError::InvalidPrice("unset".to_string());
        let b = BookError::InvalidPrice("unset".to_string());
        assert_eq!(a, b);
        assert_ne!(a, BookError::InvalidPrice("other".to_string()));
    }
}
