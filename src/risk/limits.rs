//! Gross-notional aggregation and limit checks.

use std::collections::HashMap;

use crate::Decimal;
use crate::instrument::Symbol;
use crate::position::Position;
use crate::types::error::BookResult;
use crate::types::validate::ensure_positive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregation policy for gross notional.
///
/// The default, [`GrossMode::Signed`], sums raw signed notionals across the
/// book, so offsetting long and short positions reduce the reported gross.
/// [`GrossMode::Absolute`] sums `|notional|` instead, the common real-world
/// convention for gross exposure. The choice is configuration, set once at
/// portfolio construction.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::risk::GrossMode;
///
/// assert_eq!(GrossMode::default(), GrossMode::Signed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrossMode {
    /// Sum of signed notionals. Long and short exposure offset.
    #[default]
    Signed,
    /// Sum of absolute notionals. Long and short exposure accumulate.
    Absolute,
}

/// Computes the gross notional of a positions mapping.
///
/// Pure and stateless: re-derivable from the mapping at any time. The
/// portfolio calls this after every mutation and never caches an aggregate
/// the mapping did not produce.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use trading_book_rs::dec;
/// use trading_book_rs::risk::{GrossMode, gross_notional};
///
/// let positions = HashMap::new();
/// assert_eq!(gross_notional(&positions, GrossMode::Signed), dec!(0));
/// ```
#[must_use]
pub fn gross_notional(positions: &HashMap<Symbol, Position>, mode: GrossMode) -> Decimal {
    match mode {
        GrossMode::Signed => positions.values().map(Position::notional).sum(),
        GrossMode::Absolute => positions.values().map(|p| p.notional().abs()).sum(),
    }
}

/// Maximum gross-notional exposure for one portfolio.
///
/// Configured once at construction and immutable thereafter. The breach
/// predicate is strict: exposure exactly at the limit is allowed.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::risk::GrossLimit;
///
/// let limit = GrossLimit::new(dec!(10_000_000)).unwrap();
/// assert_eq!(limit.max_gross_notional(), dec!(10_000_000));
/// assert!(GrossLimit::new(dec!(0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrossLimit {
    max_gross_notional: Decimal,
}

impl GrossLimit {
    /// Creates a new limit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::types::BookError::InvalidConfiguration`] if the limit
    /// is not strictly positive.
    pub fn new(max_gross_notional: Decimal) -> BookResult<Self> {
        ensure_positive("max gross notional", max_gross_notional)?;
        Ok(Self { max_gross_notional })
    }

    /// Returns the configured maximum.
    #[must_use]
    pub fn max_gross_notional(&self) -> Decimal {
        self.max_gross_notional
    }

    /// Returns true if `gross` exceeds the limit.
    #[must_use]
    pub fn is_breached(&self, gross: Decimal) -> bool {
        gross > self.max_gross_notional
    }
}
