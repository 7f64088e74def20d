//! Position construction and derived-share accounting.

use crate::Decimal;
use crate::instrument::Instrument;
use crate::types::decimal::{notional_for_shares, shares_for_notional};
use crate::types::error::{BookError, BookResult};

/// Net exposure to one instrument: signed notional plus derived share count.
///
/// At least one of notional and shares must be supplied at construction. When
/// shares are absent they are derived as `round(notional / price)` against the
/// instrument's current price (round-half-to-even), which requires that price
/// to be set. When shares are supplied they are authoritative: nothing is
/// recomputed from the notional.
///
/// The share count is a snapshot fixed at trade time. Later price updates on
/// the shared instrument change the derivation basis for *future* positions
/// only; an existing `Position` never changes.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::instrument::InstrumentRegistry;
/// use trading_book_rs::position::Position;
///
/// let mut registry = InstrumentRegistry::new();
/// let abc = registry.get_or_create("ABC");
/// abc.set_price(dec!(53.34)).unwrap();
///
/// let long = Position::from_notional(abc.clone(), dec!(100_000)).unwrap();
/// assert_eq!(long.shares(), 1875);
///
/// // A later price move does not touch the snapshot
/// abc.set_price(dec!(100.00)).unwrap();
/// assert_eq!(long.shares(), 1875);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    instrument: Instrument,
    notional: Decimal,
    shares: i64,
}

impl Position {
    /// Creates a position from optional notional and share quantities.
    ///
    /// # Errors
    ///
    /// - [`BookError::MissingQuantity`] if both quantities are absent
    /// - [`BookError::InvalidPrice`] if a derivation is required and the
    ///   instrument's price is unset or non-positive
    /// - [`BookError::QuantityOutOfRange`] if the derived share count does not
    ///   fit in an `i64`
    pub fn new(
        instrument: Instrument,
        notional: Option<Decimal>,
        shares: Option<i64>,
    ) -> BookResult<Self> {
        match (notional, shares) {
            (None, None) => Err(BookError::MissingQuantity(format!(
                "position on {} needs a notional or a share count",
                instrument.symbol()
            ))),
            // Shares are authoritative once supplied; the notional is taken as
            // given with no recomputation.
            (Some(notional), Some(shares)) => Ok(Self {
                instrument,
                notional,
                shares,
            }),
            (Some(notional), None) => {
                let price = Self::require_price(&instrument)?;
                let shares = shares_for_notional(notional, price)?;
                Ok(Self {
                    instrument,
                    notional,
                    shares,
                })
            }
            (None, Some(shares)) => {
                let price = Self::require_price(&instrument)?;
                let notional = notional_for_shares(shares, price)?;
                Ok(Self {
                    instrument,
                    notional,
                    shares,
                })
            }
        }
    }

    /// Creates a position from a signed notional, deriving the share count
    /// from the instrument's current price.
    ///
    /// # Errors
    ///
    /// See [`Position::new`].
    pub fn from_notional(instrument: Instrument, notional: Decimal) -> BookResult<Self> {
        Self::new(instrument, Some(notional), None)
    }

    /// Creates a position from a signed share count, deriving the notional
    /// from the instrument's current price.
    ///
    /// # Errors
    ///
    /// See [`Position::new`].
    pub fn from_shares(instrument: Instrument, shares: i64) -> BookResult<Self> {
        Self::new(instrument, None, Some(shares))
    }

    fn require_price(instrument: &Instrument) -> BookResult<Decimal> {
        instrument.price().ok_or_else(|| {
            BookError::InvalidPrice(format!("no price set for {}", instrument.symbol()))
        })
    }

    /// Returns the shared instrument handle.
    #[must_use]
    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// Returns the signed notional. Positive is long, negative is short.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.notional
    }

    /// Returns the signed share count fixed at construction.
    #[must_use]
    pub fn shares(&self) -> i64 {
        self.shares
    }

    /// Returns true if this is a long position.
    #[must_use]
    pub fn is_long(&self) -> bool {
        self.notional > Decimal::ZERO
    }

    /// Returns true if this is a short position.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.notional < Decimal::ZERO
    }

    /// Returns true if the position has been netted flat.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.notional.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;
    use crate::instrument::InstrumentRegistry;

    fn priced_instrument(symbol: &str, price: Decimal) -> Instrument {
        let mut registry = InstrumentRegistry::new();
        let instrument = registry.get_or_create(symbol);
        instrument.set_price(price).unwrap();
        instrument
    }

    #[test]
    fn test_from_notional_derives_shares() {
        let abc = priced_instrument("ABC", dec!(53.34));
        let position = Position::from_notional(abc, dec!(100_000)).unwrap();

        assert_eq!(position.notional(), dec!(100_000));
        assert_eq!(position.shares(), 1875);
        assert!(position.is_long());
    }

    #[test]
    fn test_from_notional_short() {
        let abc = priced_instrument("ABC", dec!(53.34));
        let position = Position::from_notional(abc, dec!(-100_000)).unwrap();

        assert_eq!(position.shares(), -1875);
        assert!(position.is_short());
    }

    #[test]
    fn test_missing_both_quantities() {
        let abc = priced_instrument("ABC", dec!(53.34));
        let result = Position::new(abc, None, None);

        assert!(matches!(result, Err(BookError::MissingQuantity(_))));
    }

    #[test]
    fn test_unset_price_fails_derivation() {
        let mut registry = InstrumentRegistry::new();
        let abc = registry.get_or_create("ABC");

        let result = Position::from_notional(abc.clone(), dec!(100_000));
        assert!(matches!(result, Err(BookError::InvalidPrice(_))));

        let result = Position::from_shares(abc, 100);
        assert!(matches!(result, Err(BookError::InvalidPrice(_))));
    }

    #[test]
    fn test_shares_authoritative_when_both_supplied() {
        let abc = priced_instrument("ABC", dec!(53.34));
        // Deliberately inconsistent pair: taken as given, no recomputation
        let position = Position::new(abc, Some(dec!(100_000)), Some(42)).unwrap();

        assert_eq!(position.notional(), dec!(100_000));
        assert_eq!(position.shares(), 42);
    }

    #[test]
    fn test_from_shares_derives_notional() {
        let abc = priced_instrument("ABC", dec!(50));
        let position = Position::from_shares(abc, 200).unwrap();

        assert_eq!(position.notional(), dec!(10_000));
        assert_eq!(position.shares(), 200);
    }

    #[test]
    fn test_shares_snapshot_survives_price_update() {
        let abc = priced_instrument("ABC", dec!(50));
        let position = Position::from_notional(abc.clone(), dec!(10_000)).unwrap();
        assert_eq!(position.shares(), 200);

        abc.set_price(dec!(100)).unwrap();

        // Derived shares stay fixed at trade time
        assert_eq!(position.shares(), 200);
        // A fresh position sees the moved price
        let fresh = Position::from_notional(abc, dec!(10_000)).unwrap();
        assert_eq!(fresh.shares(), 100);
    }

    #[test]
    fn test_flat_position() {
        let abc = priced_instrument("ABC", dec!(50));
        let position = Position::from_notional(abc, dec!(0)).unwrap();

        assert!(position.is_flat());
        assert!(!position.is_long());
        assert!(!position.is_short());
        assert_eq!(position.shares(), 0);
    }

    #[test]
    fn test_construction_does_not_mutate_instrument() {
        let abc = priced_instrument("ABC", dec!(50));
        let _ = Position::from_notional(abc.clone(), dec!(10_000)).unwrap();

        assert_eq!(abc.price(), Some(dec!(50)));
    }
}
