//! Decimal helpers for deriving share counts and notionals.
//!
//! The rounding rule for share derivation lives here and nowhere else:
//! round-half-to-even to the nearest whole share (`Decimal::round`).

use rust_decimal::prelude::ToPrimitive;

use crate::Decimal;
use crate::types::error::{BookError, BookResult};

/// Derives a whole share count from a notional at the given price.
///
/// Uses round-half-to-even: a notional worth exactly 2.5 shares rounds to 2,
/// one worth 3.5 shares rounds to 4.
///
/// # Errors
///
/// Returns [`BookError::InvalidPrice`] if `price` is not positive, and
/// [`BookError::QuantityOutOfRange`] if the rounded count does not fit in an
/// `i64`.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::types::decimal::shares_for_notional;
///
/// assert_eq!(shares_for_notional(dec!(100_000), dec!(53.34)).unwrap(), 1875);
/// assert_eq!(shares_for_notional(dec!(-100_000), dec!(53.34)).unwrap(), -1875);
/// ```
pub fn shares_for_notional(notional: Decimal, price: Decimal) -> BookResult<i64> {
    if price <= Decimal::ZERO {
        return Err(BookError::InvalidPrice(format!(
            "price must be positive to derive shares, got {}",
            price
        )));
    }

    let shares = (notional / price).round();
    shares.to_i64().ok_or_else(|| {
        BookError::QuantityOutOfRange(format!("share count {} exceeds i64 range", shares))
    })
}

/// Derives a notional from a whole share count at the given price.
///
/// # Errors
///
/// Returns [`BookError::InvalidPrice`] if `price` is not positive.
pub fn notional_for_shares(shares: i64, price: Decimal) -> BookResult<Decimal> {
    if price <= Decimal::ZERO {
        return Err(BookError::InvalidPrice(format!(
            "price must be positive to derive notional, got {}",
            price
        )));
    }

    Ok(Decimal::from(shares) * price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dec;

    #[test]
    fn test_shares_for_notional_basic() {
        assert_eq!(shares_for_notional(dec!(100_000), dec!(53.34)).unwrap(), 1875);
        assert_eq!(shares_for_notional(dec!(100_000), dec!(43.30)).unwrap(), 2309);
        assert_eq!(shares_for_notional(dec!(100_000), dec!(239.87)).unwrap(), 417);
    }

    #[test]
    fn test_shares_for_notional_short() {
        assert_eq!(shares_for_notional(dec!(-100_000), dec!(27.56)).unwrap(), -3628);
    }

    #[test]
    fn test_rounding_half_to_even() {
        // 25 / 10 = 2.5 rounds to the even neighbour
        assert_eq!(shares_for_notional(dec!(25), dec!(10)).unwrap(), 2);
        // 35 / 10 = 3.5 also rounds to the even neighbour
        assert_eq!(shares_for_notional(dec!(35), dec!(10)).unwrap(), 4);
        assert_eq!(shares_for_notional(dec!(-25), dec!(10)).unwrap(), -2);
    }

    #[test]
    fn test_shares_for_notional_invalid_price() {
        assert!(matches!(
            shares_for_notional(dec!(100), dec!(0)),
            Err(BookError::InvalidPrice(_))
        ));
        assert!(matches!(
            shares_for_notional(dec!(100), dec!(-10)),
            Err(BookError::InvalidPrice(_))
        ));
    }

    #[test]
    fn test_notional_for_shares() {
        assert_eq!(notional_for_shares(1875, dec!(53.34)).unwrap(), dec!(100012.50));
        assert_eq!(notional_for_shares(-100, dec!(10)).unwrap(), dec!(-1000));
    }

    #[test]
    fn test_notional_for_shares_invalid_price() {
        assert!(matches!(
            notional_for_shares(100, dec!(0)),
            Err(BookError::InvalidPrice(_))
        ));
    }
}
