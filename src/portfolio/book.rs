//! The trading book: netting, aggregation, and limit checks.

use std::collections::HashMap;
use std::fmt;

use crate::Decimal;
use crate::instrument::Symbol;
use crate::position::Position;
use crate::risk::{
    BreachHandler, BreachNotifier, GrossLimit, GrossMode, RiskLimitBreach, gross_notional,
};
use crate::types::decimal::shares_for_notional;
use crate::types::error::{BookError, BookResult};
use crate::types::validate::ensure_non_empty;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an executed trade changed the book's entry for its symbol.
///
/// Numeric netting alone cannot tell a top-up from a short-covering flip, so
/// every execution reports which path it took. A [`NettingOutcome::Flipped`]
/// trade is logically two events (flattening the old exposure, then opening a
/// smaller one in the opposite direction), and collaborators that keep
/// trade-level history need to know that even though the net number is the
/// same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NettingOutcome {
    /// No prior entry for the symbol; the position was inserted as-is.
    Opened,
    /// Same direction as the prior entry, exposure grew (or reopened a flat
    /// entry).
    Increased,
    /// Same direction as the prior entry, exposure shrank but did not cross
    /// zero.
    Reduced,
    /// The trade exactly offset the prior entry; the net notional is zero.
    Flattened,
    /// The trade more than offset the prior entry; the book's direction for
    /// this symbol reversed.
    Flipped,
}

impl NettingOutcome {
    /// Returns true if the execution crossed the zero line into the opposite
    /// direction.
    #[must_use]
    pub fn is_direction_crossing(&self) -> bool {
        matches!(self, Self::Flipped)
    }
}

impl fmt::Display for NettingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opened => write!(f, "opened"),
            Self::Increased => write!(f, "increased"),
            Self::Reduced => write!(f, "reduced"),
            Self::Flattened => write!(f, "flattened"),
            Self::Flipped => write!(f, "flipped"),
        }
    }
}

/// Result of one accepted execution.
///
/// Carries the net state of the book's entry after the trade, the netting
/// path taken, and the breach event if the mutation pushed gross notional
/// over the limit. A present `breach` does not mean the trade was rejected;
/// it never is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecutionReport {
    /// Symbol the trade was executed against.
    pub symbol: Symbol,
    /// Netting path the execution took.
    pub outcome: NettingOutcome,
    /// Net notional for the symbol after the trade.
    pub notional: Decimal,
    /// Net share count for the symbol after the trade.
    pub shares: i64,
    /// Gross notional of the whole book after the trade.
    pub gross_notional: Decimal,
    /// Breach event, if the mutation pushed gross notional over the limit.
    pub breach: Option<RiskLimitBreach>,
}

/// Value copy of one book entry, for reporting collaborators.
///
/// `price` is the instrument's canonical price at snapshot time, `None` while
/// unset. Mutating a snapshot never affects the portfolio it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSnapshot {
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Net share count, fixed at the last netting.
    pub shares: i64,
    /// Net signed notional.
    pub notional: Decimal,
    /// Canonical instrument price at snapshot time.
    pub price: Option<Decimal>,
}

/// A trading book: at most one net position per instrument, with a gross
/// notional limit checked after every mutation.
///
/// The whole `execute_position` sequence (look up the existing entry, net,
/// replace, re-aggregate, check the limit) runs under one `&mut self`
/// borrow, making it a critical section per book. Callers sharing a portfolio
/// across threads wrap it in their own lock.
///
/// Breaching the limit is reported, never enforced: the engine is an exposure
/// tracker, not an order gate.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::instrument::InstrumentRegistry;
/// use trading_book_rs::portfolio::Portfolio;
/// use trading_book_rs::position::Position;
///
/// let mut registry = InstrumentRegistry::new();
/// let abc = registry.get_or_create("ABC");
/// abc.set_price(dec!(10)).unwrap();
///
/// let mut book = Portfolio::new("POD-001", dec!(100)).unwrap();
/// let report = book
///     .execute_position(Position::from_notional(abc, dec!(150)).unwrap())
///     .unwrap();
///
/// // Accepted, and the breach is reported alongside
/// assert_eq!(report.gross_notional, dec!(150));
/// assert_eq!(report.breach.as_ref().unwrap().limit, dec!(100));
/// ```
#[derive(Debug)]
pub struct Portfolio {
    name: String,
    limit: GrossLimit,
    gross_mode: GrossMode,
    positions: HashMap<Symbol, Position>,
    gross_notional: Decimal,
    notifier: BreachNotifier,
}

impl Portfolio {
    /// Creates an empty book.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::InvalidConfiguration`] if `name` is empty or
    /// `max_gross_notional` is not strictly positive.
    pub fn new(name: impl Into<String>, max_gross_notional: Decimal) -> BookResult<Self> {
        let name = name.into();
        ensure_non_empty("portfolio name", &name)?;
        let limit = GrossLimit::new(max_gross_notional)?;

        Ok(Self {
            name,
            limit,
            gross_mode: GrossMode::default(),
            positions: HashMap::new(),
            gross_notional: Decimal::ZERO,
            notifier: BreachNotifier::new(),
        })
    }

    /// Sets the gross-notional aggregation policy.
    #[must_use]
    pub fn with_gross_mode(mut self, mode: GrossMode) -> Self {
        self.gross_mode = mode;
        self.gross_notional = gross_notional(&self.positions, self.gross_mode);
        self
    }

    /// Registers a handler for risk-limit breach events.
    pub fn add_breach_handler(&mut self, handler: Box<dyn BreachHandler>) {
        self.notifier.add_handler(handler);
    }

    /// Executes a trade against the book.
    ///
    /// If the book has no entry for the symbol, the position is inserted
    /// as-is. Otherwise the incoming notional nets against the existing
    /// entry and the share count is recomputed at the instrument's *current*
    /// price: netting happens against the live market, not either trade's
    /// snapshot. The superseding entry replaces the old one; it is never
    /// deleted, even when netted flat.
    ///
    /// After the mutation, gross notional is recomputed over the whole map
    /// and checked against the limit. A breach is dispatched to registered
    /// handlers and returned on the report; the trade stays accepted.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::InvalidPrice`] if netting requires a share
    /// recomputation and the instrument's price is unset. The book is left
    /// untouched on error. Breaching the risk limit is *not* an error.
    pub fn execute_position(&mut self, position: Position) -> BookResult<ExecutionReport> {
        let symbol = position.instrument().symbol().clone();

        let (netted, outcome) = match self.positions.get(&symbol) {
            None => (position, NettingOutcome::Opened),
            Some(existing) => {
                let instrument = position.instrument().clone();
                let price = instrument.price().ok_or_else(|| {
                    BookError::InvalidPrice(format!(
                        "no price set for {}, cannot net against the live market",
                        symbol
                    ))
                })?;

                let previous = existing.notional();
                let new_notional = previous + position.notional();
                let new_shares = shares_for_notional(new_notional, price)?;
                let outcome = classify(previous, new_notional);

                let netted = Position::new(instrument, Some(new_notional), Some(new_shares))?;
                (netted, outcome)
            }
        };

        let notional = netted.notional();
        let shares = netted.shares();
        self.positions.insert(symbol.clone(), netted);
        self.gross_notional = gross_notional(&self.positions, self.gross_mode);

        let breach = if self.limit.is_breached(self.gross_notional) {
            let breach = RiskLimitBreach {
                symbol: symbol.clone(),
                gross_notional: self.gross_notional,
                limit: self.limit.max_gross_notional(),
            };
            self.notifier.notify(&breach);
            Some(breach)
        } else {
            None
        };

        tracing::debug!(
            portfolio = %self.name,
            symbol = %symbol,
            outcome = %outcome,
            notional = %notional,
            gross_notional = %self.gross_notional,
            "position executed"
        );

        Ok(ExecutionReport {
            symbol,
            outcome,
            notional,
            shares,
            gross_notional: self.gross_notional,
            breach,
        })
    }

    /// Removes the entry for `symbol` and recomputes gross notional.
    ///
    /// Returns the removed position, or `None` if the book had no entry.
    pub fn remove_position(&mut self, symbol: &Symbol) -> Option<Position> {
        let removed = self.positions.remove(symbol)?;
        self.gross_notional = gross_notional(&self.positions, self.gross_mode);
        Some(removed)
    }

    /// Returns a value-copy snapshot of every book entry.
    ///
    /// Prices are read from the canonical instruments at snapshot time.
    /// The returned map is independent of the book: mutating it never
    /// affects a later call.
    #[must_use]
    pub fn positions(&self) -> HashMap<Symbol, PositionSnapshot> {
        self.positions
            .iter()
            .map(|(symbol, position)| {
                (
                    symbol.clone(),
                    PositionSnapshot {
                        symbol: symbol.clone(),
                        shares: position.shares(),
                        notional: position.notional(),
                        price: position.instrument().price(),
                    },
                )
            })
            .collect()
    }

    /// Returns the book's entry for `symbol`, if any.
    #[must_use]
    pub fn position(&self, symbol: &Symbol) -> Option<&Position> {
        self.positions.get(symbol)
    }

    /// Returns the gross notional under the configured aggregation policy.
    #[must_use]
    pub fn gross_notional(&self) -> Decimal {
        self.gross_notional
    }

    /// Returns the portfolio name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured maximum gross notional.
    #[must_use]
    pub fn max_gross_notional(&self) -> Decimal {
        self.limit.max_gross_notional()
    }

    /// Returns the configured aggregation policy.
    #[must_use]
    pub fn gross_mode(&self) -> GrossMode {
        self.gross_mode
    }

    /// Returns the number of entries in the book, flat entries included.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the book has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Classifies a netting step by the prior and resulting net notionals.
fn classify(previous: Decimal, new: Decimal) -> NettingOutcome {
    if new.is_zero() {
        NettingOutcome::Flattened
    } else if previous.is_zero() {
        NettingOutcome::Increased
    } else if (previous > Decimal::ZERO) == (new > Decimal::ZERO) {
        if new.abs() >= previous.abs() {
            NettingOutcome::Increased
        } else {
            NettingOutcome::Reduced
        }
    } else {
        NettingOutcome::Flipped
    }
}
