//! Canonical instrument entities and the registry that owns them.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::Decimal;
use crate::instrument::Symbol;
use crate::types::error::{BookError, BookResult};

/// Shared interior of an instrument handle.
#[derive(Debug)]
struct InstrumentInner {
    symbol: Symbol,
    /// `None` until the first price update. Unset is a distinct state, never a
    /// negative sentinel.
    price: RwLock<Option<Decimal>>,
}

/// A canonical, shared price-bearing entity identified by a trading symbol.
///
/// `Instrument` is a cheap-to-clone handle: every clone refers to the same
/// underlying entity, so a price update made through any handle is observed by
/// all of them on their next read. Handles are only created through
/// [`InstrumentRegistry::get_or_create`], which guarantees at most one entity
/// per symbol within the registry's scope.
///
/// Price updates do **not** recompute the derived share count on positions
/// already built from this instrument; shares are fixed at trade time.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::instrument::InstrumentRegistry;
///
/// let mut registry = InstrumentRegistry::new();
/// let abc = registry.get_or_create("ABC");
///
/// assert_eq!(abc.price(), None);
/// abc.set_price(dec!(53.34)).unwrap();
/// assert_eq!(abc.price(), Some(dec!(53.34)));
/// ```
#[derive(Debug, Clone)]
pub struct Instrument {
    inner: Arc<InstrumentInner>,
}

impl Instrument {
    /// Creates a new instrument with no price set. Registry-only.
    pub(crate) fn new(symbol: Symbol) -> Self {
        Self {
            inner: Arc::new(InstrumentInner {
                symbol,
                price: RwLock::new(None),
            }),
        }
    }

    /// Returns the instrument's symbol.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.inner.symbol
    }

    /// Returns the current price, or `None` if no price has been set.
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        *self.inner.price.read().unwrap()
    }

    /// Updates the canonical price in place.
    ///
    /// All outstanding handles observe the new price on their next read.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::InvalidPrice`] if `price` is not strictly positive.
    pub fn set_price(&self, price: Decimal) -> BookResult<()> {
        if price <= Decimal::ZERO {
            return Err(BookError::InvalidPrice(format!(
                "price for {} must be positive, got {}",
                self.inner.symbol, price
            )));
        }

        *self.inner.price.write().unwrap() = Some(price);
        Ok(())
    }

    /// Returns true if both handles refer to the same underlying entity.
    #[must_use]
    pub fn same_instance(&self, other: &Instrument) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Equality is identity by symbol; within one registry scope that coincides
/// with entity identity.
impl PartialEq for Instrument {
    fn eq(&self, other: &Self) -> bool {
        self.inner.symbol == other.inner.symbol
    }
}

impl Eq for Instrument {}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price() {
            Some(price) => write!(f, "{} @ {}", self.inner.symbol, price),
            None => write!(f, "{} @ unset", self.inner.symbol),
        }
    }
}

/// Registry owning one canonical [`Instrument`] per symbol.
///
/// An explicit value with explicit scope: two registries are two universes of
/// instruments. Instruments are created on first reference and live for the
/// registry's lifetime; there is no removal.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::instrument::{InstrumentRegistry, Symbol};
///
/// let mut registry = InstrumentRegistry::new();
/// registry.get_or_create("ABC");
/// registry.set_price(&Symbol::new("ABC"), dec!(53.34)).unwrap();
///
/// assert_eq!(registry.price(&Symbol::new("ABC")), Some(dec!(53.34)));
/// ```
#[derive(Debug, Default)]
pub struct InstrumentRegistry {
    instruments: HashMap<Symbol, Instrument>,
}

impl InstrumentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical instrument for `symbol`, creating it on first
    /// reference.
    ///
    /// Every call with the same symbol returns a handle to the same entity.
    pub fn get_or_create(&mut self, symbol: impl Into<Symbol>) -> Instrument {
        let symbol = symbol.into();
        self.instruments
            .entry(symbol.clone())
            .or_insert_with(|| Instrument::new(symbol))
            .clone()
    }

    /// Returns the instrument for `symbol` if it has been registered.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<Instrument> {
        self.instruments.get(symbol).cloned()
    }

    /// Updates the canonical price for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::UnknownInstrument`] if the symbol was never
    /// registered, or [`BookError::InvalidPrice`] if `price` is not strictly
    /// positive.
    pub fn set_price(&self, symbol: &Symbol, price: Decimal) -> BookResult<()> {
        let instrument = self
            .instruments
            .get(symbol)
            .ok_or_else(|| BookError::UnknownInstrument(symbol.to_string()))?;
        instrument.set_price(price)
    }

    /// Returns the current price for `symbol`, or `None` if the symbol is
    /// unregistered or its price is unset.
    #[must_use]
    pub fn price(&self, symbol: &Symbol) -> Option<Decimal> {
        self.instruments.get(symbol).and_then(Instrument::price)
    }

    /// Returns the number of registered instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns true if no instruments have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
