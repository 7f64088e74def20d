//! Breach events and the handlers that observe them.
//!
//! A [`RiskLimitBreach`] signals that gross notional exceeded the configured
//! maximum after an accepted mutation. It is informational: the trade that
//! triggered it stays in the book, and nothing is ever rolled back. Callers
//! that want enforcement register a [`BreachHandler`] and build their policy
//! there.
//!
//! # Example
//!
//! ```rust
//! use trading_book_rs::risk::{BreachHandler, RiskLimitBreach};
//!
//! struct Shout;
//!
//! impl BreachHandler for Shout {
//!     fn handle(&self, breach: &RiskLimitBreach) {
//!         println!("limit blown: {}", breach);
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Mutex;

use crate::Decimal;
use crate::instrument::Symbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gross notional exceeded the configured maximum.
///
/// Carries the aggregate at the moment of the breach, the configured limit,
/// and the symbol whose execution triggered the check.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiskLimitBreach {
    /// Symbol whose execution triggered the check.
    pub symbol: Symbol,
    /// Gross notional after the mutation.
    pub gross_notional: Decimal,
    /// Configured maximum gross notional.
    pub limit: Decimal,
}

impl RiskLimitBreach {
    /// Amount by which the aggregate exceeds the limit.
    #[must_use]
    pub fn excess(&self) -> Decimal {
        self.gross_notional - self.limit
    }
}

impl fmt::Display for RiskLimitBreach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gross notional {} exceeds limit {} (trigger: {})",
            self.gross_notional, self.limit, self.symbol
        )
    }
}

/// Trait for observing risk-limit breaches.
///
/// Implement this to wire breaches into existing alerting infrastructure or
/// to enforce a hard gate on top of the tracker.
pub trait BreachHandler: Send + Sync {
    /// Handle a breach event.
    fn handle(&self, breach: &RiskLimitBreach);

    /// Returns the handler name for debugging.
    fn name(&self) -> &str {
        "BreachHandler"
    }
}

/// Breach handler that logs through `tracing` at warn level.
#[derive(Debug, Default)]
pub struct LogBreachHandler;

impl BreachHandler for LogBreachHandler {
    fn handle(&self, breach: &RiskLimitBreach) {
        tracing::warn!(
            symbol = %breach.symbol,
            gross_notional = %breach.gross_notional,
            limit = %breach.limit,
            "risk limit breached"
        );
    }

    fn name(&self) -> &str {
        "LogBreachHandler"
    }
}

/// Collects breaches into a vector for testing.
#[derive(Debug, Default)]
pub struct CollectingBreachHandler {
    breaches: Mutex<Vec<RiskLimitBreach>>,
}

impl CollectingBreachHandler {
    /// Creates a new collecting handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns collected breaches.
    #[must_use]
    pub fn breaches(&self) -> Vec<RiskLimitBreach> {
        self.breaches.lock().unwrap().clone()
    }

    /// Returns the number of collected breaches.
    #[must_use]
    pub fn count(&self) -> usize {
        self.breaches.lock().unwrap().len()
    }
}

impl BreachHandler for CollectingBreachHandler {
    fn handle(&self, breach: &RiskLimitBreach) {
        self.breaches.lock().unwrap().push(breach.clone());
    }

    fn name(&self) -> &str {
        "CollectingBreachHandler"
    }
}

/// Dispatches breach events to registered handlers.
///
/// Owned by the portfolio; every breach an execution report carries has also
/// been handed to every registered handler.
#[derive(Default)]
pub struct BreachNotifier {
    handlers: Vec<Box<dyn BreachHandler>>,
}

impl BreachNotifier {
    /// Creates a notifier with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler.
    pub fn add_handler(&mut self, handler: Box<dyn BreachHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches a breach to every registered handler.
    pub fn notify(&self, breach: &RiskLimitBreach) {
        for handler in &self.handlers {
            handler.handle(breach);
        }
    }
}

impl fmt::Debug for BreachNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreachNotifier")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
