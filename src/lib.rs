//! Position netting and gross-notional risk tracking for a trading book.
//!
//! This crate implements the accounting core of a trading book: a portfolio
//! holding at most one net position per traded instrument, where each
//! instrument's price is a single canonical, shared value.
//!
//! # Overview
//!
//! Three cooperating pieces:
//!
//! - [`instrument::InstrumentRegistry`]: owns one canonical [`instrument::Instrument`]
//!   per symbol, so a price update is visible to every holder of the handle
//! - [`position::Position`]: signed notional exposure to one instrument with a
//!   share count derived at trade time
//! - [`portfolio::Portfolio`]: merges incoming trades into the existing net
//!   position per symbol (netting) and re-checks a gross-notional risk limit
//!   after every mutation
//!
//! Breaching the risk limit never rejects a trade. The engine is an exposure
//! tracker: a breach is reported on the execution report and dispatched to any
//! registered [`risk::BreachHandler`], and callers that want a hard gate build
//! it on top of that event.
//!
//! # Example
//!
//! ```rust
//! use trading_book_rs::dec;
//! use trading_book_rs::instrument::InstrumentRegistry;
//! use trading_book_rs::portfolio::Portfolio;
//! use trading_book_rs::position::Position;
//!
//! let mut registry = InstrumentRegistry::new();
//! let abc = registry.get_or_create("ABC");
//! abc.set_price(dec!(53.34)).unwrap();
//!
//! let mut book = Portfolio::new("POD-001", dec!(10_000_000)).unwrap();
//! let report = book
//!     .execute_position(Position::from_notional(abc, dec!(100_000)).unwrap())
//!     .unwrap();
//!
//! assert_eq!(report.gross_notional, dec!(100_000));
//! assert!(report.breach.is_none());
//! ```

/// Instrument identity, shared price handles, and the symbol registry.
pub mod instrument;

/// Net position value entity.
pub mod position;

/// Portfolio facade: netting engine and risk-check orchestration.
pub mod portfolio;

/// Snapshot rendering for reporting collaborators.
pub mod report;

/// Gross-notional aggregation, limits, and breach events.
pub mod risk;

/// Error taxonomy, decimal helpers, and validation utilities.
pub mod types;

pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
