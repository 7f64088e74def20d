//! Portfolio facade: the netting engine plus risk-check orchestration.
//!
//! A [`Portfolio`] holds at most one net [`crate::position::Position`] per
//! symbol. Executing a trade nets it into the existing entry, recomputes gross
//! notional, and checks the configured limit, all inside one `&mut self`
//! call, so the read-net-write-recheck sequence can never interleave for a
//! given book.
//!
//! # Example
//!
//! ```rust
//! use trading_book_rs::dec;
//! use trading_book_rs::instrument::InstrumentRegistry;
//! use trading_book_rs::portfolio::{NettingOutcome, Portfolio};
//! use trading_book_rs::position::Position;
//!
//! let mut registry = InstrumentRegistry::new();
//! let abc = registry.get_or_create("ABC");
//! abc.set_price(dec!(10)).unwrap();
//!
//! let mut book = Portfolio::new("POD-001", dec!(10_000_000)).unwrap();
//!
//! let opened = book
//!     .execute_position(Position::from_notional(abc.clone(), dec!(100_000)).unwrap())
//!     .unwrap();
//! assert_eq!(opened.outcome, NettingOutcome::Opened);
//!
//! // A trade that more than offsets the book flips it short
//! let flipped = book
//!     .execute_position(Position::from_notional(abc, dec!(-200_000)).unwrap())
//!     .unwrap();
//! assert_eq!(flipped.outcome, NettingOutcome::Flipped);
//! assert_eq!(flipped.notional, dec!(-100_000));
//! ```

mod book;

pub use book::{ExecutionReport, NettingOutcome, Portfolio, PositionSnapshot};
