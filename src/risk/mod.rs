//! Risk monitoring for gross-notional exposure.
//!
//! This module provides the stateless aggregation and limit-check half of the
//! book: a pure [`gross_notional`] function over the positions mapping, a
//! validated [`GrossLimit`], and the breach event plumbing the portfolio uses
//! to report limit violations without rejecting trades.
//!
//! # Overview
//!
//! - **Aggregation**: [`gross_notional`] under a configurable [`GrossMode`]
//! - **Limit**: [`GrossLimit`] with a strict breach predicate
//! - **Events**: [`RiskLimitBreach`] dispatched through [`BreachHandler`]s
//!
//! A breach is an observation, not an error: the engine is an exposure
//! tracker, and callers needing a hard gate build one on the breach event.
//!
//! # Example
//!
//! ```rust
//! use trading_book_rs::dec;
//! use trading_book_rs::risk::GrossLimit;
//!
//! let limit = GrossLimit::new(dec!(100)).unwrap();
//! assert!(!limit.is_breached(dec!(100)));
//! assert!(limit.is_breached(dec!(150)));
//! ```

pub mod alerts;
mod limits;

pub use alerts::{
    BreachHandler, BreachNotifier, CollectingBreachHandler, LogBreachHandler, RiskLimitBreach,
};
pub use limits::{GrossLimit, GrossMode, gross_notional};
