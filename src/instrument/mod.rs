//! Instrument identity and canonical shared price handles.
//!
//! Every traded symbol maps to exactly one [`Instrument`] within a registry's
//! scope. The registry is the only public factory: positions built against the
//! same symbol always observe the same price, because they hold clones of the
//! same handle.
//!
//! # Example
//!
//! ```rust
//! use trading_book_rs::dec;
//! use trading_book_rs::instrument::InstrumentRegistry;
//!
//! let mut registry = InstrumentRegistry::new();
//! let a = registry.get_or_create("ABC");
//! let b = registry.get_or_create("ABC");
//!
//! // One canonical entity per symbol
//! assert!(a.same_instance(&b));
//!
//! a.set_price(dec!(53.34)).unwrap();
//! assert_eq!(b.price(), Some(dec!(53.34)));
//! ```

mod registry;
mod symbol;

pub use registry::{Instrument, InstrumentRegistry};
pub use symbol::Symbol;
