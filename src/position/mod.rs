//! Net position value entity.
//!
//! A [`Position`] binds a shared [`crate::instrument::Instrument`] handle to a
//! signed notional and a share count derived at construction time. Positive
//! notional is long, negative is short.

mod net;

pub use net::Position;
