//! Shared types and utilities used across the crate.

/// Decimal helpers for share/notional derivation.
pub mod decimal;

/// Error types and result alias.
pub mod error;

/// Cross-cutting validation helpers.
pub mod validate;

pub use error::{BookError, BookResult};
