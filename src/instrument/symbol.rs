//! Trading symbol identifier.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a traded instrument.
///
/// Used to key instrument registries and position books.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::instrument::Symbol;
///
/// let abc = Symbol::new("ABC");
/// let xyz = Symbol::from("XYZ");
///
/// assert_ne!(abc, xyz);
/// assert_eq!(abc.as_str(), "ABC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol(pub String);

impl Symbol {
    /// Creates a new symbol.
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}
