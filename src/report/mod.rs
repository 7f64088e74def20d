//! Snapshot rendering for reporting collaborators.
//!
//! Consumes the value-copy snapshot from
//! [`crate::portfolio::Portfolio::positions`] and renders it as a fixed-width
//! table, sorted by notional ascending. Read-only: the portfolio is never
//! touched.

use std::collections::HashMap;

use crate::instrument::Symbol;
use crate::portfolio::PositionSnapshot;

/// Renders a positions snapshot as a fixed-width table.
///
/// Rows are sorted by notional ascending; an unset price renders as `-`.
///
/// # Example
///
/// ```rust
/// use trading_book_rs::dec;
/// use trading_book_rs::instrument::InstrumentRegistry;
/// use trading_book_rs::portfolio::Portfolio;
/// use trading_book_rs::position::Position;
/// use trading_book_rs::report::render_table;
///
/// let mut registry = InstrumentRegistry::new();
/// let abc = registry.get_or_create("ABC");
/// abc.set_price(dec!(53.34)).unwrap();
///
/// let mut book = Portfolio::new("POD-001", dec!(10_000_000)).unwrap();
/// book.execute_position(Position::from_notional(abc, dec!(100_000)).unwrap())
///     .unwrap();
///
/// let table = render_table(&book.positions());
/// assert!(table.contains("ABC"));
/// ```
#[must_use]
pub fn render_table(snapshot: &HashMap<Symbol, PositionSnapshot>) -> String {
    let mut rows: Vec<&PositionSnapshot> = snapshot.values().collect();
    rows.sort_by(|a, b| a.notional.cmp(&b.notional));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>12} {:>16} {:>12}\n",
        "SYMBOL", "SHARES", "NOTIONAL", "PRICE"
    ));

    for row in rows {
        let price = row
            .price
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        out.push_str(&format!(
            "{:<8} {:>12} {:>16} {:>12}\n",
            row.symbol, row.shares, row.notional, price
        ));
    }

    out
}
