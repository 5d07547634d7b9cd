//! Operations on the order ledger.

use crate::model::OrderEntry;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerAction {
    /// Record a finalized order.
    Append(OrderEntry),
    /// Drop every recorded order.
    Reset,
    /// How many orders are recorded.
    Count,
    /// Sum of all order totals.
    Revenue,
}

/// Results from LedgerActions - variants match 1:1 with LedgerAction
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerActionResult {
    /// Ledger length after the append
    Append(usize),
    /// Number of entries removed
    Reset(usize),
    Count(usize),
    Revenue(Decimal),
}
