use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The structured summary of one completed order.
///
/// Prices are plain `Decimal` and default to zero: "unknown" is never represented as a
/// missing value, so ledger arithmetic is always defined. `OrderEntry::default()` is the
/// empty entry returned when nothing could be extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    pub customer_name: String,
    pub items: String,
    pub customizations: String,
    pub price_per_item: Decimal,
    pub order_total: Decimal,
}

impl OrderEntry {
    /// True when no field carries any information.
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_empty()
            && self.items.is_empty()
            && self.customizations.is_empty()
            && self.price_per_item.is_zero()
            && self.order_total.is_zero()
    }
}

/// Finalized orders in the order they were placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLedger {
    entries: Vec<OrderEntry>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return the ledger length afterwards.
    pub fn append(&mut self, entry: OrderEntry) -> usize {
        self.entries.push(entry);
        self.entries.len()
    }

    /// Drop every entry and return how many were removed.
    pub fn reset(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        cleared
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every order total.
    pub fn revenue(&self) -> Decimal {
        self.entries.iter().map(|e| e.order_total).sum()
    }
}
