//! Operations on the ordering session.

use crate::model::{Menu, OrderEntry};

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// A customer utterance: either finalizes the order or gets a reply.
    Utterance(String),
    /// Extract the current conversation into the ledger.
    Finalize,
    /// Replace the active menu.
    SetMenu(Menu),
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone, PartialEq)]
pub enum SessionActionResult {
    Utterance(TurnOutcome),
    Finalize(OrderEntry),
    /// Number of items on the new menu
    SetMenu(usize),
}

/// What happened to one customer utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The conversation continues with this reply.
    Replied(String),
    /// The order was complete and has been recorded.
    OrderPlaced(OrderEntry),
}

impl TurnOutcome {
    /// The text the customer hears.
    pub fn text(&self) -> &str {
        match self {
            TurnOutcome::Replied(reply) => reply,
            TurnOutcome::OrderPlaced(_) => crate::dialogue::prompts::ORDER_CONFIRMED,
        }
    }
}
