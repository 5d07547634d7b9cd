//! # Ledger Actor
//!
//! Owns the [`OrderLedger`] of finalized orders. Entries only ever arrive whole: the
//! session actor sends `Append` after extraction has finished.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorState`](crate::framework::ActorState) implementation for [`OrderLedger`]
//! - [`error`] - [`LedgerError`]
//! - [`actions`] - [`LedgerAction`] and [`LedgerActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, ledger) = ledger_actor::new(32);
//! tokio::spawn(actor.run(LedgerContext::new(Some(store))));
//!
//! ledger.append(entry).await?;
//! let orders = ledger.list().await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::LedgerContext;
pub use error::*;

use crate::clients::LedgerClient;
use crate::framework::StateActor;
use crate::model::OrderLedger;

/// Creates a new Ledger actor with an empty ledger, and its client.
pub fn new(buffer_size: usize) -> (StateActor<OrderLedger>, LedgerClient) {
    let (actor, client) = StateActor::new(OrderLedger::new(), buffer_size);
    (actor, LedgerClient::new(client))
}
