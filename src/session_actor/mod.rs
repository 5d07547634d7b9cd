//! # Session Actor
//!
//! Runs the ordering conversation. Every customer utterance becomes one
//! [`SessionAction::Utterance`]: completion phrases finalize the order (extract, then append
//! to the ledger) and anything else gets a reply from the
//! [`ResponseGenerator`](crate::dialogue::ResponseGenerator).
//!
//! ## Structure
//!
//! - [`entity`] - [`Session`] state, its snapshot and the injected [`SessionContext`]
//! - [`error`] - [`SessionError`]
//! - [`actions`] - [`SessionAction`], [`SessionActionResult`] and [`TurnOutcome`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The session depends on the ledger actor through a [`LedgerClient`](crate::clients::LedgerClient)
//! held in its context. The graph is acyclic, so shutdown by dropping clients is enough.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::{Session, SessionContext, SessionSnapshot};
pub use error::*;

use crate::clients::SessionClient;
use crate::framework::StateActor;
use crate::model::Menu;

/// Creates a new Session actor starting from `menu`, and its client.
pub fn new(menu: Menu, buffer_size: usize) -> (StateActor<Session>, SessionClient) {
    let (actor, client) = StateActor::new(Session::new(menu), buffer_size);
    (actor, SessionClient::new(client))
}
