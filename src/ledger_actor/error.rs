//! Error types for the Ledger actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// Loading persisted orders at startup failed.
    #[error("Order store error: {0}")]
    Store(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LedgerError {
    fn from(msg: String) -> Self {
        LedgerError::ActorCommunicationError(msg)
    }
}
