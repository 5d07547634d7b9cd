//! Error types for the Session actor.

use thiserror::Error;

/// Errors that can occur during session operations.
///
/// Reasoning failures never show up here; they are absorbed into the apology reply or an
/// empty order entry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// The extracted order could not be handed to the ledger.
    #[error("Ledger error: {0}")]
    Ledger(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
