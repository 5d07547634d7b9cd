//! Error types for the actor framework.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}
