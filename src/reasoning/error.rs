//! Error types for reasoning backends.

use thiserror::Error;

/// Errors a [`ReasoningBackend`](super::ReasoningBackend) call can end in.
///
/// The dialogue layer never surfaces these to the customer; they turn into the fixed
/// apology or an empty order entry.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReasoningError {
    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be understood.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The call did not finish within the configured timeout.
    #[error("Timed out after {0}s")]
    Timeout(u64),

    /// The final answer carried no text.
    #[error("Empty response")]
    EmptyResponse,

    /// The backend kept asking for tools past the round limit.
    #[error("Tool rounds exceeded: {0}")]
    ToolRoundsExceeded(usize),

    /// A scripted backend was called more times than it had replies.
    #[error("Script exhausted")]
    ScriptExhausted,
}
