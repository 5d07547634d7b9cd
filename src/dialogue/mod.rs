//! The conversation core: completion gate, reply generation and order extraction.
//!
//! None of these types own the conversation. The session actor owns the
//! [`ConversationState`](crate::model::ConversationState) and lends it to one operation at a
//! time.

pub mod completion;
pub mod extractor;
pub mod generator;
pub mod prompts;

pub use completion::is_complete;
pub use extractor::OrderExtractor;
pub use generator::ResponseGenerator;
