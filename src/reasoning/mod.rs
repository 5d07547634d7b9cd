//! The reasoning collaborator: a chat model that writes replies, asks for menu tools and
//! turns transcripts into labeled summaries.
//!
//! Everything above this module talks to [`ReasoningBackend`] only. Three backends ship:
//!
//! - [`OpenAiBackend`] - any OpenAI-compatible `/chat/completions` endpoint
//! - [`ScriptedBackend`] - queued canned answers, records every request (tests)
//! - [`RuleBasedBackend`] - keyword replies for running without network access

pub mod error;
pub mod openai;
pub mod rules;
pub mod scripted;

pub use error::ReasoningError;
pub use openai::OpenAiBackend;
pub use rules::RuleBasedBackend;
pub use scripted::ScriptedBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One message of a chat request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Tool calls an assistant message asked for.
    pub tool_calls: Vec<ToolCall>,
    /// Set on tool messages: which call this is the result of.
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    fn plain(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::plain(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::plain(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::plain(Role::Assistant, content)
    }

    pub fn assistant_tool_calls(calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls: calls,
            ..Self::plain(Role::Assistant, "")
        }
    }

    pub fn tool_result(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(call_id.into()),
            ..Self::plain(Role::Tool, content)
        }
    }
}

/// A function call requested by the model. `arguments` is the raw JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

/// A function the model may call, described by a JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

/// What the model answered with.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Text(String),
    ToolCalls(Vec<ToolCall>),
}

#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ReasoningError>;
}
