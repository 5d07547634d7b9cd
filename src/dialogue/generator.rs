use crate::config::ReasoningConfig;
use crate::dialogue::prompts::{conversation_system_prompt, APOLOGY};
use crate::model::{ConversationState, Menu, Speaker, Turn};
use crate::reasoning::{ChatMessage, Completion, CompletionRequest, ReasoningBackend, ReasoningError};
use crate::tools::{dispatch, menu_tool_definitions, MenuLookup};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 3;

/// Produces the assistant's next reply, letting the model look things up on the menu.
///
/// A reply is only recorded when it was actually produced. On any failure the customer
/// hears [`APOLOGY`] and the conversation is left exactly as it was, so repeating the
/// utterance is a clean retry.
#[derive(Clone)]
pub struct ResponseGenerator {
    backend: Arc<dyn ReasoningBackend>,
    timeout: Duration,
    max_tool_rounds: usize,
    temperature: Option<f32>,
}

impl ResponseGenerator {
    pub fn new(backend: Arc<dyn ReasoningBackend>, timeout: Duration) -> Self {
        Self {
            backend,
            timeout,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
            temperature: None,
        }
    }

    pub fn from_config(backend: Arc<dyn ReasoningBackend>, config: &ReasoningConfig) -> Self {
        Self::new(backend, Duration::from_secs(config.timeout_secs))
            .with_max_tool_rounds(config.max_tool_rounds)
            .with_temperature(config.temperature)
    }

    pub fn with_max_tool_rounds(mut self, rounds: usize) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Reply to `utterance`, appending the user turn and the reply on success.
    #[instrument(skip(self, state, menu), fields(history = state.len()))]
    pub async fn respond(&self, state: &mut ConversationState, menu: &Arc<Menu>, utterance: &str) -> String {
        let outcome = tokio::time::timeout(self.timeout, self.generate(state.turns(), menu, utterance)).await;
        let reply = match outcome {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                warn!(error = %e, "Reply generation failed");
                return APOLOGY.to_string();
            }
            Err(_) => {
                warn!(error = %ReasoningError::Timeout(self.timeout.as_secs()), "Reply generation failed");
                return APOLOGY.to_string();
            }
        };

        state.push(Turn::user(utterance));
        state.push(Turn::assistant(reply.clone()));
        reply
    }

    async fn generate(&self, history: &[Turn], menu: &Arc<Menu>, utterance: &str) -> Result<String, ReasoningError> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage::system(conversation_system_prompt(menu)));
        messages.extend(history.iter().map(|turn| match turn.speaker {
            Speaker::User => ChatMessage::user(turn.text.clone()),
            Speaker::Assistant => ChatMessage::assistant(turn.text.clone()),
        }));
        messages.push(ChatMessage::user(utterance));

        let lookup = MenuLookup::new(Arc::clone(menu));
        let tools = menu_tool_definitions();

        for round in 0..=self.max_tool_rounds {
            let request = CompletionRequest::new(messages.clone())
                .with_tools(tools.clone())
                .with_temperature(self.temperature);

            match self.backend.complete(request).await? {
                Completion::Text(text) => {
                    let text = text.trim();
                    if text.is_empty() {
                        return Err(ReasoningError::EmptyResponse);
                    }
                    return Ok(text.to_string());
                }
                Completion::ToolCalls(calls) => {
                    if round == self.max_tool_rounds {
                        break;
                    }
                    debug!(round, calls = calls.len(), "Running tool calls");
                    let results: Vec<ChatMessage> = calls
                        .iter()
                        .map(|call| ChatMessage::tool_result(call.id.clone(), dispatch(&lookup, call)))
                        .collect();
                    messages.push(ChatMessage::assistant_tool_calls(calls));
                    messages.extend(results);
                }
            }
        }

        Err(ReasoningError::ToolRoundsExceeded(self.max_tool_rounds))
    }
}
