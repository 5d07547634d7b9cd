//! Keyword-driven backend used when no model endpoint is configured.
//!
//! It understands just enough to keep a demo conversation moving: a few canned cashier
//! questions, menu lookups through the regular tool path, and a crude order summary.

use super::{ChatMessage, Completion, CompletionRequest, ReasoningBackend, ReasoningError, Role, ToolCall};
use crate::dialogue::prompts::{EXTRACTION_INSTRUCTIONS, MENU_EXTRACTION_INSTRUCTIONS};
use crate::tools::LOOKUP_ITEM;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};

const PRICE_WORDS: [&str; 4] = ["price", "cost", "how much", "allergen"];

#[derive(Default)]
pub struct RuleBasedBackend {
    next_call_id: AtomicU64,
}

impl RuleBasedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn converse(&self, messages: &[ChatMessage]) -> Completion {
        // Second round of a lookup: read the tool output back to the customer.
        let tool_results: Vec<&str> = messages
            .iter()
            .rev()
            .take_while(|m| m.role == Role::Tool)
            .map(|m| m.content.as_str())
            .collect();
        if !tool_results.is_empty() {
            let mut results = tool_results;
            results.reverse();
            return Completion::Text(results.join("\n"));
        }

        let utterance = messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.to_lowercase())
            .unwrap_or_default();

        if PRICE_WORDS.iter().any(|w| utterance.contains(w)) {
            let id = self.next_call_id.fetch_add(1, Ordering::SeqCst);
            return Completion::ToolCalls(vec![ToolCall {
                id: format!("rule_call_{id}"),
                name: LOOKUP_ITEM.to_string(),
                arguments: json!({ "item_name": item_guess(&utterance) }).to_string(),
            }]);
        }

        let reply = if utterance.contains("size") {
            "Large or small?"
        } else if utterance.contains("to-go") || utterance.contains("here") {
            "To-go or for here?"
        } else if utterance.contains("milk") {
            "Non-dairy options available: oat, almond, soy. Which one?"
        } else {
            "I'm sorry, could you repeat that?"
        };
        Completion::Text(reply.to_string())
    }
}

/// Whatever follows the last "of"/"for"/"is", without a leading article.
fn item_guess(utterance: &str) -> String {
    let trimmed = utterance.trim_end_matches(['?', '.', '!']).trim();
    let mut guess = trimmed;
    for marker in [" of ", " for ", " is ", " in "] {
        if let Some(idx) = trimmed.rfind(marker) {
            guess = &trimmed[idx + marker.len()..];
            break;
        }
    }
    let guess = guess.trim();
    ["a ", "an ", "the "]
        .iter()
        .find_map(|article| guess.strip_prefix(article))
        .unwrap_or(guess)
        .trim()
        .to_string()
}

/// Five labeled lines from the raw transcript: every customer line becomes an item.
fn summarize(transcript: &str) -> String {
    let customer_lines: Vec<&str> = transcript
        .lines()
        .filter_map(|line| line.strip_prefix("User:"))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let name = customer_lines
        .iter()
        .find_map(|line| {
            let lower = line.to_ascii_lowercase();
            lower
                .find("my name is ")
                .map(|idx| line[idx + "my name is ".len()..].split_whitespace().next().unwrap_or(""))
        })
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric());

    format!(
        "Customer Name: {name}\nItems: {}\nCustomizations: \nPrice Per Item: 0\nOrder Total: 0",
        customer_lines.join("; ")
    )
}

#[async_trait]
impl ReasoningBackend for RuleBasedBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ReasoningError> {
        let system = request
            .messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .unwrap_or("");
        let last_user = request
            .messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();

        if system == EXTRACTION_INSTRUCTIONS {
            return Ok(Completion::Text(summarize(&last_user)));
        }
        if system == MENU_EXTRACTION_INSTRUCTIONS {
            return Ok(Completion::Text(last_user));
        }
        Ok(self.converse(&request.messages))
    }
}
