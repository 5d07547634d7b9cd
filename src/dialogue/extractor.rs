//! Conversation transcript to [`OrderEntry`].
//!
//! The model is asked for five labeled lines, but its output is never trusted to follow the
//! format. Parsing is line-oriented and field-by-field: a label the parser does not know is
//! skipped, a number it cannot read becomes zero, and everything else still comes through.

use crate::dialogue::prompts::EXTRACTION_INSTRUCTIONS;
use crate::model::money::parse_amount;
use crate::model::{ConversationState, OrderEntry, Turn};
use crate::reasoning::{ChatMessage, Completion, CompletionRequest, ReasoningBackend, ReasoningError};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    CustomerName,
    Items,
    Customizations,
    PricePerItem,
    OrderTotal,
}

impl Field {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "customer_name" | "name" | "customer" => Some(Field::CustomerName),
            "items" | "item" | "order_items" | "order" => Some(Field::Items),
            "customizations" | "customization" | "modifications" | "notes" => Some(Field::Customizations),
            "price_per_item" | "item_price" | "unit_price" | "price" => Some(Field::PricePerItem),
            "order_total" | "total" | "total_price" => Some(Field::OrderTotal),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct OrderExtractor {
    backend: Arc<dyn ReasoningBackend>,
    timeout: Duration,
}

impl OrderExtractor {
    pub fn new(backend: Arc<dyn ReasoningBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Summarize the conversation and clear it. Never fails: anything that goes wrong yields
    /// `OrderEntry::default()`.
    #[instrument(skip(self, state), fields(history = state.len()))]
    pub async fn extract(&self, state: &mut ConversationState) -> OrderEntry {
        let turns = state.take();
        if turns.is_empty() {
            debug!("Nothing to extract");
            return OrderEntry::default();
        }

        let request = CompletionRequest::new(vec![
            ChatMessage::system(EXTRACTION_INSTRUCTIONS),
            ChatMessage::user(transcript(&turns)),
        ])
        .with_temperature(Some(0.0));

        let raw = match tokio::time::timeout(self.timeout, self.backend.complete(request)).await {
            Ok(Ok(Completion::Text(text))) => text,
            Ok(Ok(Completion::ToolCalls(_))) => {
                warn!("Extraction answered with tool calls");
                return OrderEntry::default();
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Extraction failed");
                return OrderEntry::default();
            }
            Err(_) => {
                warn!(error = %ReasoningError::Timeout(self.timeout.as_secs()), "Extraction failed");
                return OrderEntry::default();
            }
        };

        let entry = parse_order_summary(&raw);
        info!(customer = %entry.customer_name, total = %entry.order_total, "Order extracted");
        entry
    }
}

/// One `User: ...` / `Assistant: ...` line per turn.
pub fn transcript(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker, turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop a leading list number such as `1.` or `2)`.
fn strip_list_number(key: &str) -> &str {
    let digits = key.len() - key.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return key;
    }
    key[digits..].strip_prefix(['.', ')']).map_or(key, str::trim_start)
}

fn normalize_key(raw: &str) -> String {
    let key = raw.trim().trim_start_matches(['-', '*', '•', '#', '>']).trim();
    strip_list_number(key)
        .trim_matches(['*', '_', '`'])
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

fn clean_value(raw: &str) -> String {
    let value = raw.trim().trim_matches(['*', '_', '`']).trim();
    match value.to_ascii_lowercase().as_str() {
        "n/a" | "na" | "none" | "unknown" | "-" => String::new(),
        _ => value.to_string(),
    }
}

fn parse_number(field: Field, raw: &str) -> Decimal {
    if raw.is_empty() {
        return Decimal::ZERO;
    }
    parse_amount(raw).unwrap_or_else(|| {
        warn!(?field, value = raw, "Unreadable amount, using 0");
        Decimal::ZERO
    })
}

/// Lenient parse of the labeled summary. The first occurrence of a label wins.
pub fn parse_order_summary(raw: &str) -> OrderEntry {
    let mut entry = OrderEntry::default();
    let mut seen: Vec<Field> = Vec::new();

    for line in raw.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let Some(field) = Field::from_key(&normalize_key(key)) else {
            continue;
        };
        if seen.contains(&field) {
            continue;
        }
        seen.push(field);

        let value = clean_value(value);
        match field {
            Field::CustomerName => entry.customer_name = value,
            Field::Items => entry.items = value,
            Field::Customizations => entry.customizations = value,
            Field::PricePerItem => entry.price_per_item = parse_number(field, &value),
            Field::OrderTotal => entry.order_total = parse_number(field, &value),
        }
    }

    if seen.is_empty() {
        warn!("No recognized labels in extraction output");
    }
    entry
}
