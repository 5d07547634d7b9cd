//! OpenAI-compatible chat completions backend.

use super::{ChatMessage, Completion, CompletionRequest, ReasoningBackend, ReasoningError, Role, ToolCall};
use crate::config::ReasoningConfig;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Talks to any server exposing `POST {base_url}/chat/completions`.
///
/// `base_url` includes the version segment, e.g. `https://api.openai.com/v1`.
pub struct OpenAiBackend {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ReasoningError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReasoningError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            timeout,
        })
    }

    pub fn from_config(config: &ReasoningConfig) -> Result<Self, ReasoningError> {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone().unwrap_or_default(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl ReasoningBackend for OpenAiBackend {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ReasoningError> {
        let body = ChatCompletionRequest::build(&self.model, &request);
        debug!(messages = body.messages.len(), tools = body.tools.len(), "Sending completion request");

        let mut builder = self.client.post(self.endpoint()).json(&body);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await.map_err(|err| {
            if err.is_timeout() {
                ReasoningError::Timeout(self.timeout.as_secs())
            } else {
                ReasoningError::Transport(format!("Chat completion request failed: {err}"))
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ReasoningError::MalformedResponse(format!("Failed to parse response: {err}")))?;

        extract_completion(parsed)
    }
}

// =============================================================================
// WIRE FORMAT
// =============================================================================

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    fn build(model: &str, request: &CompletionRequest) -> Self {
        Self {
            model: model.to_string(),
            messages: request.messages.iter().map(WireMessage::from).collect(),
            tools: request
                .tools
                .iter()
                .map(|tool| WireTool {
                    kind: "function",
                    function: WireFunction {
                        name: tool.name.clone(),
                        description: tool.description.clone(),
                        parameters: tool.parameters.clone(),
                    },
                })
                .collect(),
            temperature: request.temperature,
        }
    }
}

#[derive(Serialize)]
struct WireMessage {
    role: Role,
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        // Assistant messages that only carry tool calls send `content: null`.
        let content = if message.content.is_empty() && !message.tool_calls.is_empty() {
            None
        } else {
            Some(message.content.clone())
        };
        Self {
            role: message.role,
            content,
            tool_calls: message
                .tool_calls
                .iter()
                .map(|call| WireToolCall {
                    id: call.id.clone(),
                    kind: "function".to_string(),
                    function: WireFunctionCall {
                        name: call.name.clone(),
                        arguments: call.arguments.clone(),
                    },
                })
                .collect(),
            tool_call_id: message.tool_call_id.clone(),
        }
    }
}

#[derive(Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction,
}

#[derive(Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default = "function_kind")]
    kind: String,
    function: WireFunctionCall,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    #[serde(default)]
    arguments: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_completion(response: ChatCompletionResponse) -> Result<Completion, ReasoningError> {
    let message = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| ReasoningError::MalformedResponse("Response contained no choices".into()))?;

    let calls: Vec<ToolCall> = message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| ToolCall {
            id: call.id,
            name: call.function.name,
            arguments: call.function.arguments,
        })
        .collect();
    if !calls.is_empty() {
        return Ok(Completion::ToolCalls(calls));
    }

    Ok(Completion::Text(message.content.unwrap_or_default()))
}

fn map_http_error(status: StatusCode, body: String) -> ReasoningError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);
    ReasoningError::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::ToolDefinition;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = CompletionRequest::new(vec![
            ChatMessage::system("be brief"),
            ChatMessage::assistant_tool_calls(vec![ToolCall {
                id: "call_1".into(),
                name: "lookup_item".into(),
                arguments: r#"{"item_name":"Latte"}"#.into(),
            }]),
            ChatMessage::tool_result("call_1", "Latte: price $4.50, allergens: milk"),
        ])
        .with_tools(vec![ToolDefinition {
            name: "lookup_item".into(),
            description: "look it up".into(),
            parameters: json!({"type": "object"}),
        }]);

        let body = serde_json::to_value(ChatCompletionRequest::build("gpt-4o-mini", &request)).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], Value::Null);
        assert_eq!(body["messages"][1]["tool_calls"][0]["function"]["name"], "lookup_item");
        assert_eq!(body["messages"][2]["role"], "tool");
        assert_eq!(body["messages"][2]["tool_call_id"], "call_1");
        assert_eq!(body["tools"][0]["type"], "function");
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn test_http_error_prefers_api_message() {
        let err = map_http_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"message":"bad key","type":"auth"}}"#.to_string(),
        );
        assert_eq!(
            err,
            ReasoningError::Http {
                status: 401,
                message: "bad key".into()
            }
        );

        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(matches!(err, ReasoningError::Http { status: 502, .. }));
    }
}
