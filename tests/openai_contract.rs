//! OpenAI-compatible backend contract tests.
//!
//! Verify the HTTP request shape the backend sends and how it reads answers and errors.

use cafe_assistant::reasoning::{
    ChatMessage, Completion, CompletionRequest, OpenAiBackend, ReasoningBackend, ReasoningError,
};
use cafe_assistant::tools::menu_tool_definitions;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer) -> OpenAiBackend {
    OpenAiBackend::new(format!("{}/v1", server.uri()), "test-key", "gpt-4o-mini", Duration::from_secs(5)).unwrap()
}

fn text_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "test",
        "object": "chat.completion",
        "created": 1234567890,
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
}

#[tokio::test]
async fn test_request_includes_model_messages_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "A latte please"}
            ]
        })))
        .respond_with(text_response("Large or small?"))
        .expect(1)
        .mount(&server)
        .await;

    let request = CompletionRequest::new(vec![ChatMessage::system("be brief"), ChatMessage::user("A latte please")]);
    let completion = backend(&server).complete(request).await.unwrap();

    assert_eq!(completion, Completion::Text("Large or small?".into()));
}

#[tokio::test]
async fn test_tools_are_sent_as_functions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "tools": [
                {"type": "function", "function": {"name": "lookup_item"}},
                {"type": "function", "function": {"name": "lookup_item_details"}}
            ],
            "temperature": 0.5
        })))
        .respond_with(text_response("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let request = CompletionRequest::new(vec![ChatMessage::user("How much is a latte?")])
        .with_tools(menu_tool_definitions())
        .with_temperature(Some(0.5));
    assert!(backend(&server).complete(request).await.is_ok());
}

#[tokio::test]
async fn test_tool_calls_are_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {"name": "lookup_item", "arguments": "{\"item_name\":\"Latte\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .mount(&server)
        .await;

    let completion = backend(&server)
        .complete(CompletionRequest::new(vec![ChatMessage::user("price of latte?")]))
        .await
        .unwrap();

    let Completion::ToolCalls(calls) = completion else {
        panic!("expected tool calls, got {completion:?}");
    };
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].id, "call_abc");
    assert_eq!(calls[0].name, "lookup_item");
    assert_eq!(calls[0].arguments, r#"{"item_name":"Latte"}"#);
}

#[tokio::test]
async fn test_error_status_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"message": "Rate limit reached", "type": "rate_limit"}
        })))
        .mount(&server)
        .await;

    let err = backend(&server)
        .complete(CompletionRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ReasoningError::Http {
            status: 429,
            message: "Rate limit reached".into()
        }
    );
}

#[tokio::test]
async fn test_unparseable_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend(&server)
        .complete(CompletionRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ReasoningError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_empty_choices_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = backend(&server)
        .complete(CompletionRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ReasoningError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_response("late").set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let backend = OpenAiBackend::new(
        format!("{}/v1", server.uri()),
        "test-key",
        "gpt-4o-mini",
        Duration::from_millis(200),
    )
    .unwrap();
    let err = backend
        .complete(CompletionRequest::new(vec![ChatMessage::user("hi")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ReasoningError::Timeout(_)));
}
