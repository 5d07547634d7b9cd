use super::{Completion, CompletionRequest, ReasoningBackend, ReasoningError, ToolCall};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;

enum Step {
    Reply(Result<Completion, ReasoningError>),
    Stall(Duration),
}

/// A backend that plays back queued answers in order and records every request it saw.
///
/// Once the queue runs dry every call fails with [`ReasoningError::ScriptExhausted`].
#[derive(Default)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Step>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.push(Step::Reply(Ok(Completion::Text(text.into()))))
    }

    pub fn with_tool_calls(self, calls: Vec<ToolCall>) -> Self {
        self.push(Step::Reply(Ok(Completion::ToolCalls(calls))))
    }

    pub fn with_error(self, error: ReasoningError) -> Self {
        self.push(Step::Reply(Err(error)))
    }

    /// Sleep for `delay` before answering with the next queued step.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.push(Step::Stall(delay))
    }

    fn push(mut self, step: Step) -> Self {
        self.script.get_mut().push_back(step);
        self
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn remaining(&self) -> usize {
        self.script.lock().await.len()
    }
}

#[async_trait]
impl ReasoningBackend for ScriptedBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, ReasoningError> {
        self.requests.lock().await.push(request);
        loop {
            let step = self.script.lock().await.pop_front();
            match step {
                Some(Step::Stall(delay)) => tokio::time::sleep(delay).await,
                Some(Step::Reply(reply)) => return reply,
                None => return Err(ReasoningError::ScriptExhausted),
            }
        }
    }
}
