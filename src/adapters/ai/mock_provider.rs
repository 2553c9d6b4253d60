//! Scripted model for tests.
//!
//! ```ignore
//! let model = MockAIProvider::new()
//!     .with_response(r#"{"title": "Bees"}"#)
//!     .with_error(AIError::TimedOut(60));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, StopReason};

/// Text returned once the script runs out.
pub const UNSCRIPTED_REPLY: &str = "Mock response";

const MOCK_MODEL: &str = "mock-model-1";

/// Replays queued replies in order and records every request.
///
/// Clones share the script and the request log.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<Result<CompletionResponse, AIError>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    delay: Duration,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.with_stop(text, StopReason::Finished)
    }

    /// Queues a reply that ended for `stop`, e.g. a truncated answer.
    pub fn with_stop(self, text: impl Into<String>, stop: StopReason) -> Self {
        let reply = CompletionResponse {
            stop,
            ..CompletionResponse::finished(text, MOCK_MODEL)
        };
        guard(&self.script).push_back(Ok(reply));
        self
    }

    pub fn with_error(self, error: AIError) -> Self {
        guard(&self.script).push_back(Err(error));
        self
    }

    /// Simulated latency before each reply.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        guard(&self.requests).len()
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        guard(&self.requests).clone()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        guard(&self.requests).push(request);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let next = guard(&self.script).pop_front();
        next.unwrap_or_else(|| Ok(CompletionResponse::finished(UNSCRIPTED_REPLY, MOCK_MODEL)))
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "mock",
            model: MOCK_MODEL.to_string(),
        }
    }
}
