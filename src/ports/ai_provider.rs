//! Generative model port.
//!
//! Slide generation sends a single instruction prompt and reads back one
//! block of text. Providers make exactly one HTTP request per call; retry
//! and fallback policy belongs to the caller.

use async_trait::async_trait;
use thiserror::Error;

/// A generative text model.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Sends the prompt and returns the model's text.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Provider name and model, for logging.
    fn info(&self) -> ProviderInfo;
}

/// One-shot prompt with sampling limits.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Correlates log lines for a single generation.
    pub trace_id: String,
    pub prompt: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(trace_id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
            prompt: prompt.into(),
            max_output_tokens: 1024,
            temperature: 0.7,
        }
    }

    pub fn with_limits(mut self, max_output_tokens: u32, temperature: f32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self.temperature = temperature;
        self
    }
}

/// Why the model stopped producing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopReason {
    #[default]
    Finished,
    /// Output hit `max_output_tokens`; JSON is likely cut off.
    Truncated,
    /// Provider safety filters removed part of the answer.
    Filtered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    pub text: String,
    pub model: String,
    pub stop: StopReason,
    /// Output tokens, when the provider reports them.
    pub output_tokens: Option<u32>,
}

impl CompletionResponse {
    pub fn finished(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            stop: StopReason::Finished,
            output_tokens: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: &'static str,
    pub model: String,
}

/// Failures of a single model call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AIError {
    #[error("model request timed out after {0}s")]
    TimedOut(u64),

    #[error("model API unreachable: {0}")]
    Unreachable(String),

    #[error("model API rejected the credentials")]
    Unauthorized,

    #[error("model API returned HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    #[error("model refused the prompt: {0}")]
    Refused(String),

    #[error("unreadable model reply: {0}")]
    BadReply(String),
}

impl AIError {
    /// Maps a non-success status; error bodies are clipped for logging.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => AIError::Unauthorized,
            _ => AIError::Http {
                status,
                detail: body.chars().take(200).collect(),
            },
        }
    }

    /// Whether the failure came from the network rather than the model.
    pub fn is_transport(&self) -> bool {
        matches!(self, AIError::TimedOut(_) | AIError::Unreachable(_))
    }
}
