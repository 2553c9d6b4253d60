//! OpenAI chat completions client.
//!
//! The slide prompt travels as a single user message; no system message is
//! sent because the prompt already carries the output contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::endpoint::{send_json, ModelEndpoint};
use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, StopReason};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIProvider {
    endpoint: ModelEndpoint,
    client: reqwest::Client,
}

impl OpenAIProvider {
    pub fn new(endpoint: ModelEndpoint) -> Self {
        let client = endpoint.client();
        Self { endpoint, client }
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatBody<'a> {
        ChatBody {
            model: &self.endpoint.model,
            messages: [ChatTurn {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        }
    }

    fn read_reply(reply: ChatReply) -> Result<CompletionResponse, AIError> {
        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AIError::BadReply("reply has no choices".into()))?;

        let stop = match choice.finish_reason.as_deref() {
            Some("length") => StopReason::Truncated,
            Some("content_filter") => StopReason::Filtered,
            _ => StopReason::Finished,
        };

        // `content` is null when the model only refuses.
        let text = match (choice.message.content, choice.message.refusal) {
            (Some(text), _) => text,
            (None, Some(refusal)) => return Err(AIError::Refused(refusal)),
            (None, None) => String::new(),
        };

        Ok(CompletionResponse {
            text,
            model: reply.model,
            stop,
            output_tokens: reply.usage.map(|u| u.completion_tokens),
        })
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.trace_id,
            model = %self.endpoint.model,
            "calling OpenAI chat completions"
        );
        let http = self
            .client
            .post(self.endpoint.url("chat/completions"))
            .bearer_auth(self.endpoint.api_key())
            .json(&self.body(&request));
        let reply: ChatReply = send_json(http, self.endpoint.timeout).await?;
        Self::read_reply(reply)
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "openai",
            model: self.endpoint.model.clone(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire format
// ════════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: [ChatTurn<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    model: String,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
    refusal: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    completion_tokens: u32,
}
