//! Google Gemini client (`models/{model}:generateContent`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::endpoint::{send_json, ModelEndpoint};
use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, StopReason};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    endpoint: ModelEndpoint,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(endpoint: ModelEndpoint) -> Self {
        let client = endpoint.client();
        Self { endpoint, client }
    }

    fn generate_path(&self) -> String {
        format!("models/{}:generateContent", self.endpoint.model)
    }

    fn body(request: &CompletionRequest) -> GenerateBody<'_> {
        GenerateBody {
            contents: [UserTurn {
                role: "user",
                parts: [TextPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: SamplingConfig {
                max_output_tokens: request.max_output_tokens,
                temperature: request.temperature,
            },
        }
    }

    fn read_reply(&self, reply: GenerateReply) -> Result<CompletionResponse, AIError> {
        if let Some(reason) = reply.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AIError::Refused(reason));
        }

        let candidate = reply
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AIError::BadReply("reply has no candidates".into()))?;

        let stop = match candidate.finish_reason.as_deref() {
            Some("MAX_TOKENS") => StopReason::Truncated,
            Some("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT") => StopReason::Filtered,
            _ => StopReason::Finished,
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() && stop == StopReason::Filtered {
            return Err(AIError::Refused("candidate removed by safety filters".into()));
        }

        Ok(CompletionResponse {
            text,
            model: self.endpoint.model.clone(),
            stop,
            output_tokens: reply.usage_metadata.map(|u| u.candidates_token_count),
        })
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        tracing::debug!(
            trace_id = %request.trace_id,
            model = %self.endpoint.model,
            "calling Gemini generateContent"
        );
        let http = self
            .client
            .post(self.endpoint.url(&self.generate_path()))
            .header("x-goog-api-key", self.endpoint.api_key())
            .json(&Self::body(&request));
        let reply: GenerateReply = send_json(http, self.endpoint.timeout).await?;
        self.read_reply(reply)
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "gemini",
            model: self.endpoint.model.clone(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Wire format
// ════════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    contents: [UserTurn<'a>; 1],
    generation_config: SamplingConfig,
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SamplingConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(ModelEndpoint::new(
            "test-key",
            DEFAULT_GEMINI_MODEL,
            DEFAULT_GEMINI_BASE_URL,
        ))
    }

    fn reply(json: &str) -> GenerateReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn path_embeds_model() {
        assert_eq!(
            provider().generate_path(),
            "models/gemini-1.5-pro:generateContent"
        );
    }

    #[test]
    fn body_sends_prompt_as_single_user_turn() {
        let request = CompletionRequest::new("t", "Create a slide about bees").with_limits(256, 0.5);
        let body = serde_json::to_value(GeminiProvider::body(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Create a slide about bees");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 256);
        assert_eq!(body["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn joins_candidate_parts() {
        let completion = provider()
            .read_reply(reply(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"title\":"},{"text":"\"X\"}"}]},"finishReason":"STOP"}],
                    "usageMetadata":{"promptTokenCount":12,"candidatesTokenCount":8}}"#,
            ))
            .unwrap();

        assert_eq!(completion.text, "{\"title\":\"X\"}");
        assert_eq!(completion.stop, StopReason::Finished);
        assert_eq!(completion.output_tokens, Some(8));
    }

    #[test]
    fn max_tokens_marks_truncation() {
        let completion = provider()
            .read_reply(reply(
                r#"{"candidates":[{"content":{"parts":[{"text":"{\"title\":\"Bees"}]},"finishReason":"MAX_TOKENS"}]}"#,
            ))
            .unwrap();
        assert_eq!(completion.stop, StopReason::Truncated);
    }

    #[test]
    fn blocked_prompt_is_refused() {
        let result = provider().read_reply(reply(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#));
        assert_eq!(result, Err(AIError::Refused("SAFETY".into())));
    }

    #[test]
    fn emptied_candidate_is_refused() {
        let result = provider().read_reply(reply(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#));
        assert!(matches!(result, Err(AIError::Refused(_))));
    }

    #[test]
    fn no_candidates_is_bad_reply() {
        let result = provider().read_reply(reply(r#"{"candidates":[]}"#));
        assert!(matches!(result, Err(AIError::BadReply(_))));
    }

    #[test]
    fn info_names_gemini() {
        assert_eq!(provider().info().name, "gemini");
    }
}
