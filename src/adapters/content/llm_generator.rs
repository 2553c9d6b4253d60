//! Model-backed ContentGenerator implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::content::{
    build_slide_prompt, fallback_content, recover_from_model_text, Generation, GenerationOutcome,
};
use crate::ports::{AIProvider, CompletionRequest, ContentGenerator, StopReason};

/// Default generation settings sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_output_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Generates slide content with a generative model, degrading to templates.
///
/// Without a provider every call returns fallback content.
pub struct LlmContentGenerator {
    ai_provider: Option<Arc<dyn AIProvider>>,
    settings: GenerationSettings,
}

impl LlmContentGenerator {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider: Some(ai_provider),
            settings: GenerationSettings::default(),
        }
    }

    /// Generator with no model; always falls back.
    pub fn fallback_only() -> Self {
        Self {
            ai_provider: None,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    fn create_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest::new(
            format!("slide-generation-{}", uuid::Uuid::new_v4()),
            build_slide_prompt(prompt),
        )
        .with_limits(self.settings.max_output_tokens, self.settings.temperature)
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn generate(&self, prompt: &str) -> Generation {
        let Some(provider) = &self.ai_provider else {
            return Generation::new(fallback_content(prompt), GenerationOutcome::Fallback);
        };

        let request = self.create_request(prompt);
        let trace_id = request.trace_id.clone();

        let text = match provider.complete(request).await {
            Ok(response) => {
                if response.stop != StopReason::Finished {
                    tracing::debug!(%trace_id, stop = ?response.stop, "model stopped early");
                }
                response.text
            }
            Err(err) => {
                tracing::warn!(%trace_id, error = %err, "model call failed, using fallback content");
                return Generation::new(fallback_content(prompt), GenerationOutcome::Fallback);
            }
        };

        if text.trim().is_empty() {
            tracing::warn!(%trace_id, "model returned no text, using fallback content");
            return Generation::new(fallback_content(prompt), GenerationOutcome::Fallback);
        }

        let generation = recover_from_model_text(&text, prompt);
        match generation.outcome {
            GenerationOutcome::Parsed => {
                tracing::debug!(%trace_id, "parsed model JSON response");
            }
            GenerationOutcome::FromFreeText => {
                tracing::info!(%trace_id, "model answered in prose, recovered with free-text parser");
            }
            GenerationOutcome::Fallback => {
                tracing::warn!(%trace_id, "model output unusable, using fallback content");
            }
        }
        generation
    }

    fn is_model_configured(&self) -> bool {
        self.ai_provider.is_some()
    }
}
