//! SlideFlow - AI-assisted slide generation service
//!
//! Turns short prompts into themed slides, keeps presentations for the
//! lifetime of the process, and exports them as PowerPoint documents.
//! Generation degrades to templated content whenever no model is configured
//! or the model misbehaves.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

use std::sync::Arc;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::ai::{
    GeminiProvider, ModelEndpoint, OpenAIProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};
use crate::adapters::content::{GenerationSettings, LlmContentGenerator};
use crate::adapters::export::default_exporter;
use crate::adapters::http::{slides_router, SlidesAppState};
use crate::adapters::storage::InMemoryPresentationStore;
use crate::config::{AiConfig, AiProvider, AppConfig, ServerConfig};
use crate::ports::AIProvider;

/// Model client for the configured provider, or `None` in fallback mode.
pub fn build_ai_provider(config: &AiConfig) -> Option<Arc<dyn AIProvider>> {
    let key = config.active_key()?;
    let (model, base_url) = match config.provider {
        AiProvider::Gemini => (DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_BASE_URL),
        AiProvider::OpenAI => (DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_BASE_URL),
    };
    let endpoint = ModelEndpoint::new(
        key,
        config.model.as_deref().unwrap_or(model),
        config.base_url.as_deref().unwrap_or(base_url),
    )
    .with_timeout(config.timeout());

    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Gemini => Arc::new(GeminiProvider::new(endpoint)),
        AiProvider::OpenAI => Arc::new(OpenAIProvider::new(endpoint)),
    };
    Some(provider)
}

/// Wires adapters into the HTTP state.
pub fn build_state(config: &AppConfig) -> SlidesAppState {
    let settings = GenerationSettings {
        max_output_tokens: config.ai.max_output_tokens,
        temperature: config.ai.temperature,
    };
    let generator = match build_ai_provider(&config.ai) {
        Some(provider) => {
            let info = provider.info();
            tracing::info!(provider = info.name, model = %info.model, "AI model configured");
            LlmContentGenerator::new(provider)
        }
        None => {
            tracing::warn!(
                provider = config.ai.provider.as_str(),
                "No API key configured, slides will use templated content"
            );
            LlmContentGenerator::fallback_only()
        }
    }
    .with_settings(settings);

    let exporter = default_exporter(config.export.enabled);
    tracing::info!(pptx_available = exporter.is_available(), "Deck exporter ready");

    SlidesAppState::new(
        Arc::new(generator),
        Arc::new(InMemoryPresentationStore::new()),
        exporter,
        config.export.filename_prefix.clone(),
    )
}

/// Full router with CORS, tracing and request timeout layers.
pub fn app(state: SlidesAppState, server: &ServerConfig) -> Router {
    slides_router()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    let allow_origin = if origins.contains(&"*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_means_no_provider() {
        let config = AiConfig::default();
        assert!(build_ai_provider(&config).is_none());
    }

    #[test]
    fn configured_key_builds_provider() {
        let config = AiConfig {
            provider: AiProvider::OpenAI,
            openai_api_key: Some("sk-test".to_string()),
            model: Some("gpt-4o".to_string()),
            ..AiConfig::default()
        };
        let info = build_ai_provider(&config).map(|p| p.info());
        assert_eq!(info.as_ref().map(|i| i.name), Some("openai"));
        assert_eq!(info.map(|i| i.model).as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn default_state_is_fallback_with_export() {
        let state = build_state(&AppConfig::default());
        assert!(!state.generator.is_model_configured());
        assert_eq!(state.export_filename_prefix, "slideflow_presentation");
    }
}
