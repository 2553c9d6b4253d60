//! Content Generator Port - turns a prompt into structured slide content.

use async_trait::async_trait;

use crate::domain::content::Generation;

/// Port for prompt-to-content generation.
///
/// `generate` is total: model outages, bad credentials and malformed output
/// all degrade to templated content instead of an error, and the returned
/// [`Generation`] records which path produced the record.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce content for a (non-empty) prompt.
    async fn generate(&self, prompt: &str) -> Generation;

    /// Whether a generative model is wired in. When false every call
    /// returns fallback content.
    fn is_model_configured(&self) -> bool;
}
