//! GenerateSlideHandler - turns a prompt into a single themed slide.

use std::sync::Arc;

use crate::domain::content::Generation;
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::slide::Slide;
use crate::domain::theme::ThemeName;
use crate::ports::ContentGenerator;

use super::{generate_slide_with, require_text};

/// Command to generate one slide.
#[derive(Debug, Clone)]
pub struct GenerateSlideCommand {
    pub prompt: String,
    /// Theme name; unknown or absent names resolve to blue.
    pub color_theme: Option<String>,
}

/// The generated slide and the content it was laid out from.
#[derive(Debug, Clone)]
pub struct GenerateSlideResult {
    pub slide: Slide,
    pub generation: Generation,
}

/// Handler for single-slide generation.
pub struct GenerateSlideHandler {
    generator: Arc<dyn ContentGenerator>,
}

impl GenerateSlideHandler {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSlideCommand,
    ) -> Result<GenerateSlideResult, ValidationError> {
        let prompt = require_text("prompt", &cmd.prompt)?;
        let theme = ThemeName::resolve(cmd.color_theme.as_deref());

        tracing::info!(prompt = %prompt, theme = %theme.as_str(), "Generating slide");

        // Free-standing slides are keyed by creation time.
        let id = Timestamp::now().as_unix_millis();
        let (slide, generation) =
            generate_slide_with(self.generator.as_ref(), id, &prompt, theme).await;

        Ok(GenerateSlideResult { slide, generation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::CountingGenerator;
    use crate::domain::content::GenerationOutcome;

    fn handler(generator: Arc<CountingGenerator>) -> GenerateSlideHandler {
        GenerateSlideHandler::new(generator)
    }

    #[tokio::test]
    async fn generates_themed_slide() {
        let generator = Arc::new(CountingGenerator::default());
        let result = handler(generator.clone())
            .handle(GenerateSlideCommand {
                prompt: "solar power".to_string(),
                color_theme: Some("green".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(generator.calls(), 1);
        assert_eq!(result.slide.color_theme, ThemeName::Green);
        assert_eq!(result.slide.title, result.generation.record.title);
        assert_eq!(result.generation.outcome, GenerationOutcome::Fallback);
        assert!(!result.slide.elements.is_empty());
        assert_eq!(
            result.slide.ai_metadata.as_ref().unwrap().original_prompt,
            "solar power"
        );
    }

    #[tokio::test]
    async fn unknown_theme_resolves_to_blue() {
        let result = handler(Arc::new(CountingGenerator::default()))
            .handle(GenerateSlideCommand {
                prompt: "solar power".to_string(),
                color_theme: Some("nonexistent".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(result.slide.color_theme, ThemeName::Blue);
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_generation() {
        let generator = Arc::new(CountingGenerator::default());
        let err = handler(generator.clone())
            .handle(GenerateSlideCommand {
                prompt: "   ".to_string(),
                color_theme: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.field(), "prompt");
        assert_eq!(generator.calls(), 0);
    }
}
