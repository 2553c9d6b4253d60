//! CreatePresentationHandler - stores a new presentation, optionally with a
//! freshly generated slide.

use std::sync::Arc;

use crate::domain::content::Generation;
use crate::domain::foundation::ValidationError;
use crate::domain::presentation::Presentation;
use crate::domain::slide::Slide;
use crate::domain::theme::ThemeName;
use crate::ports::{ContentGenerator, PresentationStore};

use super::PresentationError;
use crate::application::handlers::slide::generate_slide_with;

/// Prompt the editor sends when saving without asking for a new slide.
pub const MANUAL_SAVE_PROMPT: &str = "Manual save";

#[derive(Debug, Clone)]
pub struct CreatePresentationCommand {
    pub prompt: String,
    /// Slides already in the editor.
    pub slides: Vec<Slide>,
    pub color_theme: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatePresentationResult {
    pub presentation: Presentation,
    /// Present when a slide was generated from the prompt.
    pub generation: Option<Generation>,
}

pub struct CreatePresentationHandler {
    generator: Arc<dyn ContentGenerator>,
    store: Arc<dyn PresentationStore>,
}

impl CreatePresentationHandler {
    pub fn new(generator: Arc<dyn ContentGenerator>, store: Arc<dyn PresentationStore>) -> Self {
        Self { generator, store }
    }

    pub async fn handle(
        &self,
        cmd: CreatePresentationCommand,
    ) -> Result<CreatePresentationResult, PresentationError> {
        let prompt = cmd.prompt.trim().to_string();
        if prompt.is_empty() && cmd.slides.is_empty() {
            return Err(ValidationError::empty_field("prompt").into());
        }

        let theme = ThemeName::resolve(cmd.color_theme.as_deref());
        let mut presentation = Presentation::new(prompt.clone(), cmd.slides, theme);

        let generation = if !prompt.is_empty() && prompt != MANUAL_SAVE_PROMPT {
            let id = presentation.next_slide_id();
            let (slide, generation) =
                generate_slide_with(self.generator.as_ref(), id, &prompt, theme).await;
            presentation.append_slide(slide);
            Some(generation)
        } else {
            None
        };

        self.store.put(presentation.clone()).await?;

        tracing::info!(
            presentation_id = %presentation.id,
            slides = presentation.slide_count(),
            "Created presentation"
        );

        Ok(CreatePresentationResult {
            presentation,
            generation,
        })
    }
}
