//! AppendSlideHandler - generates one slide and appends it to a stored
//! presentation.

use std::sync::Arc;

use crate::domain::foundation::PresentationId;
use crate::domain::presentation::Presentation;
use crate::domain::slide::Slide;
use crate::domain::theme::ThemeName;
use crate::ports::{ContentGenerator, PresentationStore};

use super::PresentationError;
use crate::application::handlers::slide::{generate_slide_with, require_text};

#[derive(Debug, Clone)]
pub struct AppendSlideCommand {
    pub presentation_id: PresentationId,
    pub prompt: String,
    /// Defaults to the presentation's theme.
    pub color_theme: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppendSlideResult {
    pub presentation: Presentation,
    pub slide: Slide,
}

pub struct AppendSlideHandler {
    generator: Arc<dyn ContentGenerator>,
    store: Arc<dyn PresentationStore>,
}

impl AppendSlideHandler {
    pub fn new(generator: Arc<dyn ContentGenerator>, store: Arc<dyn PresentationStore>) -> Self {
        Self { generator, store }
    }

    pub async fn handle(&self, cmd: AppendSlideCommand) -> Result<AppendSlideResult, PresentationError> {
        let prompt = require_text("prompt", &cmd.prompt)?;

        let existing = self
            .store
            .get(&cmd.presentation_id)
            .await?
            .ok_or(PresentationError::NotFound(cmd.presentation_id))?;

        let theme = match cmd.color_theme.as_deref() {
            Some(name) => ThemeName::resolve(Some(name)),
            None => existing.default_color_theme,
        };

        // The id is provisional; the store assigns the final position.
        let (slide, _) =
            generate_slide_with(self.generator.as_ref(), 0, &prompt, theme).await;

        let presentation = self
            .store
            .update(
                &cmd.presentation_id,
                Box::new(move |p: &mut Presentation| {
                    let mut slide = slide;
                    slide.id = p.next_slide_id();
                    p.append_slide(slide);
                }),
            )
            .await?;

        // The update runs under the store lock, so our slide is the last one.
        let slide = presentation
            .slides
            .last()
            .cloned()
            .ok_or(PresentationError::NotFound(cmd.presentation_id))?;

        tracing::info!(
            presentation_id = %presentation.id,
            slide_id = slide.id,
            "Appended generated slide"
        );

        Ok(AppendSlideResult { presentation, slide })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{CountingGenerator, CountingStore};

    async fn seeded() -> (Arc<CountingGenerator>, Arc<CountingStore>, PresentationId) {
        let generator = Arc::new(CountingGenerator::default());
        let store = Arc::new(CountingStore::default());
        let presentation = Presentation::new(
            "oceans",
            vec![Slide::new(1, "Intro", ThemeName::Cyan)],
            ThemeName::Cyan,
        );
        let id = presentation.id;
        store.put(presentation).await.unwrap();
        (generator, store, id)
    }

    #[tokio::test]
    async fn appends_with_next_position_and_presentation_theme() {
        let (generator, store, id) = seeded().await;
        let handler = AppendSlideHandler::new(generator.clone(), store.clone());

        let result = handler
            .handle(AppendSlideCommand {
                presentation_id: id,
                prompt: "tides".to_string(),
                color_theme: None,
            })
            .await
            .unwrap();

        assert_eq!(result.slide.id, 2);
        assert_eq!(result.slide.color_theme, ThemeName::Cyan);
        assert_eq!(result.presentation.slides.len(), 2);
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn explicit_theme_overrides_default() {
        let (generator, store, id) = seeded().await;
        let handler = AppendSlideHandler::new(generator, store);

        let result = handler
            .handle(AppendSlideCommand {
                presentation_id: id,
                prompt: "tides".to_string(),
                color_theme: Some("lime".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(result.slide.color_theme, ThemeName::Lime);
    }

    #[tokio::test]
    async fn missing_presentation_is_not_found_without_generating() {
        let (generator, store, _) = seeded().await;
        let handler = AppendSlideHandler::new(generator.clone(), store);
        let missing = PresentationId::new();

        let err = handler
            .handle(AppendSlideCommand {
                presentation_id: missing,
                prompt: "tides".to_string(),
                color_theme: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, PresentationError::NotFound(missing));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn concurrent_appends_get_distinct_positions() {
        let (generator, store, id) = seeded().await;
        let handler = Arc::new(AppendSlideHandler::new(generator, store.clone()));

        let tasks: Vec<_> = (0..10)
            .map(|n| {
                let handler = handler.clone();
                tokio::spawn(async move {
                    handler
                        .handle(AppendSlideCommand {
                            presentation_id: id,
                            prompt: format!("topic {}", n),
                            color_theme: None,
                        })
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored = store.get(&id).await.unwrap().unwrap();
        let ids: Vec<u64> = stored.slides.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=11u64).collect::<Vec<_>>());
    }
}
