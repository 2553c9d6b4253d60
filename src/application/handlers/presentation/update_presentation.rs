//! UpdatePresentationHandler - replaces the slide list of a stored
//! presentation. Without slides only `updated_at` moves.

use std::sync::Arc;

use crate::domain::foundation::PresentationId;
use crate::domain::presentation::Presentation;
use crate::domain::slide::Slide;
use crate::ports::PresentationStore;

use super::PresentationError;

#[derive(Debug, Clone)]
pub struct UpdatePresentationCommand {
    pub presentation_id: PresentationId,
    pub slides: Option<Vec<Slide>>,
}

pub struct UpdatePresentationHandler {
    store: Arc<dyn PresentationStore>,
}

impl UpdatePresentationHandler {
    pub fn new(store: Arc<dyn PresentationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdatePresentationCommand,
    ) -> Result<Presentation, PresentationError> {
        let slides = cmd.slides;
        let presentation = self
            .store
            .update(
                &cmd.presentation_id,
                Box::new(move |p: &mut Presentation| match slides {
                    Some(slides) => p.replace_slides(slides),
                    None => p.touch(),
                }),
            )
            .await?;

        tracing::info!(
            presentation_id = %presentation.id,
            slides = presentation.slide_count(),
            "Updated presentation"
        );
        Ok(presentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPresentationStore;
    use crate::domain::theme::ThemeName;

    #[tokio::test]
    async fn replaces_slides_and_bumps_updated_at() {
        let store = Arc::new(InMemoryPresentationStore::new());
        let original = Presentation::new(
            "oceans",
            vec![Slide::new(1, "Old", ThemeName::Blue)],
            ThemeName::Blue,
        );
        store.put(original.clone()).await.unwrap();

        let updated = UpdatePresentationHandler::new(store)
            .handle(UpdatePresentationCommand {
                presentation_id: original.id,
                slides: Some(vec![
                    Slide::new(1, "New", ThemeName::Blue),
                    Slide::new(2, "Another", ThemeName::Red),
                ]),
            })
            .await
            .unwrap();

        assert_eq!(updated.slides.len(), 2);
        assert_eq!(updated.slides[0].title, "New");
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
    }

    #[tokio::test]
    async fn missing_slides_keep_existing_content() {
        let store = Arc::new(InMemoryPresentationStore::new());
        let original = Presentation::new(
            "oceans",
            vec![Slide::new(1, "Keep", ThemeName::Blue)],
            ThemeName::Blue,
        );
        store.put(original.clone()).await.unwrap();

        let updated = UpdatePresentationHandler::new(store)
            .handle(UpdatePresentationCommand {
                presentation_id: original.id,
                slides: None,
            })
            .await
            .unwrap();
        assert_eq!(updated.slides, original.slides);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let id = PresentationId::new();
        let err = UpdatePresentationHandler::new(Arc::new(InMemoryPresentationStore::new()))
            .handle(UpdatePresentationCommand {
                presentation_id: id,
                slides: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err, PresentationError::NotFound(id));
    }
}
