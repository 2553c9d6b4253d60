//! ExportPresentationHandler - export a stored presentation.

use std::sync::Arc;

use crate::domain::foundation::PresentationId;
use crate::ports::{DeckExporter, ExportError, ExportedDeck, PresentationStore, StoreError};

use super::{render_deck, DeckExportError};

#[derive(Debug, Clone)]
pub struct ExportPresentationCommand {
    pub presentation_id: PresentationId,
}

pub struct ExportPresentationHandler {
    store: Arc<dyn PresentationStore>,
    exporter: Arc<dyn DeckExporter>,
    filename_prefix: String,
}

impl ExportPresentationHandler {
    pub fn new(
        store: Arc<dyn PresentationStore>,
        exporter: Arc<dyn DeckExporter>,
        filename_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            exporter,
            filename_prefix: filename_prefix.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: ExportPresentationCommand,
    ) -> Result<ExportedDeck, DeckExportError> {
        // Checked first so an unavailable writer never reads the store.
        if !self.exporter.is_available() {
            return Err(ExportError::unavailable("PPTX export is not available").into());
        }

        let presentation = self
            .store
            .get(&cmd.presentation_id)
            .await
            .map_err(|StoreError::NotFound(id)| DeckExportError::NotFound(id))?
            .ok_or(DeckExportError::NotFound(cmd.presentation_id))?;

        render_deck(&self.exporter, presentation.slides, &self.filename_prefix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{CountingStore, StubExporter};
    use crate::domain::presentation::Presentation;
    use crate::domain::slide::Slide;
    use crate::domain::theme::ThemeName;

    async fn stored(slides: Vec<Slide>) -> (Arc<CountingStore>, PresentationId) {
        let store = Arc::new(CountingStore::default());
        let presentation = Presentation::new("oceans", slides, ThemeName::Blue);
        let id = presentation.id;
        store.put(presentation).await.unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn exports_stored_slides() {
        let (store, id) = stored(vec![Slide::new(1, "One", ThemeName::Blue)]).await;
        let exporter = Arc::new(StubExporter::available());

        let deck = ExportPresentationHandler::new(store, exporter.clone(), "deck")
            .handle(ExportPresentationCommand { presentation_id: id })
            .await
            .unwrap();
        assert_eq!(deck.content, vec![1]);
        assert_eq!(exporter.calls(), 1);
    }

    #[tokio::test]
    async fn unavailable_exporter_never_touches_store() {
        let (store, id) = stored(vec![Slide::new(1, "One", ThemeName::Blue)]).await;
        let calls_before = store.calls();

        let err = ExportPresentationHandler::new(
            store.clone(),
            Arc::new(StubExporter::unavailable()),
            "deck",
        )
        .handle(ExportPresentationCommand { presentation_id: id })
        .await
        .unwrap_err();

        assert!(matches!(err, DeckExportError::Export(ExportError::Unavailable(_))));
        assert_eq!(store.calls(), calls_before);
    }

    #[tokio::test]
    async fn missing_presentation_is_not_found() {
        let store = Arc::new(CountingStore::default());
        let id = PresentationId::new();
        let err = ExportPresentationHandler::new(store, Arc::new(StubExporter::available()), "deck")
            .handle(ExportPresentationCommand { presentation_id: id })
            .await
            .unwrap_err();
        assert_eq!(err, DeckExportError::NotFound(id));
    }

    #[tokio::test]
    async fn empty_presentation_is_a_validation_error() {
        let (store, id) = stored(Vec::new()).await;
        let exporter = Arc::new(StubExporter::available());
        let err = ExportPresentationHandler::new(store, exporter.clone(), "deck")
            .handle(ExportPresentationCommand { presentation_id: id })
            .await
            .unwrap_err();
        assert!(matches!(err, DeckExportError::Validation(_)));
        assert_eq!(exporter.calls(), 0);
    }
}
