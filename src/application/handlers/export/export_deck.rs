//! ExportDeckHandler - export slides supplied by the caller.

use std::sync::Arc;

use crate::domain::slide::Slide;
use crate::ports::{DeckExporter, ExportedDeck};

use super::{render_deck, DeckExportError};

#[derive(Debug, Clone)]
pub struct ExportDeckCommand {
    pub slides: Vec<Slide>,
}

pub struct ExportDeckHandler {
    exporter: Arc<dyn DeckExporter>,
    filename_prefix: String,
}

impl ExportDeckHandler {
    pub fn new(exporter: Arc<dyn DeckExporter>, filename_prefix: impl Into<String>) -> Self {
        Self {
            exporter,
            filename_prefix: filename_prefix.into(),
        }
    }

    pub async fn handle(&self, cmd: ExportDeckCommand) -> Result<ExportedDeck, DeckExportError> {
        render_deck(&self.exporter, cmd.slides, &self.filename_prefix).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::StubExporter;
    use crate::domain::theme::ThemeName;
    use crate::ports::PPTX_CONTENT_TYPE;

    fn slides() -> Vec<Slide> {
        vec![
            Slide::new(1, "One", ThemeName::Blue),
            Slide::new(2, "Two", ThemeName::Blue),
        ]
    }

    #[tokio::test]
    async fn exports_with_timestamped_filename() {
        let exporter = Arc::new(StubExporter::available());
        let deck = ExportDeckHandler::new(exporter.clone(), "slideflow_presentation")
            .handle(ExportDeckCommand { slides: slides() })
            .await
            .unwrap();

        assert_eq!(exporter.calls(), 1);
        assert_eq!(deck.content, vec![2]);
        assert_eq!(deck.content_type, PPTX_CONTENT_TYPE);
        assert!(deck.filename.starts_with("slideflow_presentation_"));
        assert!(deck.filename.ends_with(".pptx"));
        // prefix + '_' + YYYYMMDD_HHMMSS + ".pptx"
        assert_eq!(deck.filename.len(), "slideflow_presentation_".len() + 15 + 5);
    }

    #[tokio::test]
    async fn empty_slides_rejected_before_exporter() {
        let exporter = Arc::new(StubExporter::available());
        let err = ExportDeckHandler::new(exporter.clone(), "deck")
            .handle(ExportDeckCommand { slides: Vec::new() })
            .await
            .unwrap_err();

        assert!(matches!(err, DeckExportError::Validation(_)));
        assert_eq!(exporter.calls(), 0);
    }

    #[tokio::test]
    async fn unavailable_exporter_is_reported() {
        let exporter = Arc::new(StubExporter::unavailable());
        let err = ExportDeckHandler::new(exporter, "deck")
            .handle(ExportDeckCommand { slides: slides() })
            .await
            .unwrap_err();

        assert!(matches!(err, DeckExportError::Export(ref e) if e.is_unavailable()));
    }
}
