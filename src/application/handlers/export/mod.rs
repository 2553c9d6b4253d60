//! Export handlers - render slides to a downloadable deck.

mod export_deck;
mod export_presentation;

pub use export_deck::{ExportDeckCommand, ExportDeckHandler};
pub use export_presentation::{ExportPresentationCommand, ExportPresentationHandler};

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{PresentationId, Timestamp, ValidationError};
use crate::domain::slide::Slide;
use crate::ports::{DeckExporter, ExportError, ExportedDeck};

/// Errors from export handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckExportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Presentation not found: {0}")]
    NotFound(PresentationId),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Export task failed: {0}")]
    TaskFailed(String),
}

/// Renders `slides` on a blocking thread and names the download.
pub(crate) async fn render_deck(
    exporter: &Arc<dyn DeckExporter>,
    slides: Vec<Slide>,
    filename_prefix: &str,
) -> Result<ExportedDeck, DeckExportError> {
    if slides.is_empty() {
        return Err(ValidationError::empty_field("slides").into());
    }
    if !exporter.is_available() {
        return Err(ExportError::unavailable("PPTX export is not available").into());
    }

    let count = slides.len();
    let exporter = Arc::clone(exporter);
    let bytes = tokio::task::spawn_blocking(move || exporter.export(&slides))
        .await
        .map_err(|e| DeckExportError::TaskFailed(e.to_string()))??;

    let filename = format!("{}_{}", filename_prefix, Timestamp::now().file_stamp());
    tracing::info!(slides = count, bytes = bytes.len(), filename = %filename, "Exported deck");
    Ok(ExportedDeck::pptx(bytes, &filename))
}
