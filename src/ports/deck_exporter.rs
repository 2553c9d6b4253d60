//! Deck Exporter Port - converts slides into a downloadable presentation file.
//!
//! The domain hands over an ordered slice of slides; adapters (the PPTX
//! writer, or a stand-in when the writer is not compiled in) return the
//! finished document bytes or a typed failure. Implementations must never
//! return a partially written document.

use thiserror::Error;

use crate::domain::slide::Slide;

/// MIME type of a PowerPoint (OOXML) presentation.
pub const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Port for exporting slides as a presentation document.
///
/// # Contract
///
/// Implementations must:
/// - Render slides in the given order
/// - Fail with [`ExportError::Unavailable`] when the writer is absent
/// - Fail with [`ExportError::Slide`] or [`ExportError::Package`] without
///   returning partial output
///
/// Export is CPU-bound and synchronous; async callers run it on a blocking
/// thread.
pub trait DeckExporter: Send + Sync {
    /// Render slides into document bytes.
    fn export(&self, slides: &[Slide]) -> Result<Vec<u8>, ExportError>;

    /// Whether the document writer is usable in this deployment.
    fn is_available(&self) -> bool;
}

/// Exported presentation with download metadata.
#[derive(Debug, Clone)]
pub struct ExportedDeck {
    /// The document bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
}

impl ExportedDeck {
    /// Wraps PPTX bytes, appending the `.pptx` extension to `base_filename`.
    pub fn pptx(content: Vec<u8>, base_filename: &str) -> Self {
        Self {
            content,
            content_type: PPTX_CONTENT_TYPE.to_string(),
            filename: format!("{}.pptx", base_filename),
        }
    }
}

/// Errors that can occur during deck export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The document writer is not available in this deployment.
    #[error("Export unavailable: {0}")]
    Unavailable(String),

    /// A single slide could not be rendered.
    #[error("Failed to render slide {index}: {reason}")]
    Slide {
        /// Zero-based position of the slide in the request.
        index: usize,
        reason: String,
    },

    /// Assembling the document package failed.
    #[error("Failed to assemble presentation package: {0}")]
    Package(String),
}

impl ExportError {
    /// Create an unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Create a per-slide rendering error.
    pub fn slide(index: usize, reason: impl Into<String>) -> Self {
        Self::Slide {
            index,
            reason: reason.into(),
        }
    }

    /// Create a packaging error.
    pub fn package(reason: impl Into<String>) -> Self {
        Self::Package(reason.into())
    }

    /// Whether the failure comes from the deployment rather than the input.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ExportError::Unavailable(_))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────────────────────────────────────────────
    // ExportedDeck tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn exported_deck_uses_pptx_metadata() {
        let deck = ExportedDeck::pptx(vec![0x50, 0x4b], "slideflow_presentation_20240101_120000");
        assert_eq!(deck.filename, "slideflow_presentation_20240101_120000.pptx");
        assert_eq!(deck.content_type, PPTX_CONTENT_TYPE);
        assert_eq!(deck.content, vec![0x50, 0x4b]);
    }

    // ───────────────────────────────────────────────────────────────
    // ExportError tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn export_error_displays_messages() {
        let err = ExportError::unavailable("PPTX support not compiled in");
        assert!(err.to_string().contains("PPTX support not compiled in"));
        assert!(err.is_unavailable());

        let err = ExportError::slide(2, "table has 0 rows");
        assert_eq!(err.to_string(), "Failed to render slide 2: table has 0 rows");
        assert!(!err.is_unavailable());

        let err = ExportError::package("zip failure");
        assert!(err.to_string().contains("zip failure"));
    }

    // ───────────────────────────────────────────────────────────────
    // Trait object safety test
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn deck_exporter_is_object_safe() {
        fn check<T: DeckExporter + ?Sized>() {}
        check::<dyn DeckExporter>();
    }
}
