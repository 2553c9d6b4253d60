//! Exporter used when the document writer is not part of the build.

use crate::domain::slide::Slide;
use crate::ports::{DeckExporter, ExportError};

/// Always reports unavailable; never produces bytes.
#[derive(Debug, Clone)]
pub struct UnavailableDeckExporter {
    reason: String,
}

impl UnavailableDeckExporter {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableDeckExporter {
    fn default() -> Self {
        Self::new("PPTX export is not available in this deployment")
    }
}

impl DeckExporter for UnavailableDeckExporter {
    fn export(&self, _slides: &[Slide]) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::unavailable(self.reason.clone()))
    }

    fn is_available(&self) -> bool {
        false
    }
}
