//! Deck exporter adapters.
//!
//! `PptxDeckExporter` is compiled in with the `pptx` feature; otherwise
//! [`default_exporter`] hands out the unavailable stand-in.

#[cfg(feature = "pptx")]
mod pptx;
mod unavailable;

use std::sync::Arc;

use crate::ports::DeckExporter;

#[cfg(feature = "pptx")]
pub use pptx::{PptxDeckExporter, RenderError, MAX_TABLE_DIMENSION};
pub use unavailable::UnavailableDeckExporter;

/// Exporter for this build, optionally disabled by configuration.
pub fn default_exporter(enabled: bool) -> Arc<dyn DeckExporter> {
    if !enabled {
        return Arc::new(UnavailableDeckExporter::new(
            "PPTX export is disabled by configuration",
        ));
    }
    build_exporter()
}

#[cfg(feature = "pptx")]
fn build_exporter() -> Arc<dyn DeckExporter> {
    Arc::new(PptxDeckExporter::new())
}

#[cfg(not(feature = "pptx"))]
fn build_exporter() -> Arc<dyn DeckExporter> {
    Arc::new(UnavailableDeckExporter::default())
}
