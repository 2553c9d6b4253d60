//! Office Open XML (`.pptx`) deck exporter.
//!
//! Every slide is rendered to XML before anything is zipped, so a failure
//! on any slide returns an error and no bytes.

mod package;
mod slide_xml;
mod table;
mod templates;
mod text_frame;
mod xml;

use crate::domain::foundation::Timestamp;
use crate::domain::slide::Slide;
use crate::ports::{DeckExporter, ExportError};

use package::{write_package, Part};

pub use table::MAX_TABLE_DIMENSION;

/// Failure while rendering one slide's XML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("table {field} must be between 1 and {max}, got {value}")]
    InvalidTable {
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("xml formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Writes decks as PowerPoint packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxDeckExporter;

impl PptxDeckExporter {
    pub fn new() -> Self {
        Self
    }
}

/// The package title is the first slide's title.
fn document_title(slides: &[Slide]) -> &str {
    slides
        .first()
        .map(|s| s.title.as_str())
        .unwrap_or("Presentation")
}

impl DeckExporter for PptxDeckExporter {
    fn export(&self, slides: &[Slide]) -> Result<Vec<u8>, ExportError> {
        if slides.is_empty() {
            return Err(ExportError::package("deck has no slides"));
        }

        let rendered = slides
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                slide_xml::render_slide(slide).map_err(|e| ExportError::slide(index, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = rendered.len();
        let created = Timestamp::now().as_datetime().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let mut parts = vec![
            Part::new("[Content_Types].xml", templates::content_types(count)),
            Part::new("_rels/.rels", templates::root_rels()),
            Part::new("docProps/core.xml", templates::core_props(document_title(slides), &created)),
            Part::new("docProps/app.xml", templates::app_props(count)),
            Part::new("ppt/presentation.xml", templates::presentation(count)),
            Part::new("ppt/_rels/presentation.xml.rels", templates::presentation_rels(count)),
            Part::new("ppt/slideMasters/slideMaster1.xml", templates::slide_master()),
            Part::new("ppt/slideMasters/_rels/slideMaster1.xml.rels", templates::slide_master_rels()),
            Part::new("ppt/slideLayouts/slideLayout1.xml", templates::slide_layout()),
            Part::new("ppt/slideLayouts/_rels/slideLayout1.xml.rels", templates::slide_layout_rels()),
            Part::new("ppt/theme/theme1.xml", templates::theme()),
            Part::new("ppt/presProps.xml", templates::pres_props()),
            Part::new("ppt/viewProps.xml", templates::view_props()),
            Part::new("ppt/tableStyles.xml", templates::table_styles()),
        ];
        for (index, xml) in rendered.into_iter().enumerate() {
            let n = index + 1;
            parts.push(Part::new(format!("ppt/slides/slide{}.xml", n), xml));
            parts.push(Part::new(
                format!("ppt/slides/_rels/slide{}.xml.rels", n),
                templates::slide_rels(),
            ));
        }

        let bytes = write_package(&parts).map_err(|e| ExportError::package(e.to_string()))?;
        tracing::debug!(slides = count, bytes = bytes.len(), "Rendered pptx package");
        Ok(bytes)
    }

    fn is_available(&self) -> bool {
        true
    }
}
