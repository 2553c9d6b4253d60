//! Slide aggregate.

use crate::domain::content::ContentRecord;
use crate::domain::foundation::Timestamp;
use crate::domain::theme::{palette, RgbColor, ThemeName};

use super::element::SlideElement;
use super::layout::{map_to_elements, UNTITLED_SLIDE};

/// Provenance of a generated slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiMetadata {
    pub original_prompt: String,
    pub generated_at: Timestamp,
}

/// A single slide.
///
/// `background_color` is resolved from the theme when the slide is created
/// and is not recomputed if the theme name changes later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: u64,
    pub title: String,
    pub elements: Vec<SlideElement>,
    pub color_theme: ThemeName,
    pub background_color: RgbColor,
    pub notes: Option<String>,
    pub design_theme: String,
    pub layout: String,
    pub ai_metadata: Option<AiMetadata>,
}

impl Slide {
    /// Creates an empty slide with the theme's background.
    pub fn new(id: u64, title: impl Into<String>, color_theme: ThemeName) -> Self {
        Self {
            id,
            title: title.into(),
            elements: Vec::new(),
            color_theme,
            background_color: palette(color_theme).background,
            notes: None,
            design_theme: String::new(),
            layout: String::new(),
            ai_metadata: None,
        }
    }

    /// Lays out a content record as a new slide.
    pub fn from_content(
        id: u64,
        record: &ContentRecord,
        color_theme: ThemeName,
        original_prompt: &str,
    ) -> Self {
        let generated_at = Timestamp::now();
        let title = if record.title.trim().is_empty() {
            UNTITLED_SLIDE.to_string()
        } else {
            record.title.clone()
        };
        Self {
            elements: map_to_elements(record, color_theme),
            design_theme: record.design_theme.clone(),
            layout: record.layout_type.clone(),
            ai_metadata: Some(AiMetadata {
                original_prompt: original_prompt.to_string(),
                generated_at,
            }),
            ..Self::new(id, title, color_theme)
        }
    }

    pub fn with_elements(mut self, elements: Vec<SlideElement>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_background(mut self, color: RgbColor) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
