//! Presentation aggregate - an ordered deck of slides kept for the session.

use crate::domain::foundation::{PresentationId, Timestamp};
use crate::domain::slide::Slide;
use crate::domain::theme::ThemeName;

/// An ordered collection of slides created from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub id: PresentationId,
    pub prompt: String,
    pub slides: Vec<Slide>,
    pub default_color_theme: ThemeName,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Presentation {
    pub fn new(prompt: impl Into<String>, slides: Vec<Slide>, default_color_theme: ThemeName) -> Self {
        let now = Timestamp::now();
        Self {
            id: PresentationId::new(),
            prompt: prompt.into(),
            slides,
            default_color_theme,
            created_at: now,
            updated_at: now,
        }
    }

    /// Id for the next appended slide (one-based position).
    pub fn next_slide_id(&self) -> u64 {
        self.slides.len() as u64 + 1
    }

    pub fn append_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
        self.touch();
    }

    pub fn replace_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.touch();
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Bumps `updated_at`.
    pub fn touch(&mut self) {
        let now = Timestamp::now();
        // Keep updated_at monotonic even if the clock steps back.
        if now.is_after(&self.updated_at) {
            self.updated_at = now;
        }
    }
}
