//! Structured slide content produced by generation.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DESIGN_THEME: &str = "professional";
pub const DEFAULT_LAYOUT_TYPE: &str = "bullet-list";

/// Bullet lists are truncated to this many items.
pub const MAX_BULLET_POINTS: usize = 5;

/// Normalized slide content derived from a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub title: String,
    pub content: String,
    pub bullet_points: Vec<String>,
    pub design_theme: String,
    pub layout_type: String,
}

/// How a [`ContentRecord`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// The model returned a JSON object.
    Parsed,
    /// The model answered in prose and the free-text parser recovered it.
    FromFreeText,
    /// Templated content built from the prompt alone.
    Fallback,
}

impl GenerationOutcome {
    pub fn is_ai_generated(&self) -> bool {
        !matches!(self, GenerationOutcome::Fallback)
    }
}

/// A content record tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub record: ContentRecord,
    pub outcome: GenerationOutcome,
}

impl Generation {
    pub fn new(record: ContentRecord, outcome: GenerationOutcome) -> Self {
        Self { record, outcome }
    }
}
