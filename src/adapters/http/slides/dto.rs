//! HTTP DTOs (Data Transfer Objects) for slide and presentation endpoints.
//!
//! These types define the JSON shapes the editor front end sends and
//! expects. Slides travel in the editor's format (`type`, `tableData`,
//! string style values) and are converted to domain types at this boundary.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain::content::{ContentRecord, GenerationOutcome};
use crate::domain::foundation::{PresentationId, Timestamp, ValidationError};
use crate::domain::presentation::Presentation;
use crate::domain::slide::{
    AiMetadata, ElementKind, ElementStyle, Slide, SlideElement, TableData, TextRole,
    DEFAULT_TABLE_COLS, DEFAULT_TABLE_ROWS,
};
use crate::domain::theme::{palette, RgbColor, ThemeName, ThemePalette};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to generate a single slide.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSlideRequest {
    #[serde(default)]
    pub prompt: String,
    pub color_theme: Option<String>,
}

/// Request for quick inspiration content.
#[derive(Debug, Clone, Deserialize)]
pub struct QuickInspirationRequest {
    #[serde(default)]
    pub inspiration: String,
}

/// Request to create (save) a presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePresentationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub slides: Vec<SlidePayload>,
    pub color_theme: Option<String>,
}

/// Request to replace a presentation's slides.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePresentationRequest {
    pub slides: Option<Vec<SlidePayload>>,
}

/// Request to generate and append one slide.
#[derive(Debug, Clone, Deserialize)]
pub struct AppendSlideRequest {
    #[serde(default)]
    pub prompt: String,
    pub color_theme: Option<String>,
}

/// Request to export caller-supplied slides.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub slides: Vec<SlidePayload>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Slide wire format
// ════════════════════════════════════════════════════════════════════════════════

/// A slide as the editor sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidePayload {
    #[serde(default, deserialize_with = "de_slide_id")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Legacy free-text field; always empty on output.
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "de_null_as_default")]
    pub notes: String,
    #[serde(default)]
    pub elements: Vec<ElementPayload>,
    /// Design theme label (e.g. "professional").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default)]
    pub color_theme: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_metadata: Option<AiMetadataPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiMetadataPayload {
    #[serde(default)]
    pub original_prompt: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// A positioned element in the editor's format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPayload {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    /// `paragraph` or `bullets`; inferred from the content when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "de_coordinate")]
    pub x: i32,
    #[serde(default, deserialize_with = "de_coordinate")]
    pub y: i32,
    #[serde(default, deserialize_with = "de_coordinate")]
    pub width: i32,
    #[serde(default, deserialize_with = "de_coordinate")]
    pub height: i32,
    #[serde(default)]
    pub style: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_data: Option<TablePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePayload {
    #[serde(default = "default_table_rows")]
    pub rows: usize,
    #[serde(default = "default_table_cols")]
    pub cols: usize,
    #[serde(default)]
    pub cells: Vec<Vec<Value>>,
}

fn default_table_rows() -> usize {
    DEFAULT_TABLE_ROWS
}

fn default_table_cols() -> usize {
    DEFAULT_TABLE_COLS
}

/// Editor positions may be fractional after dragging.
fn de_coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(value.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
}

fn de_slide_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    Ok(value.max(0.0) as u64)
}

fn de_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Style and cell values are kept as text; non-string JSON is stored in its
/// JSON form.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accepts RFC 3339 and the zone-less ISO form older clients send.
fn parse_timestamp(value: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(Timestamp::from_datetime(dt.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Timestamp::from_datetime(naive.and_utc()))
}

impl From<TablePayload> for TableData {
    fn from(payload: TablePayload) -> Self {
        let cells = payload
            .cells
            .iter()
            .map(|row| row.iter().map(value_text).collect())
            .collect();
        TableData::new(payload.rows, payload.cols, cells)
    }
}

impl TryFrom<ElementPayload> for SlideElement {
    type Error = ValidationError;

    fn try_from(payload: ElementPayload) -> Result<Self, Self::Error> {
        let kind = ElementKind::parse(&payload.kind)?;
        let role = payload
            .role
            .as_deref()
            .and_then(TextRole::parse)
            .unwrap_or_else(|| TextRole::classify(&payload.content));
        let style: ElementStyle = payload
            .style
            .iter()
            .map(|(key, value)| (key.clone(), value_text(value)))
            .collect();

        let table_data = match kind {
            ElementKind::Table => Some(match payload.table_data {
                Some(table) => TableData::from(table),
                None => TableData::default(),
            }),
            _ => None,
        };

        Ok(SlideElement {
            id: payload.id,
            kind,
            role,
            content: payload.content,
            x: payload.x,
            y: payload.y,
            width: payload.width,
            height: payload.height,
            style,
            table_data,
        })
    }
}

impl From<&SlideElement> for ElementPayload {
    fn from(element: &SlideElement) -> Self {
        let role = match element.kind {
            ElementKind::Text | ElementKind::BulletList => Some(element.role.as_str().to_string()),
            _ => None,
        };
        Self {
            id: element.id.clone(),
            kind: element.kind.as_str().to_string(),
            content: element.content.clone(),
            role,
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            style: element
                .style
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect(),
            table_data: element.table_data.as_ref().map(|table| TablePayload {
                rows: table.rows,
                cols: table.cols,
                cells: table
                    .cells
                    .iter()
                    .map(|row| row.iter().cloned().map(Value::String).collect())
                    .collect(),
            }),
        }
    }
}

impl TryFrom<SlidePayload> for Slide {
    type Error = ValidationError;

    fn try_from(payload: SlidePayload) -> Result<Self, Self::Error> {
        let theme = ThemeName::resolve(payload.color_theme.as_deref());
        let background = match payload.background_color.as_deref().map(str::trim) {
            Some(hex) if !hex.is_empty() => RgbColor::from_hex(hex)?,
            _ => palette(theme).background,
        };
        let elements = payload
            .elements
            .into_iter()
            .map(SlideElement::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let ai_metadata = payload.ai_metadata.and_then(|meta| {
            let original_prompt = meta.original_prompt?;
            let generated_at = meta
                .generated_at
                .as_deref()
                .and_then(parse_timestamp)
                .unwrap_or_default();
            Some(AiMetadata {
                original_prompt,
                generated_at,
            })
        });
        let notes = Some(payload.notes).filter(|n| !n.is_empty());

        Ok(Slide {
            id: payload.id,
            title: payload.title,
            elements,
            color_theme: theme,
            background_color: background,
            notes,
            design_theme: payload.theme.unwrap_or_default(),
            layout: payload.layout.unwrap_or_default(),
            ai_metadata,
        })
    }
}

impl From<&Slide> for SlidePayload {
    fn from(slide: &Slide) -> Self {
        let non_empty = |s: &String| Some(s.clone()).filter(|s| !s.is_empty());
        Self {
            id: slide.id,
            title: slide.title.clone(),
            content: String::new(),
            notes: slide.notes.clone().unwrap_or_default(),
            elements: slide.elements.iter().map(ElementPayload::from).collect(),
            theme: non_empty(&slide.design_theme),
            layout: non_empty(&slide.layout),
            color_theme: Some(slide.color_theme.as_str().to_string()),
            background_color: Some(slide.background_color.to_hex()),
            ai_metadata: slide.ai_metadata.as_ref().map(|meta| AiMetadataPayload {
                original_prompt: Some(meta.original_prompt.clone()),
                generated_at: Some(meta.generated_at.as_datetime().to_rfc3339()),
            }),
        }
    }
}

/// Converts a batch of wire slides, failing on the first invalid one.
pub fn slides_from_payload(payload: Vec<SlidePayload>) -> Result<Vec<Slide>, ValidationError> {
    payload.into_iter().map(Slide::try_from).collect()
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Service health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub ai_configured: bool,
    pub pptx_available: bool,
    pub version: &'static str,
}

/// Built-in palettes keyed by theme name.
#[derive(Debug, Clone, Serialize)]
pub struct ColorThemesResponse {
    pub themes: BTreeMap<&'static str, ThemePalette>,
    pub available_colors: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateSlideResponse {
    pub slide: SlidePayload,
    pub ai_response: ContentRecord,
    pub generation: GenerationOutcome,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickInspirationResponse {
    pub slide_content: ContentRecord,
    pub generation: GenerationOutcome,
    pub message: &'static str,
}

/// A stored presentation.
#[derive(Debug, Clone, Serialize)]
pub struct PresentationResponse {
    pub id: PresentationId,
    pub prompt: String,
    pub slides: Vec<SlidePayload>,
    pub default_color_theme: ThemeName,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Presentation> for PresentationResponse {
    fn from(presentation: &Presentation) -> Self {
        Self {
            id: presentation.id,
            prompt: presentation.prompt.clone(),
            slides: presentation.slides.iter().map(SlidePayload::from).collect(),
            default_color_theme: presentation.default_color_theme,
            created_at: presentation.created_at,
            updated_at: presentation.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePresentationResponse {
    pub presentation_id: PresentationId,
    pub slides: Vec<SlidePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<GenerationOutcome>,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PresentationListResponse {
    pub presentations: Vec<PresentationResponse>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePresentationResponse {
    pub presentation: PresentationResponse,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppendSlideResponse {
    pub slide: SlidePayload,
    pub presentation: PresentationResponse,
    pub message: &'static str,
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    pub code: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(code: impl Into<String>, message: impl Into<String>, details: Value) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, message)
        }
    }
}
