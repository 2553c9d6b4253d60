//! HTTP handlers for slide and presentation endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    AppendSlideCommand, AppendSlideHandler, CreatePresentationCommand, CreatePresentationHandler,
    DeckExportError, ExportDeckCommand, ExportDeckHandler, ExportPresentationCommand,
    ExportPresentationHandler, GenerateSlideCommand, GenerateSlideHandler, GetPresentationHandler,
    GetPresentationQuery, ListPresentationsHandler, PresentationError, QuickInspirationCommand,
    QuickInspirationHandler, UpdatePresentationCommand, UpdatePresentationHandler,
};
use crate::domain::foundation::{PresentationId, Timestamp, ValidationError};
use crate::domain::theme::{all_palettes, ThemeName};
use crate::ports::{ContentGenerator, DeckExporter, ExportError, ExportedDeck, PresentationStore};

use super::dto::{
    slides_from_payload, AppendSlideRequest, AppendSlideResponse, ColorThemesResponse,
    CreatePresentationRequest, CreatePresentationResponse, ErrorResponse, ExportRequest,
    GenerateSlideRequest, GenerateSlideResponse, HealthResponse, PresentationListResponse,
    PresentationResponse, QuickInspirationRequest, QuickInspirationResponse, SlidePayload,
    UpdatePresentationRequest, UpdatePresentationResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Cloned for each request; dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct SlidesAppState {
    pub generator: Arc<dyn ContentGenerator>,
    pub store: Arc<dyn PresentationStore>,
    pub exporter: Arc<dyn DeckExporter>,
    /// Download names are `{prefix}_{YYYYMMDD_HHMMSS}.pptx`.
    pub export_filename_prefix: String,
}

impl SlidesAppState {
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        store: Arc<dyn PresentationStore>,
        exporter: Arc<dyn DeckExporter>,
        export_filename_prefix: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            store,
            exporter,
            export_filename_prefix: export_filename_prefix.into(),
        }
    }

    pub fn generate_slide_handler(&self) -> GenerateSlideHandler {
        GenerateSlideHandler::new(self.generator.clone())
    }

    pub fn quick_inspiration_handler(&self) -> QuickInspirationHandler {
        QuickInspirationHandler::new(self.generator.clone())
    }

    pub fn create_presentation_handler(&self) -> CreatePresentationHandler {
        CreatePresentationHandler::new(self.generator.clone(), self.store.clone())
    }

    pub fn get_presentation_handler(&self) -> GetPresentationHandler {
        GetPresentationHandler::new(self.store.clone())
    }

    pub fn list_presentations_handler(&self) -> ListPresentationsHandler {
        ListPresentationsHandler::new(self.store.clone())
    }

    pub fn update_presentation_handler(&self) -> UpdatePresentationHandler {
        UpdatePresentationHandler::new(self.store.clone())
    }

    pub fn append_slide_handler(&self) -> AppendSlideHandler {
        AppendSlideHandler::new(self.generator.clone(), self.store.clone())
    }

    pub fn export_deck_handler(&self) -> ExportDeckHandler {
        ExportDeckHandler::new(self.exporter.clone(), self.export_filename_prefix.clone())
    }

    pub fn export_presentation_handler(&self) -> ExportPresentationHandler {
        ExportPresentationHandler::new(
            self.store.clone(),
            self.exporter.clone(),
            self.export_filename_prefix.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health - Service status and capabilities
pub async fn health(State(state): State<SlidesAppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Timestamp::now(),
        ai_configured: state.generator.is_model_configured(),
        pptx_available: state.exporter.is_available(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/color-themes - Built-in palettes
pub async fn color_themes() -> impl IntoResponse {
    let themes: BTreeMap<&'static str, _> = all_palettes()
        .map(|(name, palette)| (name.as_str(), *palette))
        .collect();
    Json(ColorThemesResponse {
        themes,
        available_colors: ThemeName::ALL.iter().map(ThemeName::as_str).collect(),
    })
}

/// GET /api/presentations - All stored presentations
pub async fn list_presentations(
    State(state): State<SlidesAppState>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let presentations = state.list_presentations_handler().handle().await?;
    let presentations: Vec<PresentationResponse> =
        presentations.iter().map(PresentationResponse::from).collect();

    Ok(Json(PresentationListResponse {
        count: presentations.len(),
        presentations,
    }))
}

/// GET /api/presentations/:id - One stored presentation
pub async fn get_presentation(
    State(state): State<SlidesAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let presentation_id = parse_presentation_id(&id)?;
    let presentation = state
        .get_presentation_handler()
        .handle(GetPresentationQuery { presentation_id })
        .await?;

    Ok(Json(PresentationResponse::from(&presentation)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/generate-slide - Generate one slide from a prompt
pub async fn generate_slide(
    State(state): State<SlidesAppState>,
    Json(request): Json<GenerateSlideRequest>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let result = state
        .generate_slide_handler()
        .handle(GenerateSlideCommand {
            prompt: request.prompt,
            color_theme: request.color_theme,
        })
        .await?;

    Ok(Json(GenerateSlideResponse {
        slide: SlidePayload::from(&result.slide),
        ai_response: result.generation.record,
        generation: result.generation.outcome,
        message: "Slide generated successfully",
    }))
}

/// POST /api/quick-inspiration - Content for a short inspiration phrase
pub async fn quick_inspiration(
    State(state): State<SlidesAppState>,
    Json(request): Json<QuickInspirationRequest>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let generation = state
        .quick_inspiration_handler()
        .handle(QuickInspirationCommand {
            inspiration: request.inspiration,
        })
        .await?;

    Ok(Json(QuickInspirationResponse {
        slide_content: generation.record,
        generation: generation.outcome,
        message: "Inspiration processed successfully",
    }))
}

/// POST /api/presentai - Create a presentation, optionally generating a slide
pub async fn create_presentation(
    State(state): State<SlidesAppState>,
    Json(request): Json<CreatePresentationRequest>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let slides = slides_from_payload(request.slides)?;
    let result = state
        .create_presentation_handler()
        .handle(CreatePresentationCommand {
            prompt: request.prompt,
            slides,
            color_theme: request.color_theme,
        })
        .await?;

    let response = CreatePresentationResponse {
        presentation_id: result.presentation.id,
        slides: result.presentation.slides.iter().map(SlidePayload::from).collect(),
        generation: result.generation.map(|g| g.outcome),
        message: "Presentation created successfully",
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/presentations/:id - Replace a presentation's slides
pub async fn update_presentation(
    State(state): State<SlidesAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePresentationRequest>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let presentation_id = parse_presentation_id(&id)?;
    let slides = request.slides.map(slides_from_payload).transpose()?;
    let presentation = state
        .update_presentation_handler()
        .handle(UpdatePresentationCommand {
            presentation_id,
            slides,
        })
        .await?;

    Ok(Json(UpdatePresentationResponse {
        presentation: PresentationResponse::from(&presentation),
        message: "Presentation updated successfully",
    }))
}

/// POST /api/presentations/:id/slides - Generate and append one slide
pub async fn append_slide(
    State(state): State<SlidesAppState>,
    Path(id): Path<String>,
    Json(request): Json<AppendSlideRequest>,
) -> Result<impl IntoResponse, SlidesApiError> {
    let presentation_id = parse_presentation_id(&id)?;
    let result = state
        .append_slide_handler()
        .handle(AppendSlideCommand {
            presentation_id,
            prompt: request.prompt,
            color_theme: request.color_theme,
        })
        .await?;

    let response = AppendSlideResponse {
        slide: SlidePayload::from(&result.slide),
        presentation: PresentationResponse::from(&result.presentation),
        message: "Slide added successfully",
    };

    Ok((StatusCode::CREATED, Json(response)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Export Handlers (binary downloads)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/export-pptx - Export caller-supplied slides
pub async fn export_pptx(
    State(state): State<SlidesAppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, SlidesApiError> {
    let slides = slides_from_payload(request.slides)?;
    let deck = state
        .export_deck_handler()
        .handle(ExportDeckCommand { slides })
        .await?;

    Ok(download(deck))
}

/// POST /api/presentations/:id/export - Export a stored presentation
pub async fn export_presentation(
    State(state): State<SlidesAppState>,
    Path(id): Path<String>,
) -> Result<Response, SlidesApiError> {
    let presentation_id = parse_presentation_id(&id)?;
    let deck = state
        .export_presentation_handler()
        .handle(ExportPresentationCommand { presentation_id })
        .await?;

    Ok(download(deck))
}

fn download(deck: ExportedDeck) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", deck.filename);
    let mut response = (StatusCode::OK, deck.content).into_response();
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&deck.content_type) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

/// Malformed ids cannot name a stored presentation, so they read as 404.
fn parse_presentation_id(raw: &str) -> Result<PresentationId, SlidesApiError> {
    raw.parse()
        .map_err(|_| SlidesApiError::NotFound(format!("Presentation not found: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum SlidesApiError {
    Validation(String),
    NotFound(String),
    ExportUnavailable(String),
    ExportFailed(String),
    Internal(String),
}

impl From<ValidationError> for SlidesApiError {
    fn from(err: ValidationError) -> Self {
        SlidesApiError::Validation(err.to_string())
    }
}

impl From<PresentationError> for SlidesApiError {
    fn from(err: PresentationError) -> Self {
        match err {
            PresentationError::Validation(e) => e.into(),
            PresentationError::NotFound(_) => SlidesApiError::NotFound(err.to_string()),
        }
    }
}

impl From<DeckExportError> for SlidesApiError {
    fn from(err: DeckExportError) -> Self {
        match err {
            DeckExportError::Validation(e) => e.into(),
            DeckExportError::NotFound(_) => SlidesApiError::NotFound(err.to_string()),
            DeckExportError::Export(e @ ExportError::Unavailable(_)) => {
                SlidesApiError::ExportUnavailable(e.to_string())
            }
            DeckExportError::Export(e) => SlidesApiError::ExportFailed(e.to_string()),
            DeckExportError::TaskFailed(_) => SlidesApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for SlidesApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            SlidesApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED", msg),
            SlidesApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "PRESENTATION_NOT_FOUND", msg)
            }
            SlidesApiError::ExportUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "EXPORT_UNAVAILABLE", msg)
            }
            SlidesApiError::ExportFailed(msg) => {
                tracing::error!(error = %msg, "Export failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_FAILED", msg)
            }
            SlidesApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}
