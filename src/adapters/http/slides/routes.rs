//! Axum router configuration for slide and presentation endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    append_slide, color_themes, create_presentation, export_pptx, export_presentation,
    generate_slide, get_presentation, health, list_presentations, quick_inspiration,
    update_presentation, SlidesAppState,
};

/// Create the slides API router.
///
/// # Routes
///
/// - `GET /health` - Service status and capabilities
/// - `GET /color-themes` - Built-in palettes
/// - `POST /generate-slide` - Generate one slide
/// - `POST /quick-inspiration` - Content for a short phrase
/// - `POST /presentai` - Create a presentation
/// - `GET /presentations` - List presentations
/// - `GET /presentations/:id` - Fetch a presentation
/// - `PUT /presentations/:id` - Replace a presentation's slides
/// - `POST /presentations/:id/slides` - Generate and append a slide
/// - `POST /presentations/:id/export` - Download a stored presentation
/// - `POST /export-pptx` - Download caller-supplied slides
pub fn slides_routes() -> Router<SlidesAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/color-themes", get(color_themes))
        // Generation
        .route("/generate-slide", post(generate_slide))
        .route("/quick-inspiration", post(quick_inspiration))
        // Presentations
        .route("/presentai", post(create_presentation))
        .route("/presentations", get(list_presentations))
        .route(
            "/presentations/:id",
            get(get_presentation).put(update_presentation),
        )
        .route("/presentations/:id/slides", post(append_slide))
        // Export
        .route("/presentations/:id/export", post(export_presentation))
        .route("/export-pptx", post(export_pptx))
}

/// Create the complete slides module router, mounted under `/api`.
///
/// # Example
///
/// ```ignore
/// let app = slides_router().with_state(SlidesAppState::new(generator, store, exporter, "deck"));
/// ```
pub fn slides_router() -> Router<SlidesAppState> {
    Router::new().nest("/api", slides_routes())
}
