//! HTTP adapter for slide generation, presentations and export.
//!
//! Exposes the slide domain via REST API under `/api`:
//! - `GET /api/health` - Service status
//! - `GET /api/color-themes` - Built-in palettes
//! - `POST /api/generate-slide` - Generate one slide
//! - `POST /api/quick-inspiration` - Content for a short phrase
//! - `POST /api/presentai` - Create a presentation
//! - `GET|PUT /api/presentations/:id` - Fetch or replace a presentation
//! - `POST /api/presentations/:id/slides` - Append a generated slide
//! - `POST /api/export-pptx`, `POST /api/presentations/:id/export` - PPTX download

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{SlidesApiError, SlidesAppState};
pub use routes::{slides_router, slides_routes};
