//! Presentation handlers - create, extend, read and replace stored decks.

mod append_slide;
mod create_presentation;
mod get_presentation;
mod list_presentations;
mod update_presentation;

pub use append_slide::{AppendSlideCommand, AppendSlideHandler, AppendSlideResult};
pub use create_presentation::{
    CreatePresentationCommand, CreatePresentationHandler, CreatePresentationResult,
    MANUAL_SAVE_PROMPT,
};
pub use get_presentation::{GetPresentationHandler, GetPresentationQuery};
pub use list_presentations::ListPresentationsHandler;
pub use update_presentation::{UpdatePresentationCommand, UpdatePresentationHandler};

use thiserror::Error;

use crate::domain::foundation::{PresentationId, ValidationError};
use crate::ports::StoreError;

/// Errors from presentation handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Presentation not found: {0}")]
    NotFound(PresentationId),
}

impl From<StoreError> for PresentationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => PresentationError::NotFound(id),
        }
    }
}
