//! GetPresentationHandler - fetch one stored presentation.

use std::sync::Arc;

use crate::domain::foundation::PresentationId;
use crate::domain::presentation::Presentation;
use crate::ports::PresentationStore;

use super::PresentationError;

#[derive(Debug, Clone)]
pub struct GetPresentationQuery {
    pub presentation_id: PresentationId,
}

pub struct GetPresentationHandler {
    store: Arc<dyn PresentationStore>,
}

impl GetPresentationHandler {
    pub fn new(store: Arc<dyn PresentationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetPresentationQuery) -> Result<Presentation, PresentationError> {
        self.store
            .get(&query.presentation_id)
            .await?
            .ok_or(PresentationError::NotFound(query.presentation_id))
    }
}
