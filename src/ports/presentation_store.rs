//! Presentation Store Port - session-lifetime storage for presentations.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::PresentationId;
use crate::domain::presentation::Presentation;

/// Mutation applied to a stored presentation under the store's lock.
pub type PresentationUpdate = Box<dyn FnOnce(&mut Presentation) + Send>;

/// Port for storing presentations.
///
/// Implementations must apply [`PresentationStore::update`] atomically so
/// concurrent appends to one presentation are never lost.
#[async_trait]
pub trait PresentationStore: Send + Sync {
    /// Insert or overwrite a presentation.
    async fn put(&self, presentation: Presentation) -> Result<(), StoreError>;

    /// Fetch a presentation by id.
    async fn get(&self, id: &PresentationId) -> Result<Option<Presentation>, StoreError>;

    /// Apply `update` to a stored presentation and return the new state.
    async fn update(
        &self,
        id: &PresentationId,
        update: PresentationUpdate,
    ) -> Result<Presentation, StoreError>;

    /// All presentations, oldest first.
    async fn list(&self) -> Result<Vec<Presentation>, StoreError>;
}

/// Errors raised by presentation stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Presentation not found: {0}")]
    NotFound(PresentationId),
}
