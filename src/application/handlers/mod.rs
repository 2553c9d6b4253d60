//! Application handlers.
//!
//! Command and query handlers that orchestrate generation, storage and
//! export through the ports.

pub mod export;
pub mod presentation;
pub mod slide;

pub use export::{
    DeckExportError, ExportDeckCommand, ExportDeckHandler, ExportPresentationCommand,
    ExportPresentationHandler,
};
pub use presentation::{
    AppendSlideCommand, AppendSlideHandler, AppendSlideResult, CreatePresentationCommand,
    CreatePresentationHandler, CreatePresentationResult, GetPresentationHandler,
    GetPresentationQuery, ListPresentationsHandler, PresentationError, UpdatePresentationCommand,
    UpdatePresentationHandler, MANUAL_SAVE_PROMPT,
};
pub use slide::{
    GenerateSlideCommand, GenerateSlideHandler, GenerateSlideResult, QuickInspirationCommand,
    QuickInspirationHandler,
};

#[cfg(test)]
pub(crate) mod test_support {
    //! Port doubles shared by the handler tests.

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::adapters::storage::InMemoryPresentationStore;
    use crate::domain::content::{fallback_content, Generation, GenerationOutcome};
    use crate::domain::foundation::PresentationId;
    use crate::domain::presentation::Presentation;
    use crate::domain::slide::Slide;
    use crate::ports::{
        ContentGenerator, DeckExporter, ExportError, PresentationStore, PresentationUpdate,
        StoreError,
    };

    /// Generator returning template content and counting calls.
    #[derive(Default)]
    pub struct CountingGenerator {
        calls: AtomicUsize,
    }

    impl CountingGenerator {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentGenerator for CountingGenerator {
        async fn generate(&self, prompt: &str) -> Generation {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Generation::new(fallback_content(prompt), GenerationOutcome::Fallback)
        }

        fn is_model_configured(&self) -> bool {
            false
        }
    }

    /// In-memory store that counts every port call.
    #[derive(Default)]
    pub struct CountingStore {
        inner: InMemoryPresentationStore,
        calls: AtomicUsize,
    }

    impl CountingStore {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn hit(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl PresentationStore for CountingStore {
        async fn put(&self, presentation: Presentation) -> Result<(), StoreError> {
            self.hit();
            self.inner.put(presentation).await
        }

        async fn get(&self, id: &PresentationId) -> Result<Option<Presentation>, StoreError> {
            self.hit();
            self.inner.get(id).await
        }

        async fn update(
            &self,
            id: &PresentationId,
            update: PresentationUpdate,
        ) -> Result<Presentation, StoreError> {
            self.hit();
            self.inner.update(id, update).await
        }

        async fn list(&self) -> Result<Vec<Presentation>, StoreError> {
            self.hit();
            self.inner.list().await
        }
    }

    /// Exporter that records calls and returns fixed bytes.
    pub struct StubExporter {
        available: bool,
        calls: AtomicUsize,
    }

    impl StubExporter {
        pub fn available() -> Self {
            Self {
                available: true,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn unavailable() -> Self {
            Self {
                available: false,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DeckExporter for StubExporter {
        fn export(&self, slides: &[Slide]) -> Result<Vec<u8>, ExportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.available {
                return Err(ExportError::unavailable("stub"));
            }
            Ok(vec![slides.len() as u8])
        }

        fn is_available(&self) -> bool {
            self.available
        }
    }
}
