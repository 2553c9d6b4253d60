//! In-Memory Presentation Store Adapter
//!
//! Keeps presentations for the lifetime of the process. Nothing is
//! persisted across restarts.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::PresentationId;
use crate::domain::presentation::Presentation;
use crate::ports::{PresentationStore, PresentationUpdate, StoreError};

/// In-memory storage for presentations
#[derive(Debug, Clone, Default)]
pub struct InMemoryPresentationStore {
    presentations: Arc<RwLock<HashMap<PresentationId, Presentation>>>,
}

impl InMemoryPresentationStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored presentations
    pub async fn len(&self) -> usize {
        self.presentations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.presentations.read().await.is_empty()
    }
}

#[async_trait]
impl PresentationStore for InMemoryPresentationStore {
    async fn put(&self, presentation: Presentation) -> Result<(), StoreError> {
        let mut presentations = self.presentations.write().await;
        presentations.insert(presentation.id, presentation);
        Ok(())
    }

    async fn get(&self, id: &PresentationId) -> Result<Option<Presentation>, StoreError> {
        let presentations = self.presentations.read().await;
        Ok(presentations.get(id).cloned())
    }

    async fn update(
        &self,
        id: &PresentationId,
        update: PresentationUpdate,
    ) -> Result<Presentation, StoreError> {
        let mut presentations = self.presentations.write().await;
        let presentation = presentations.get_mut(id).ok_or(StoreError::NotFound(*id))?;
        update(presentation);
        Ok(presentation.clone())
    }

    async fn list(&self) -> Result<Vec<Presentation>, StoreError> {
        let presentations = self.presentations.read().await;
        let mut all: Vec<Presentation> = presentations.values().cloned().collect();
        all.sort_by_key(|p| p.created_at);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slide::Slide;
    use crate::domain::theme::ThemeName;

    fn presentation(prompt: &str) -> Presentation {
        Presentation::new(prompt, Vec::new(), ThemeName::Blue)
    }

    #[tokio::test]
    async fn put_then_get_returns_presentation() {
        let store = InMemoryPresentationStore::new();
        let p = presentation("oceans");
        let id = p.id;

        store.put(p.clone()).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap(), Some(p));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_unknown_returns_none() {
        let store = InMemoryPresentationStore::new();
        assert_eq!(store.get(&PresentationId::new()).await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_applies_mutation() {
        let store = InMemoryPresentationStore::new();
        let p = presentation("oceans");
        let id = p.id;
        store.put(p).await.unwrap();

        let updated = store
            .update(
                &id,
                Box::new(|p: &mut Presentation| {
                    let slide = Slide::new(p.next_slide_id(), "New", ThemeName::Red);
                    p.append_slide(slide);
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.slides.len(), 1);
        assert_eq!(store.get(&id).await.unwrap().unwrap().slides.len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let store = InMemoryPresentationStore::new();
        let id = PresentationId::new();
        let result = store.update(&id, Box::new(|_: &mut Presentation| {})).await;
        assert_eq!(result.unwrap_err(), StoreError::NotFound(id));
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let store = InMemoryPresentationStore::new();
        let p = presentation("oceans");
        let id = p.id;
        store.put(p).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .update(
                        &id,
                        Box::new(move |p: &mut Presentation| {
                            let slide = Slide::new(p.next_slide_id(), format!("S{}", i), ThemeName::Blue);
                            p.append_slide(slide);
                        }),
                    )
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.slides.len(), 20);
        let ids: Vec<u64> = stored.slides.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=20u64).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn list_is_ordered_by_creation() {
        let store = InMemoryPresentationStore::new();
        let first = presentation("first");
        let mut second = presentation("second");
        second.created_at = crate::domain::foundation::Timestamp::from_datetime(
            *first.created_at.as_datetime() + chrono::Duration::seconds(1),
        );

        store.put(second).await.unwrap();
        store.put(first).await.unwrap();

        let prompts: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.prompt)
            .collect();
        assert_eq!(prompts, vec!["first", "second"]);
    }
}
