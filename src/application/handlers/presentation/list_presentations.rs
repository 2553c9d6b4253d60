//! ListPresentationsHandler - every stored presentation, oldest first.

use std::sync::Arc;

use crate::domain::presentation::Presentation;
use crate::ports::PresentationStore;

use super::PresentationError;

pub struct ListPresentationsHandler {
    store: Arc<dyn PresentationStore>,
}

impl ListPresentationsHandler {
    pub fn new(store: Arc<dyn PresentationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Presentation>, PresentationError> {
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPresentationStore;
    use crate::domain::theme::ThemeName;

    #[tokio::test]
    async fn lists_all_presentations() {
        let store = Arc::new(InMemoryPresentationStore::new());
        store
            .put(Presentation::new("a", Vec::new(), ThemeName::Blue))
            .await
            .unwrap();
        store
            .put(Presentation::new("b", Vec::new(), ThemeName::Red))
            .await
            .unwrap();

        let all = ListPresentationsHandler::new(store).handle().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
