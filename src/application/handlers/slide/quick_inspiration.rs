//! QuickInspirationHandler - raw content for a one-click inspiration prompt.

use std::sync::Arc;

use crate::domain::content::Generation;
use crate::domain::foundation::ValidationError;
use crate::ports::ContentGenerator;

use super::require_text;

#[derive(Debug, Clone)]
pub struct QuickInspirationCommand {
    pub inspiration: String,
}

/// Generates content without laying it out as a slide.
pub struct QuickInspirationHandler {
    generator: Arc<dyn ContentGenerator>,
}

impl QuickInspirationHandler {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, cmd: QuickInspirationCommand) -> Result<Generation, ValidationError> {
        let inspiration = require_text("inspiration", &cmd.inspiration)?;
        Ok(self.generator.generate(&inspiration).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::CountingGenerator;
    use crate::domain::content::fallback_content;

    #[tokio::test]
    async fn returns_generated_content() {
        let handler = QuickInspirationHandler::new(Arc::new(CountingGenerator::default()));
        let generation = handler
            .handle(QuickInspirationCommand {
                inspiration: "space travel".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(generation.record, fallback_content("space travel"));
    }

    #[tokio::test]
    async fn empty_inspiration_is_rejected() {
        let handler = QuickInspirationHandler::new(Arc::new(CountingGenerator::default()));
        let err = handler
            .handle(QuickInspirationCommand {
                inspiration: String::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.field(), "inspiration");
    }
}
