//! Slide generation handlers.

mod generate_slide;
mod quick_inspiration;

pub use generate_slide::{GenerateSlideCommand, GenerateSlideHandler, GenerateSlideResult};
pub use quick_inspiration::{QuickInspirationCommand, QuickInspirationHandler};

use crate::domain::content::Generation;
use crate::domain::foundation::ValidationError;
use crate::domain::slide::Slide;
use crate::domain::theme::ThemeName;
use crate::ports::ContentGenerator;

/// Trimmed `value`, or a validation error naming `field` when blank.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

/// Runs generation for `prompt` and lays the result out as slide `id`.
pub(crate) async fn generate_slide_with(
    generator: &dyn ContentGenerator,
    id: u64,
    prompt: &str,
    theme: ThemeName,
) -> (Slide, Generation) {
    let generation = generator.generate(prompt).await;
    let slide = Slide::from_content(id, &generation.record, theme, prompt);
    (slide, generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("prompt", "  oceans ").unwrap(), "oceans");
        assert_eq!(
            require_text("prompt", " \t").unwrap_err(),
            ValidationError::empty_field("prompt")
        );
    }
}
