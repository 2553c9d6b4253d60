//! Content module - recovering structured slide content from model output.
//!
//! Generation follows one contract: a JSON object is preferred, prose is
//! parsed line by line, and anything else falls back to templates built
//! from the prompt alone. All functions here are pure; the model call lives
//! behind the `ContentGenerator` port.

mod fallback;
mod free_text;
mod json;
mod prompt;
mod record;

pub use fallback::{fallback_content, title_case};
pub use free_text::{parse_text, FreeTextParse};
pub use json::{parse_json_record, strip_code_fence};
pub use prompt::build_slide_prompt;
pub use record::{
    ContentRecord, Generation, GenerationOutcome, DEFAULT_DESIGN_THEME, DEFAULT_LAYOUT_TYPE,
    MAX_BULLET_POINTS,
};

/// Turns raw model text into a generation, applying the full recovery chain.
pub fn recover_from_model_text(text: &str, prompt: &str) -> Generation {
    if let Some(record) = parse_json_record(text, prompt) {
        return Generation::new(record, GenerationOutcome::Parsed);
    }

    let parsed = parse_text(strip_code_fence(text), prompt);
    if parsed.recovered_anything {
        Generation::new(parsed.record, GenerationOutcome::FromFreeText)
    } else {
        Generation::new(fallback_content(prompt), GenerationOutcome::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_text_is_parsed() {
        let generation = recover_from_model_text(r#"{"title":"Bees"}"#, "bees");
        assert_eq!(generation.outcome, GenerationOutcome::Parsed);
        assert_eq!(generation.record.title, "Bees");
    }

    #[test]
    fn prose_goes_through_free_text_parser() {
        let generation = recover_from_model_text("Bees\n- Pollinate\n- Make honey", "bees");
        assert_eq!(generation.outcome, GenerationOutcome::FromFreeText);
        assert_eq!(generation.record.bullet_points, vec!["Pollinate", "Make honey"]);
    }

    #[test]
    fn broken_json_falls_back_to_free_text() {
        let generation = recover_from_model_text("{\"title\": \"Bees\"", "bees");
        assert_eq!(generation.outcome, GenerationOutcome::FromFreeText);
        assert_eq!(generation.record.title, "{\"title\": \"Bees\"");
    }

    #[test]
    fn unusable_text_falls_back_to_templates() {
        let generation = recover_from_model_text("  \n ", "bees");
        assert_eq!(generation.outcome, GenerationOutcome::Fallback);
        assert_eq!(generation.record, fallback_content("bees"));
    }
}
