//! Content generation adapters.

mod llm_generator;

pub use llm_generator::{GenerationSettings, LlmContentGenerator};
