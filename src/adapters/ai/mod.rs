//! Model clients implementing the AIProvider port.
//!
//! - `GeminiProvider` - Google Gemini (default)
//! - `OpenAIProvider` - OpenAI chat completions
//! - `MockAIProvider` - scripted replies for tests

mod endpoint;
mod gemini_provider;
mod mock_provider;
mod openai_provider;

pub use endpoint::ModelEndpoint;
pub use gemini_provider::{GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, UNSCRIPTED_REPLY};
pub use openai_provider::{OpenAIProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};
