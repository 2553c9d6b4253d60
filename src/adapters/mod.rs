//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative model clients (Gemini, OpenAI, mock)
//! - `content` - Prompt-to-content generation over an AI provider
//! - `storage` - In-memory presentation store
//! - `export` - PPTX writer
//! - `http` - REST API

pub mod ai;
pub mod content;
pub mod export;
pub mod http;
pub mod storage;
