//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - generative model client
//! - `ContentGenerator` - prompt to structured slide content
//! - `PresentationStore` - session-lifetime presentation storage
//! - `DeckExporter` - slides to presentation document

mod ai_provider;
mod content_generator;
mod deck_exporter;
mod presentation_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, StopReason,
};
pub use content_generator::ContentGenerator;
pub use deck_exporter::{DeckExporter, ExportError, ExportedDeck, PPTX_CONTENT_TYPE};
pub use presentation_store::{PresentationStore, PresentationUpdate, StoreError};
