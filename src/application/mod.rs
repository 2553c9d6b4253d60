//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    AppendSlideCommand, AppendSlideHandler, AppendSlideResult, CreatePresentationCommand,
    CreatePresentationHandler, CreatePresentationResult, DeckExportError, ExportDeckCommand,
    ExportDeckHandler, ExportPresentationCommand, ExportPresentationHandler, GenerateSlideCommand,
    GenerateSlideHandler, GenerateSlideResult, GetPresentationHandler, GetPresentationQuery,
    ListPresentationsHandler, PresentationError, QuickInspirationCommand, QuickInspirationHandler,
    UpdatePresentationCommand, UpdatePresentationHandler, MANUAL_SAVE_PROMPT,
};
