//! HTTP adapters - REST API implementations.

pub mod slides;

pub use slides::{slides_router, SlidesAppState};
