//! Foundation module - Shared domain primitives.
//!
//! Identifiers, timestamps and validation errors used across the
//! slide-generation domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{element_id, PresentationId};
pub use timestamp::Timestamp;
