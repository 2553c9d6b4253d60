//! Domain layer - slide generation vocabulary with no I/O.

pub mod content;
pub mod foundation;
pub mod presentation;
pub mod slide;
pub mod theme;
