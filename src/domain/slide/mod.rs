//! Slide module - slides, their elements, and the element layout.

mod element;
mod layout;
mod slide;

pub use element::{
    ElementKind, ElementStyle, SlideElement, TableData, TextRole, DEFAULT_TABLE_COLS,
    DEFAULT_TABLE_ROWS,
};
pub use layout::{map_to_elements, CANVAS_HEIGHT, CANVAS_WIDTH, UNTITLED_SLIDE};
pub use slide::{AiMetadata, Slide};
