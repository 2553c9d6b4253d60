//! Theme registry - named color palettes for slides.

mod color;
mod name;
mod palette;

pub use color::RgbColor;
pub use name::ThemeName;
pub use palette::{all_palettes, ensure_registry, palette, resolve_theme, ThemePalette};
