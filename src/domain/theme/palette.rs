//! Built-in theme palettes.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

use super::color::RgbColor;
use super::name::ThemeName;
use crate::domain::foundation::ValidationError;

/// Five semantic colors that make up a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePalette {
    pub background: RgbColor,
    pub primary: RgbColor,
    pub secondary: RgbColor,
    pub text: RgbColor,
    pub accent: RgbColor,
}

// background, primary, secondary, text, accent
const PALETTE_HEX: [(ThemeName, [&str; 5]); 8] = [
    (ThemeName::Red, ["#fee2e2", "#dc2626", "#fca5a5", "#7f1d1d", "#ef4444"]),
    (ThemeName::Blue, ["#dbeafe", "#2563eb", "#93c5fd", "#1e3a8a", "#3b82f6"]),
    (ThemeName::Green, ["#dcfce7", "#16a34a", "#86efac", "#14532d", "#22c55e"]),
    (ThemeName::Yellow, ["#fef3c7", "#d97706", "#fcd34d", "#92400e", "#f59e0b"]),
    (ThemeName::Purple, ["#f3e8ff", "#9333ea", "#c4b5fd", "#581c87", "#a855f7"]),
    (ThemeName::Pink, ["#fce7f3", "#db2777", "#f9a8d4", "#831843", "#ec4899"]),
    (ThemeName::Cyan, ["#cffafe", "#0891b2", "#67e8f9", "#164e63", "#06b6d4"]),
    (ThemeName::Lime, ["#ecfccb", "#65a30d", "#bef264", "#365314", "#84cc16"]),
];

fn build_registry() -> Result<BTreeMap<ThemeName, ThemePalette>, ValidationError> {
    PALETTE_HEX
        .iter()
        .map(|(name, [background, primary, secondary, text, accent])| {
            let palette = ThemePalette {
                background: RgbColor::from_hex(background)?,
                primary: RgbColor::from_hex(primary)?,
                secondary: RgbColor::from_hex(secondary)?,
                text: RgbColor::from_hex(text)?,
                accent: RgbColor::from_hex(accent)?,
            };
            Ok((*name, palette))
        })
        .collect()
}

static REGISTRY: Lazy<BTreeMap<ThemeName, ThemePalette>> = Lazy::new(|| {
    build_registry().expect("built-in theme palettes must be valid #rrggbb literals")
});

/// Forces palette validation. Called once at startup so a bad literal fails
/// the boot instead of the first request.
pub fn ensure_registry() -> usize {
    REGISTRY.len()
}

/// Palette for a theme.
pub fn palette(theme: ThemeName) -> &'static ThemePalette {
    REGISTRY
        .get(&theme)
        .or_else(|| REGISTRY.get(&ThemeName::Blue))
        .unwrap_or(&FALLBACK_PALETTE)
}

/// Palette for a possibly-unknown theme name (defaults to blue).
pub fn resolve_theme(name: Option<&str>) -> &'static ThemePalette {
    palette(ThemeName::resolve(name))
}

/// All palettes keyed by name, in published order.
pub fn all_palettes() -> impl Iterator<Item = (ThemeName, &'static ThemePalette)> {
    ThemeName::ALL.into_iter().map(|theme| (theme, palette(theme)))
}

// Only reachable if the registry were missing a variant.
static FALLBACK_PALETTE: ThemePalette = ThemePalette {
    background: RgbColor::new(0xdb, 0xea, 0xfe),
    primary: RgbColor::new(0x25, 0x63, 0xeb),
    secondary: RgbColor::new(0x93, 0xc5, 0xfd),
    text: RgbColor::new(0x1e, 0x3a, 0x8a),
    accent: RgbColor::new(0x3b, 0x82, 0xf6),
};
