//! Closed set of color theme names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight built-in color themes.
///
/// Deserialization is lenient: an unrecognized name resolves to
/// [`ThemeName::Blue`], matching [`ThemeName::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeName {
    Red,
    #[default]
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Cyan,
    Lime,
}

impl ThemeName {
    /// All themes in their published order.
    pub const ALL: [ThemeName; 8] = [
        ThemeName::Red,
        ThemeName::Blue,
        ThemeName::Green,
        ThemeName::Yellow,
        ThemeName::Purple,
        ThemeName::Pink,
        ThemeName::Cyan,
        ThemeName::Lime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Red => "red",
            ThemeName::Blue => "blue",
            ThemeName::Green => "green",
            ThemeName::Yellow => "yellow",
            ThemeName::Purple => "purple",
            ThemeName::Pink => "pink",
            ThemeName::Cyan => "cyan",
            ThemeName::Lime => "lime",
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn parse(name: &str) -> Option<ThemeName> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(name))
    }

    /// Lookup that never fails; absent or unknown names become blue.
    pub fn resolve(name: Option<&str>) -> ThemeName {
        name.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ThemeName {
    fn from(value: String) -> Self {
        Self::resolve(Some(&value))
    }
}

impl From<ThemeName> for String {
    fn from(theme: ThemeName) -> Self {
        theme.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_eight_unique_names() {
        let mut names: Vec<_> = ThemeName::ALL.iter().map(|t| t.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ThemeName::parse("  Purple "), Some(ThemeName::Purple));
        assert_eq!(ThemeName::parse("LIME"), Some(ThemeName::Lime));
        assert_eq!(ThemeName::parse("magenta"), None);
    }

    #[test]
    fn resolve_defaults_to_blue() {
        assert_eq!(ThemeName::resolve(None), ThemeName::Blue);
        assert_eq!(ThemeName::resolve(Some("nonexistent")), ThemeName::Blue);
        assert_eq!(ThemeName::resolve(Some("nonexistent")), ThemeName::resolve(Some("blue")));
    }

    #[test]
    fn deserializes_unknown_names_as_blue() {
        let theme: ThemeName = serde_json::from_str("\"teal\"").unwrap();
        assert_eq!(theme, ThemeName::Blue);
        let theme: ThemeName = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(theme, ThemeName::Green);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeName::Cyan).unwrap(), "\"cyan\"");
    }
}
