//! Identifiers for presentations and slide elements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Key of a stored presentation; rendered as a hyphenated UUID on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationId(Uuid);

impl PresentationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PresentationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PresentationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// `<prefix>_<8 hex chars>`, e.g. `title_1a2b3c4d`.
pub fn element_id(prefix: &str) -> String {
    let mut id = String::with_capacity(prefix.len() + 9);
    id.push_str(prefix);
    id.push('_');
    id.extend(Uuid::new_v4().simple().to_string().chars().take(8));
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_ids_parse_back() {
        let id = PresentationId::new();
        assert_ne!(id, PresentationId::new());
        assert_eq!(id.to_string().parse::<PresentationId>().unwrap(), id);
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", id));
    }

    #[test]
    fn malformed_presentation_id_is_rejected() {
        assert!("not-a-uuid".parse::<PresentationId>().is_err());
        assert!("".parse::<PresentationId>().is_err());
    }

    #[test]
    fn element_ids_carry_prefix_and_short_suffix() {
        for prefix in ["title", "content", "bullets"] {
            let id = element_id(prefix);
            let suffix = id.strip_prefix(&format!("{prefix}_")).unwrap();
            assert_eq!(suffix.len(), 8);
            assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
