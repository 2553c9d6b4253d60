//! Rejected input.

use thiserror::Error;

/// A request field that is missing or malformed. Surfaces as HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: String },

    #[error("{field} is malformed: {reason}")]
    Malformed { field: String, reason: String },
}

impl ValidationError {
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Malformed { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let missing = ValidationError::empty_field("prompt");
        assert_eq!(missing.to_string(), "prompt is required");
        assert_eq!(missing.field(), "prompt");

        let malformed = ValidationError::invalid_format("backgroundColor", "expected #rrggbb");
        assert_eq!(
            malformed.to_string(),
            "backgroundColor is malformed: expected #rrggbb"
        );
        assert_eq!(malformed.field(), "backgroundColor");
    }
}
