//! Deck export settings

use serde::Deserialize;

use super::error::InvalidSetting;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// When false the export endpoints answer 503
    pub enabled: bool,
    /// Download name stem; `_YYYYMMDD_HHMMSS.pptx` is appended
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            filename_prefix: "slideflow_presentation".into(),
        }
    }
}

impl ExportConfig {
    /// The prefix lands in a `Content-Disposition` header, so it must be a
    /// plain file name.
    pub fn validate(&self) -> Result<(), InvalidSetting> {
        let prefix = &self.filename_prefix;
        let unusable = prefix.trim().is_empty()
            || prefix
                .chars()
                .any(|c| matches!(c, '/' | '\\' | '"') || c.is_control());
        if unusable {
            return Err(InvalidSetting::FilenamePrefix(prefix.clone()));
        }
        Ok(())
    }
}
