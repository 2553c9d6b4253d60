//! Generative model settings
//!
//! A missing key is a valid configuration: slides then come from templates.

use serde::Deserialize;
use std::time::Duration;

use super::error::InvalidSetting;

/// Values shipped in sample `.env` files.
const PLACEHOLDER_KEYS: [&str; 2] = ["your_gemini_api_key_here", "your_api_key_here"];

/// Unprefixed variables older deployments set for the Gemini key, in
/// priority order.
const LEGACY_GEMINI_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    /// Overrides the provider's default model
    pub model: Option<String>,
    /// Overrides the provider's API root (proxies, local stubs)
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAI,
}

impl AiProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini",
            AiProvider::OpenAI => "openai",
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::Gemini,
            gemini_api_key: None,
            openai_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: 60,
            max_output_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Trims the key and drops blanks and sample placeholders.
fn real_key(key: Option<&str>) -> Option<&str> {
    let key = key?.trim();
    (!key.is_empty() && !PLACEHOLDER_KEYS.contains(&key)).then_some(key)
}

impl AiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn gemini_key(&self) -> Option<&str> {
        real_key(self.gemini_api_key.as_deref())
    }

    pub fn openai_key(&self) -> Option<&str> {
        real_key(self.openai_api_key.as_deref())
    }

    /// Key for the selected provider. The other provider's key is never
    /// borrowed.
    pub fn active_key(&self) -> Option<&str> {
        match self.provider {
            AiProvider::Gemini => self.gemini_key(),
            AiProvider::OpenAI => self.openai_key(),
        }
    }

    pub fn is_model_configured(&self) -> bool {
        self.active_key().is_some()
    }

    /// Takes the Gemini key from a legacy variable when no prefixed key is set.
    pub fn apply_legacy_env(&mut self) {
        if self.gemini_key().is_some() {
            return;
        }
        let legacy = LEGACY_GEMINI_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| real_key(Some(value.as_str())).is_some());
        if legacy.is_some() {
            self.gemini_api_key = legacy;
        }
    }

    pub fn validate(&self) -> Result<(), InvalidSetting> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(InvalidSetting::Temperature(self.temperature));
        }
        if self.max_output_tokens == 0 {
            return Err(InvalidSetting::ZeroOutputTokens);
        }
        if self.timeout_secs == 0 {
            return Err(InvalidSetting::ZeroModelTimeout);
        }
        Ok(())
    }
}
