//! Runtime settings
//!
//! Read from `SLIDEFLOW__<SECTION>__<KEY>` environment variables, with a
//! `.env` file honoured in development. Every setting has a default, so an
//! empty environment starts a local server in template-only mode.
//!
//! ```no_run
//! use slideflow::config::AppConfig;
//!
//! let config = AppConfig::load().expect("readable settings");
//! config.validate().expect("usable settings");
//! ```

mod ai;
mod error;
mod export;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, InvalidSetting};
pub use export::ExportConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "SLIDEFLOW";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ai: AiConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    /// Reads settings from the process environment.
    ///
    /// `SLIDEFLOW__SERVER__PORT=8080` sets `server.port`. When no Gemini key
    /// is set under the prefix, `GOOGLE_API_KEY` and then `GEMINI_API_KEY`
    /// are consulted.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__");
        let mut settings: AppConfig = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        settings.ai.apply_legacy_env();
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), InvalidSetting> {
        self.server.validate()?;
        self.ai.validate()?;
        self.export.validate()
    }
}
