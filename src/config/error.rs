//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read SLIDEFLOW settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] InvalidSetting),
}

/// A setting that parsed but cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidSetting {
    #[error("server.port must be non-zero")]
    ZeroPort,

    #[error("'{0}' is not a bindable socket address")]
    BindAddress(String),

    #[error("server.request_timeout_secs must be within 1..=300, got {0}")]
    RequestTimeout(u64),

    #[error("ai.temperature must be within 0.0..=2.0, got {0}")]
    Temperature(f32),

    #[error("ai.max_output_tokens must be positive")]
    ZeroOutputTokens,

    #[error("ai.timeout_secs must be positive")]
    ZeroModelTimeout,

    #[error("export.filename_prefix {0:?} is not usable in a file name")]
    FilenamePrefix(String),
}
