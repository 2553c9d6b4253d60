//! HTTP listener settings

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::InvalidSetting;

/// Longest request timeout accepted; slide generation waits on the model.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Development front-end origins allowed when nothing else is configured.
const DEV_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000,http://localhost:3001";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated allow-list; `*` allows any origin
    pub cors_origins: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            environment: Environment::Development,
            log_level: "info,slideflow=debug,tower_http=info".into(),
            request_timeout_secs: 30,
            cors_origins: DEV_ORIGINS.into(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, InvalidSetting> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| InvalidSetting::BindAddress(addr))
    }

    /// Production logs are JSON lines.
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cors_origins_list(&self) -> Vec<&str> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<(), InvalidSetting> {
        if self.port == 0 {
            return Err(InvalidSetting::ZeroPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(InvalidSetting::RequestTimeout(self.request_timeout_secs));
        }
        self.socket_addr().map(|_| ())
    }
}
