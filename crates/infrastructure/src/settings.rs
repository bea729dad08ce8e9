//! Startup settings.
//!
//! Defaults overlaid with `TREKWAY_*` environment variables, read once.

use std::collections::HashMap;
use std::net::SocketAddr;

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;
use trekway_application::ClientConfig;
use url::Url;

/// Prefix of every environment variable the site reads.
pub const ENV_PREFIX: &str = "TREKWAY";

const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Sources could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// `base_url` is not an absolute http(s) URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// `request_timeout_ms` is zero.
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,

    /// `listen_addr` is not a socket address.
    #[error("invalid listen address '{0}'")]
    InvalidListenAddr(String),
}

/// Settings of the running site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Backend base URL (`TREKWAY_BASE_URL`).
    pub base_url: String,
    /// Request timeout in milliseconds (`TREKWAY_REQUEST_TIMEOUT_MS`).
    pub request_timeout_ms: u64,
    /// Address the web server binds (`TREKWAY_LISTEN_ADDR`).
    pub listen_addr: String,
    /// Directory of the stylesheet and scripts (`TREKWAY_STATIC_DIR`);
    /// the binary falls back to its bundled assets.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Settings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is missing, malformed or out of range.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(None)
    }

    /// Loads settings from an explicit variable map instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is missing, malformed or out of range.
    pub fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self, SettingsError> {
        let settings: Self = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("request_timeout_ms", DEFAULT_TIMEOUT_MS)?
            .set_default("listen_addr", DEFAULT_LISTEN_ADDR)?
            .add_source(Environment::with_prefix(ENV_PREFIX).source(vars))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let base = Url::parse(&self.base_url)
            .map_err(|_| SettingsError::InvalidBaseUrl(self.base_url.clone()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(SettingsError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.request_timeout_ms == 0 {
            return Err(SettingsError::ZeroTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.listen_addr
            .parse()
            .map_err(|_| SettingsError::InvalidListenAddr(self.listen_addr.clone()))
    }

    /// Client configuration for the service layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or timeout is rejected.
    pub fn client_config(&self) -> Result<ClientConfig, SettingsError> {
        ClientConfig::new(&self.base_url)
            .and_then(|c| c.with_timeout_ms(self.request_timeout_ms))
            .map_err(|_| SettingsError::InvalidBaseUrl(self.base_url.clone()))
    }
}
