//! Shared server state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use trekway_application::ClientConfig;
use trekway_infrastructure::{ReqwestTransport, Settings};

use crate::error::AppError;

/// Assets shipped with the binary.
pub const BUNDLED_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// State shared by every request: one transport, one configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    transport: Arc<ReqwestTransport>,
    config: Arc<ClientConfig>,
    static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates state from parts.
    #[must_use]
    pub fn new(transport: ReqwestTransport, config: ClientConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
            static_dir: Arc::new(PathBuf::from(BUNDLED_STATIC_DIR)),
        }
    }

    /// Serves assets from `dir` instead of the bundled ones.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Arc::new(dir.into());
        self
    }

    /// Builds the transport and client configuration from settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are rejected or the transport
    /// cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let config = settings.client_config()?;
        let transport = ReqwestTransport::new()?;
        let state = Self::new(transport, config);
        Ok(match &settings.static_dir {
            Some(dir) => state.with_static_dir(dir),
            None => state,
        })
    }

    /// Shared transport.
    #[must_use]
    pub fn transport(&self) -> Arc<ReqwestTransport> {
        Arc::clone(&self.transport)
    }

    /// Directory served under `/static`.
    #[must_use]
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Shared client configuration.
    #[must_use]
    pub fn config(&self) -> Arc<ClientConfig> {
        Arc::clone(&self.config)
    }
}
