//! Startup errors.

use thiserror::Error;
use trekway_application::ports::TransportError;
use trekway_infrastructure::SettingsError;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The HTTP transport could not be built.
    #[error("failed to build HTTP transport: {0}")]
    Transport(#[from] TransportError),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
