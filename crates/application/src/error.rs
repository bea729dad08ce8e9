//! Application error types

use thiserror::Error;
use trekway_domain::DomainError;

/// Application-level errors raised while wiring the client.
///
/// Call failures never use this type; they surface as
/// [`trekway_domain::NormalizedError`].
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The configured base URL is unusable.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configured timeout is zero.
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
