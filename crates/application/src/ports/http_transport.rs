//! HTTP transport port

use std::future::Future;

use thiserror::Error;
use trekway_domain::RequestEnvelope;
use url::Url;

/// Raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Failures raised before any HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No response within the configured window.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// Connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The target URL was rejected.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be built.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for sending a prepared request.
///
/// Non-success statuses are not errors at this level: they come back as
/// `Ok` and the pipeline decides what they mean.
pub trait HttpTransport: Send + Sync {
    /// Sends `request` to `url`, honoring `request.timeout_ms`.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was received.
    fn send(
        &self,
        request: &RequestEnvelope,
        url: &Url,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}
