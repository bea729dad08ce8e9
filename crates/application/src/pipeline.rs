//! The request pipeline: one transport wrapped by the request and response
//! interceptors.

use std::sync::Arc;

use serde_json::Value;
use trekway_domain::failure::NETWORK_FAILURE_MESSAGE;
use trekway_domain::{NormalizedError, RequestEnvelope, ToastRequest};

use crate::config::ClientConfig;
use crate::ports::{HttpTransport, Notifier, TransportError, TransportResponse};
use crate::session_guard::SessionGuard;

/// Toast raised whenever a call times out.
pub const SLOW_SERVER_MESSAGE: &str = "Server is taking too long. Please refresh to check status.";

/// Configured client that every service call goes through.
///
/// Calls settle exactly once: with the decoded payload, or with a
/// [`NormalizedError`]. Raw transport errors never leave this type.
pub struct ApiClient<T> {
    transport: Arc<T>,
    config: Arc<ClientConfig>,
    guard: SessionGuard,
    notifier: Arc<dyn Notifier>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            config: Arc::clone(&self.config),
            guard: self.guard.clone(),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}

impl<T: HttpTransport> ApiClient<T> {
    /// Creates a client over a shared transport.
    #[must_use]
    pub fn new(
        transport: Arc<T>,
        config: Arc<ClientConfig>,
        guard: SessionGuard,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            transport,
            config,
            guard,
            notifier,
        }
    }

    /// Client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Session guard shared by every call.
    #[must_use]
    pub const fn guard(&self) -> &SessionGuard {
        &self.guard
    }

    /// Sends an envelope and unwraps the response payload.
    ///
    /// # Errors
    ///
    /// Returns a [`NormalizedError`] for non-success statuses, timeouts and
    /// connection failures. A 401 also clears the session and redirects to
    /// login; a timeout also raises the slow-server toast.
    pub async fn dispatch(&self, envelope: RequestEnvelope) -> Result<Value, NormalizedError> {
        let url = self.intercept_request(&envelope)?;

        match self.transport.send(&envelope, &url).await {
            Ok(response) => self.intercept_response(&envelope, response),
            Err(error) => Err(self.intercept_failure(&envelope, &error)),
        }
    }

    fn intercept_request(&self, envelope: &RequestEnvelope) -> Result<url::Url, NormalizedError> {
        let url = envelope.resolve(self.config.base_url()).map_err(|e| {
            tracing::error!(target: "trekway::http", request_id = %envelope.id, error = %e, "cannot resolve request URL");
            NormalizedError::network(NETWORK_FAILURE_MESSAGE)
        })?;

        tracing::debug!(
            target: "trekway::http",
            request_id = %envelope.id,
            method = %envelope.method,
            url = %url,
            "sending request"
        );
        Ok(url)
    }

    fn intercept_response(
        &self,
        envelope: &RequestEnvelope,
        response: TransportResponse,
    ) -> Result<Value, NormalizedError> {
        if response.is_success() {
            let payload = decode_payload(&response.body);
            tracing::debug!(
                target: "trekway::http",
                request_id = %envelope.id,
                status = response.status,
                payload = %payload,
                "response received"
            );
            return Ok(payload);
        }

        let error = NormalizedError::from_response(response.status, &response.body);
        tracing::debug!(
            target: "trekway::http",
            request_id = %envelope.id,
            status = response.status,
            message = %error.message,
            "request rejected by backend"
        );
        if response.status == 401 {
            self.guard.on_unauthenticated();
        }
        Err(error)
    }

    fn intercept_failure(&self, envelope: &RequestEnvelope, error: &TransportError) -> NormalizedError {
        tracing::warn!(
            target: "trekway::http",
            request_id = %envelope.id,
            error = %error,
            "no response received"
        );
        match error {
            TransportError::Timeout { .. } => {
                self.notifier.notify(ToastRequest::error(SLOW_SERVER_MESSAGE));
                NormalizedError::timeout()
            }
            _ => NormalizedError::network(NETWORK_FAILURE_MESSAGE),
        }
    }
}

/// Empty bodies become `null`; bodies that are not JSON are kept as text.
fn decode_payload(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
