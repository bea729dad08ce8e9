//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It owns the single
//! connection pool the site uses to talk to the backend.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Url};
use trekway_application::ports::{HttpTransport, TransportError, TransportResponse};
use trekway_domain::{HttpMethod, RequestEnvelope};

use crate::http::{BodyBuildError, BuiltBody, build_body};

/// HTTP transport implementation using reqwest.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - User-Agent: "Trekway/<version>"
    ///
    /// Timeouts are applied per request from the envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Trekway/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a transport over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to port `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }
        if error.is_builder() {
            return TransportError::InvalidUrl(error.to_string());
        }
        TransportError::Other(error.to_string())
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        request: RequestEnvelope,
        body: Result<BuiltBody, BodyBuildError>,
    ) -> Result<TransportResponse, TransportError> {
        let body = body.map_err(|e| TransportError::InvalidBody(e.to_string()))?;
        let timeout_ms = request.timeout_ms;
        let start = Instant::now();

        let mut builder = self
            .client
            .request(method, url)
            .timeout(Duration::from_millis(timeout_ms));

        for header in request.headers.iter() {
            // reqwest writes the multipart header itself, boundary included.
            if body.is_multipart() && header.name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            builder = builder.header(&header.name, &header.value);
        }

        if !request.headers.contains("Content-Type") {
            if let Some(content_type) = body.content_type() {
                builder = builder.header("Content-Type", content_type);
            }
        }

        builder = match body {
            BuiltBody::None => builder,
            BuiltBody::Json(bytes) => builder.body(bytes),
            BuiltBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?
            .to_vec();

        tracing::trace!(
            target: "trekway::http",
            request_id = %request.id,
            status,
            elapsed = ?start.elapsed(),
            bytes = body.len(),
            "transport completed"
        );
        Ok(TransportResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: &RequestEnvelope,
        url: &Url,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        let method = Self::to_reqwest_method(request.method);
        let body = build_body(request);
        self.execute(method, url.clone(), request.clone(), body)
    }
}
