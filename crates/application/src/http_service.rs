//! Generic verb wrappers over the pipeline.
//!
//! Each wrapper builds the header set for one call, attaches query and
//! timeout, dispatches, and decodes the unwrapped payload into the caller's
//! type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use trekway_domain::failure::{NETWORK_FAILURE_MESSAGE, UNEXPECTED_PAYLOAD_MESSAGE};
use trekway_domain::request::MULTIPART_CONTENT_TYPE;
use trekway_domain::{
    FailureKind, HeaderConfig, Headers, HttpMethod, NormalizedError, RequestEnvelope,
};

use crate::pipeline::ApiClient;
use crate::ports::HttpTransport;

/// Shared HTTP service the domain services compose.
pub struct HttpService<T> {
    client: ApiClient<T>,
}

impl<T> Clone for HttpService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<T> std::fmt::Debug for HttpService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpService")
            .field("client", &self.client)
            .finish()
    }
}

impl<T: HttpTransport> HttpService<T> {
    /// Wraps a configured client.
    #[must_use]
    pub const fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    /// The underlying client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Sends a `POST`.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn post_request<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(HttpMethod::Post, path, body, config).await
    }

    /// Sends a `GET`.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn get_request<R>(
        &self,
        path: &str,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        R: DeserializeOwned,
    {
        self.request::<Value, R>(HttpMethod::Get, path, None, config)
            .await
    }

    /// Sends a `PUT`.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn put_request<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(HttpMethod::Put, path, body, config).await
    }

    /// Sends a `PATCH`.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn patch_request<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(HttpMethod::Patch, path, body, config).await
    }

    /// Sends a `DELETE`. A body is allowed and sent when given.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn delete_request<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.request(HttpMethod::Delete, path, body, config).await
    }

    async fn request<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let result = self.execute(method, path, body, config).await;
        if let Err(error) = &result {
            tracing::error!(
                target: "trekway::http",
                method = %method,
                url = %failure_url(self.client.config().base_url(), method, path, config),
                status = ?error.status_code,
                error = %error,
                "{method} request failed"
            );
        }
        result
    }

    async fn execute<B, R>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        config: Option<&HeaderConfig>,
    ) -> Result<R, NormalizedError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let default_config = HeaderConfig::default();
        let config = config.unwrap_or(&default_config);

        let headers = self.build_headers(config)?;
        let timeout_ms = config
            .explicit_timeout_ms
            .unwrap_or_else(|| self.client.config().timeout_ms());

        let mut envelope = RequestEnvelope::new(method, path, timeout_ms);
        envelope.headers = headers;
        if let Some(query) = &config.query_params {
            envelope.query = query.clone();
        }
        if let Some(body) = body {
            let value = serde_json::to_value(body).map_err(|e| {
                tracing::error!(target: "trekway::http", error = %e, "cannot encode request body");
                NormalizedError::network(NETWORK_FAILURE_MESSAGE)
            })?;
            envelope = envelope.with_body(value);
        }

        let payload = self.client.dispatch(envelope).await?;
        decode(payload)
    }

    /// Empty set, then auth, then multipart, then the caller's headers.
    fn build_headers(&self, config: &HeaderConfig) -> Result<Headers, NormalizedError> {
        let mut headers = Headers::new();

        if config.requires_auth {
            let guard = self.client.guard();
            let Some(token) = guard.bearer_token() else {
                guard.require_login();
                return Err(NormalizedError::auth_required());
            };
            headers.set("Authorization", format!("Bearer {token}"));
        }

        if config.is_file_upload {
            headers.set("Content-Type", MULTIPART_CONTENT_TYPE);
        }

        if let Some(extra) = &config.extra_headers {
            headers.merge(extra);
        }

        Ok(headers)
    }

}

/// The URL a failed call targeted, query included, as the pipeline logs it.
fn failure_url(
    base_url: &str,
    method: HttpMethod,
    path: &str,
    config: Option<&HeaderConfig>,
) -> String {
    let mut envelope = RequestEnvelope::new(method, path, 0);
    if let Some(query) = config.and_then(|c| c.query_params.as_ref()) {
        envelope.query = query.clone();
    }
    envelope
        .display_url(base_url)
        .unwrap_or_else(|_| format!("{base_url}{path}"))
}

/// Decodes the unwrapped payload; a `null` payload also accepts `{}`.
fn decode<R: DeserializeOwned>(payload: Value) -> Result<R, NormalizedError> {
    let is_null = payload.is_null();
    match serde_json::from_value::<R>(payload) {
        Ok(value) => Ok(value),
        Err(_) if is_null => serde_json::from_value(Value::Object(serde_json::Map::new()))
            .map_err(decode_failure),
        Err(e) => Err(decode_failure(e)),
    }
}

/// The call settled, but the payload is not the shape the caller asked for.
fn decode_failure(error: serde_json::Error) -> NormalizedError {
    tracing::error!(target: "trekway::http", error = %error, "unexpected response payload");
    NormalizedError::new(FailureKind::Backend, UNEXPECTED_PAYLOAD_MESSAGE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{Harness, ScriptedTransport};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;
    use trekway_domain::QueryParams;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Ack {
        #[serde(default)]
        message: Option<String>,
    }

    #[tokio::test]
    async fn test_default_call_has_no_headers() {
        let harness = Harness::new(ScriptedTransport::replying(200, r#"{"message":"ok"}"#));
        let ack: Ack = harness
            .http()
            .post_request("/contact", Some(&json!({"name": "Asha"})), None)
            .await
            .unwrap();

        assert_eq!(ack.message.as_deref(), Some("ok"));
        let (envelope, _) = &harness.transport.sent()[0];
        assert!(envelope.headers.is_empty());
        assert_eq!(envelope.method, HttpMethod::Post);
        assert_eq!(envelope.timeout_ms, 30_000);
    }

    #[tokio::test]
    async fn test_auth_attaches_bearer_token() {
        let harness = Harness::new(ScriptedTransport::default()).with_token("tok-123");
        let config = HeaderConfig::new().with_auth();

        let _: Value = harness.http().get_request("/bookings", Some(&config)).await.unwrap();

        let (envelope, _) = &harness.transport.sent()[0];
        assert_eq!(envelope.headers.get("authorization"), Some("Bearer tok-123"));
    }

    #[tokio::test]
    async fn test_auth_without_token_never_dispatches() {
        let harness = Harness::new(ScriptedTransport::default());
        let config = HeaderConfig::new().with_auth();

        let error = harness
            .http()
            .delete_request::<Value, Value>("/bookings/7", None, Some(&config))
            .await
            .unwrap_err();

        assert_eq!(error.kind, FailureKind::Unauthenticated);
        assert_eq!(error.status_code, Some(401));
        assert_eq!(harness.transport.call_count(), 0);
        assert_eq!(harness.navigator.visited(), vec!["/login".to_string()]);
        assert_eq!(harness.session.clear_count(), 0);
    }

    #[tokio::test]
    async fn test_caller_headers_override_derived_ones() {
        let harness = Harness::new(ScriptedTransport::default()).with_token("tok");
        let config = HeaderConfig::new()
            .with_auth()
            .with_file_upload()
            .with_header("content-type", "text/csv")
            .with_header("X-Trace", "42");

        let _: Value = harness
            .http()
            .put_request("/uploads", Some(&json!({"file": "a.csv"})), Some(&config))
            .await
            .unwrap();

        let (envelope, _) = &harness.transport.sent()[0];
        assert_eq!(envelope.headers.get("Content-Type"), Some("text/csv"));
        assert_eq!(envelope.headers.get("x-trace"), Some("42"));
        assert_eq!(envelope.headers.get("Authorization"), Some("Bearer tok"));
        assert_eq!(envelope.headers.len(), 3);
    }

    #[tokio::test]
    async fn test_file_upload_sets_multipart() {
        let harness = Harness::new(ScriptedTransport::default());
        let config = HeaderConfig::new().with_file_upload();

        let _: Value = harness
            .http()
            .patch_request("/avatar", Some(&json!({"name": "me"})), Some(&config))
            .await
            .unwrap();

        let (envelope, _) = &harness.transport.sent()[0];
        assert_eq!(envelope.headers.get("Content-Type"), Some(MULTIPART_CONTENT_TYPE));
    }

    #[tokio::test]
    async fn test_query_and_timeout_are_attached() {
        let harness = Harness::new(ScriptedTransport::default());
        let config = HeaderConfig::new()
            .with_query("page", "1")
            .with_query("q", "annapurna base")
            .with_timeout_ms(5_000);

        let _: Value = harness.http().get_request("/treks", Some(&config)).await.unwrap();

        let (envelope, url) = &harness.transport.sent()[0];
        assert_eq!(envelope.timeout_ms, 5_000);
        assert_eq!(
            envelope.query,
            QueryParams::new().with("page", "1").with("q", "annapurna base")
        );
        assert_eq!(url.as_str(), "https://api.trekway.test/treks?page=1&q=annapurna+base");
    }

    #[tokio::test]
    async fn test_backend_error_propagates_unchanged() {
        let harness = Harness::new(ScriptedTransport::replying(
            400,
            r#"{"message":"Bad input","errors":[{"key":["name"],"message":["Required"]}]}"#,
        ));
        let error = harness
            .http()
            .post_request::<_, Value>("/contact", Some(&json!({})), None)
            .await
            .unwrap_err();

        assert_eq!(error.message, "Bad input");
        assert_eq!(error.field_error("name"), Some("Required"));
    }

    #[test]
    fn test_null_payload_decodes_into_defaults() {
        let ack: Ack = decode(Value::Null).unwrap();
        assert_eq!(ack, Ack::default());
        assert!(decode::<()>(Value::Null).is_ok());
    }

    #[test]
    fn test_mismatched_payload_is_not_a_network_failure() {
        let error = decode::<Vec<u8>>(json!({"not": "a list"})).unwrap_err();
        assert_eq!(error.kind, FailureKind::Backend);
        assert_eq!(error.message, UNEXPECTED_PAYLOAD_MESSAGE);
    }

    #[test]
    fn test_failure_url_keeps_query() {
        let config = HeaderConfig::new()
            .with_query("page", "2")
            .with_query("q", "upper mustang");

        assert_eq!(
            failure_url("https://api.trekway.test", HttpMethod::Get, "/treks", Some(&config)),
            "https://api.trekway.test/treks?page=2&q=upper+mustang"
        );
        assert_eq!(
            failure_url("https://api.trekway.test", HttpMethod::Post, "contact", None),
            "https://api.trekway.test/contact"
        );
    }
}
