//! Request envelope type

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{Headers, HttpMethod, QueryParams};
use crate::error::{DomainError, DomainResult};

/// A fully prepared outbound call.
///
/// Built fresh for every call and dropped once it settles. `path` is
/// relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Identifier used to correlate log lines of one call.
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL (e.g. `/contact`)
    pub path: String,
    /// JSON payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Headers sent with the call
    #[serde(default)]
    pub headers: Headers,
    /// Query parameters
    #[serde(default)]
    pub query: QueryParams,
    /// Timeout in milliseconds
    pub timeout_ms: u64,
}

impl RequestEnvelope {
    /// Creates an envelope with no body, headers or query.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            path: path.into(),
            body: None,
            headers: Headers::new(),
            query: QueryParams::new(),
            timeout_ms,
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns `base + path + ?query`, the URL as it is logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the query cannot be encoded.
    pub fn display_url(&self, base_url: &str) -> DomainResult<String> {
        let mut url = join(base_url, &self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query.to_query_string()?);
        }
        Ok(url)
    }

    /// Resolves the absolute URL this envelope targets.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL does not parse.
    pub fn resolve(&self, base_url: &str) -> DomainResult<Url> {
        let joined = self.display_url(base_url)?;
        Url::parse(&joined).map_err(|e| DomainError::InvalidUrl(format!("{e}: {joined}")))
    }
}

fn join(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_url_joins_base_and_path() {
        let envelope = RequestEnvelope::new(HttpMethod::Post, "/contact", 30_000);
        assert_eq!(
            envelope.display_url("https://api.example.com/v1/").unwrap(),
            "https://api.example.com/v1/contact"
        );
    }

    #[test]
    fn test_display_url_appends_query() {
        let mut envelope = RequestEnvelope::new(HttpMethod::Get, "treks", 30_000);
        envelope.query.add("region", "everest");
        envelope.query.add("page", "2");

        assert_eq!(
            envelope.display_url("https://api.example.com").unwrap(),
            "https://api.example.com/treks?region=everest&page=2"
        );
    }

    #[test]
    fn test_resolve_rejects_garbage_base() {
        let envelope = RequestEnvelope::new(HttpMethod::Get, "/contact", 30_000);
        assert!(matches!(
            envelope.resolve("not a url"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_absolute_path_bypasses_base() {
        let envelope = RequestEnvelope::new(HttpMethod::Get, "https://cdn.example.com/a", 1);
        assert_eq!(
            envelope.resolve("https://api.example.com").unwrap().as_str(),
            "https://cdn.example.com/a"
        );
    }
}
