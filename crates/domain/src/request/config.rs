//! Per-call request configuration.

use serde::{Deserialize, Serialize};

use super::{Headers, QueryParams};

/// Controls auth, encoding and extra headers for a single outgoing request.
///
/// Built by the caller with the consuming `with_*` methods and never mutated
/// once handed to a verb wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderConfig {
    /// Attach the stored bearer token; the call is aborted without one.
    #[serde(default)]
    pub requires_auth: bool,
    /// Send the body as `multipart/form-data`.
    #[serde(default)]
    pub is_file_upload: bool,
    /// Headers merged last, overriding anything derived above.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_headers: Option<Headers>,
    /// Per-call timeout replacing the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_timeout_ms: Option<u64>,
    /// Query parameters attached verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_params: Option<QueryParams>,
}

impl HeaderConfig {
    /// Creates a configuration with every option off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a bearer token for this call.
    #[must_use]
    pub const fn with_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// Switches the body encoding to multipart form data.
    #[must_use]
    pub const fn with_file_upload(mut self) -> Self {
        self.is_file_upload = true;
        self
    }

    /// Adds a custom header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(Headers::new)
            .set(name, value);
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.explicit_timeout_ms = Some(timeout_ms);
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params
            .get_or_insert_with(QueryParams::new)
            .add(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_plain_json_call() {
        let config = HeaderConfig::new();
        assert!(!config.requires_auth);
        assert!(!config.is_file_upload);
        assert_eq!(config.extra_headers, None);
        assert_eq!(config.query_params, None);
    }

    #[test]
    fn test_builder_accumulates() {
        let config = HeaderConfig::new()
            .with_auth()
            .with_header("X-Locale", "en")
            .with_header("X-Trace", "1")
            .with_query("page", "1")
            .with_timeout_ms(5_000);

        assert!(config.requires_auth);
        assert_eq!(config.extra_headers.as_ref().map(Headers::len), Some(2));
        assert_eq!(config.query_params.as_ref().map(QueryParams::len), Some(1));
        assert_eq!(config.explicit_timeout_ms, Some(5_000));
    }
}
