//! Client configuration fixed at startup.

use url::Url;

use crate::error::{ApplicationError, ApplicationResult};

/// Default request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Route the client is sent to when its session is invalid.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Settings shared by every request the client issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout_ms: u64,
    login_path: String,
}

impl ClientConfig {
    /// Creates a configuration with the default timeout and login route.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: impl Into<String>) -> ApplicationResult<Self> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url).map_err(|e| ApplicationError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApplicationError::InvalidBaseUrl {
                url: base_url,
                reason: "scheme must be http or https".to_string(),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        })
    }

    /// Overrides the request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout_ms` is zero.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> ApplicationResult<Self> {
        if timeout_ms == 0 {
            return Err(ApplicationError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    /// Overrides the login route.
    #[must_use]
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every request.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Login route.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }
}
