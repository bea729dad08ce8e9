//! The normalized error shape every call site receives.
//!
//! Whatever the transport or the backend reports, UI code only ever sees a
//! [`NormalizedError`]: a message, an optional status code and an ordered
//! list of per-field messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback message when a failed response carries no usable body.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message used when a call needs a token and none is stored.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required. Please login first.";

/// Message used when no response arrived within the configured window.
pub const TIMEOUT_MESSAGE: &str = "The request timed out.";

/// Message used when a successful reply does not have the expected shape.
pub const UNEXPECTED_PAYLOAD_MESSAGE: &str = "Unexpected response from the server.";

/// Message used when the server could not be reached at all.
pub const NETWORK_FAILURE_MESSAGE: &str = "Unable to reach the server. Please check your connection.";

/// Which part of the system a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Local schema validation failed; nothing was sent.
    Validation,
    /// No response within the configured timeout.
    Timeout,
    /// Connection, DNS or body-decoding failure.
    Network,
    /// HTTP 401, or a call requiring a token that is not stored.
    Unauthenticated,
    /// Any other non-success response from the backend.
    Backend,
}

impl FailureKind {
    /// Returns true for failures raised below HTTP (timeouts, network).
    #[must_use]
    pub const fn is_transport(self) -> bool {
        matches!(self, Self::Timeout | Self::Network)
    }
}

/// A message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as the backend and the form know it.
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The single error representation seen by UI code.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct NormalizedError {
    /// Failure category.
    pub kind: FailureKind,
    /// Human-readable message.
    pub message: String,
    /// HTTP status, when a response was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Per-field messages, in the order the backend listed them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
    /// Set when `message` is the generic fallback rather than one the
    /// backend sent, so callers may substitute their own wording.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub generic: bool,
}

impl NormalizedError {
    /// Creates an error with no status and no field errors.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            field_errors: Vec::new(),
            generic: false,
        }
    }

    /// The rejection for a call that needs a token when none is stored.
    ///
    /// Shaped like a 401 so callers handle it the same way.
    #[must_use]
    pub fn auth_required() -> Self {
        Self {
            status_code: Some(401),
            ..Self::new(FailureKind::Unauthenticated, AUTH_REQUIRED_MESSAGE)
        }
    }

    /// The rejection for a timed out call.
    #[must_use]
    pub fn timeout() -> Self {
        Self::new(FailureKind::Timeout, TIMEOUT_MESSAGE)
    }

    /// The rejection for a connection-level failure.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    /// Builds the error for a non-success response from its raw body.
    ///
    /// The backend's `message` and `errors` are used when the body parses;
    /// otherwise the generic fallback message is used.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let kind = if status == 401 {
            FailureKind::Unauthenticated
        } else {
            FailureKind::Backend
        };
        let parsed = serde_json::from_slice::<BackendErrorBody>(body).ok();

        let (message, field_errors) = parsed.map_or_else(
            || (None, Vec::new()),
            |body| (body.message.clone(), body.field_errors()),
        );

        let message = message.filter(|m| !m.trim().is_empty());
        let generic = message.is_none();

        Self {
            kind,
            message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            status_code: Some(status),
            field_errors,
            generic,
        }
    }

    /// Adds a field error.
    #[must_use]
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors.push(FieldError::new(field, message));
        self
    }

    /// Returns the first message reported for `field`.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns true if this is an authentication failure.
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        self.kind == FailureKind::Unauthenticated
    }

    /// Returns true if this is a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.kind == FailureKind::Timeout
    }
}

/// Error payload returned by the backend.
///
/// `{ "errors": [{ "key": ["email"], "message": ["Invalid"] }], "message": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendErrorBody {
    /// Top-level message.
    #[serde(default)]
    pub message: Option<String>,
    /// Field-level entries.
    #[serde(default)]
    pub errors: Vec<BackendFieldEntry>,
}

/// One entry of the backend `errors` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendFieldEntry {
    /// Field name(s); the first one is used.
    #[serde(default)]
    pub key: OneOrMany,
    /// Message(s); the first one is used.
    #[serde(default)]
    pub message: OneOrMany,
}

/// A value the backend sends either as a string or as an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A single string.
    One(String),
    /// A list of strings.
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl OneOrMany {
    /// Returns the first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(value) => Some(value.as_str()),
            Self::Many(values) => values.first().map(String::as_str),
        }
    }
}

impl BackendErrorBody {
    /// Flattens the entries that carry both a key and a message.
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.errors
            .iter()
            .filter_map(|entry| match (entry.key.first(), entry.message.first()) {
                (Some(field), Some(message)) if !field.is_empty() => {
                    Some(FieldError::new(field, message))
                }
                _ => None,
            })
            .collect()
    }
}
