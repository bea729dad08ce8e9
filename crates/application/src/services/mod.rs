//! Typed domain services over the shared [`crate::HttpService`].

mod contact;
mod review;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use contact::ContactService;
pub use review::record_review;

/// Success payload returned by the backend.
///
/// Any 2xx reply converts into one via [`From<Value>`]: only a string
/// `message` is read as the confirmation, and a reply of another shape is
/// kept whole in `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable confirmation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint-specific data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiMessage {
    /// Creates a payload carrying only a message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }

    /// Returns the message when it is not blank.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

impl From<Value> for ApiMessage {
    fn from(payload: Value) -> Self {
        match payload {
            Value::Null => Self::default(),
            Value::Object(mut map) => {
                let message = match map.get("message") {
                    Some(Value::String(message)) => Some(message.clone()),
                    _ => None,
                };
                let data = match map.remove("data") {
                    Some(Value::Null) => None,
                    Some(data) => Some(data),
                    None if message.is_some() || map.is_empty() => None,
                    None => Some(Value::Object(map)),
                };
                Self { message, data }
            }
            other => Self {
                message: None,
                data: Some(other),
            },
        }
    }
}
