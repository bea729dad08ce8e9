//! HTTP request body builder.
//!
//! Turns the JSON payload of a [`RequestEnvelope`] into what reqwest sends:
//! a serialized JSON body, or a multipart form when the envelope asks for
//! `multipart/form-data`.

use mime::Mime;
use reqwest::multipart::Form;
use serde_json::Value;
use trekway_domain::RequestEnvelope;
use trekway_domain::request::JSON_CONTENT_TYPE;

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// Multipart bodies must be JSON objects.
    #[error("multipart body must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// Serialization error.
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying error text.
        message: String,
    },
}

/// Result of building a body.
pub enum BuiltBody {
    /// No body.
    None,
    /// Serialized JSON.
    Json(Vec<u8>),
    /// Multipart form data; reqwest writes the boundary header.
    Multipart(Form),
}

impl BuiltBody {
    /// Content-Type to send when the caller did not set one.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some(JSON_CONTENT_TYPE),
            Self::None | Self::Multipart(_) => None,
        }
    }

    /// Check if this is a multipart form.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// Returns true if `content_type` names `multipart/form-data`.
#[must_use]
pub fn is_multipart(content_type: &str) -> bool {
    content_type
        .parse::<Mime>()
        .is_ok_and(|m| m.essence_str() == mime::MULTIPART_FORM_DATA.essence_str())
}

/// Build the body for an envelope.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized, or if a multipart
/// body is not a JSON object.
pub fn build_body(envelope: &RequestEnvelope) -> Result<BuiltBody, BodyBuildError> {
    let Some(body) = &envelope.body else {
        return Ok(BuiltBody::None);
    };

    let multipart = envelope
        .headers
        .get("Content-Type")
        .is_some_and(is_multipart);

    if multipart {
        return build_multipart_form(body).map(BuiltBody::Multipart);
    }

    serde_json::to_vec(body)
        .map(BuiltBody::Json)
        .map_err(|e| BodyBuildError::Serialization {
            message: e.to_string(),
        })
}

/// One text part per field; arrays repeat the field, `null` is skipped.
fn build_multipart_form(body: &Value) -> Result<Form, BodyBuildError> {
    let Value::Object(fields) = body else {
        return Err(BodyBuildError::NotAnObject {
            found: json_type(body),
        });
    };

    let mut form = Form::new();
    for (name, value) in fields {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    form = form.text(name.clone(), part_text(item));
                }
            }
            other => form = form.text(name.clone(), part_text(other)),
        }
    }
    Ok(form)
}

fn part_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use trekway_domain::HttpMethod;

    fn envelope(body: Value) -> RequestEnvelope {
        RequestEnvelope::new(HttpMethod::Post, "/upload", 1_000).with_body(body)
    }

    #[test]
    fn test_no_body() {
        let request = RequestEnvelope::new(HttpMethod::Get, "/treks", 1_000);
        assert!(matches!(build_body(&request).unwrap(), BuiltBody::None));
    }

    #[test]
    fn test_json_body() {
        let built = build_body(&envelope(json!({"email": "a@b.com"}))).unwrap();
        assert_eq!(built.content_type(), Some("application/json"));
        let BuiltBody::Json(bytes) = built else {
            panic!("Expected JSON body");
        };
        assert_eq!(bytes, br#"{"email":"a@b.com"}"#.to_vec());
    }

    #[test]
    fn test_multipart_detection() {
        assert!(is_multipart("multipart/form-data"));
        assert!(is_multipart("Multipart/Form-Data; boundary=xyz"));
        assert!(!is_multipart("application/json"));
        assert!(!is_multipart("not a mime"));
    }

    #[test]
    fn test_multipart_body() {
        let mut request = envelope(json!({"name": "Asha", "tags": ["a", "b"], "age": 31, "skip": null}));
        request.headers.set("content-type", "multipart/form-data");

        let built = build_body(&request).unwrap();
        assert!(built.is_multipart());
        assert_eq!(built.content_type(), None);
    }

    #[test]
    fn test_multipart_requires_object() {
        let mut request = envelope(json!(["not", "an", "object"]));
        request.headers.set("Content-Type", "multipart/form-data");

        let error = build_body(&request).err().unwrap();
        assert!(matches!(error, BodyBuildError::NotAnObject { found: "array" }));
    }
}
