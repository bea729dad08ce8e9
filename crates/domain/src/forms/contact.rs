//! Contact form schema.

use serde::{Deserialize, Serialize};

use super::rules::{char_len, is_valid_email, is_valid_phone};
use super::{FieldErrors, FormSchema};

/// Values of the contact page form.
///
/// `phone` is optional; an empty string means it was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormValues {
    /// Sender name.
    #[serde(default)]
    pub name: String,
    /// Sender email.
    #[serde(default)]
    pub email: String,
    /// Sender phone number.
    #[serde(default)]
    pub phone: String,
    /// Enquiry text.
    #[serde(default)]
    pub message: String,
}

impl ContactFormValues {
    /// Builds the payload sent to `POST /contact`.
    #[must_use]
    pub fn to_message(&self) -> ContactMessage {
        let phone = self.phone.trim();
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: self.message.clone(),
        }
    }
}

impl FormSchema for ContactFormValues {
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "message"];

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if char_len(&self.name) < 2 {
            errors.add("name", "Name must be at least 2 characters");
        }
        if !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address");
        }
        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            errors.add("phone", "Invalid phone number");
        }
        if char_len(&self.message) < 10 {
            errors.add("message", "Message must be at least 10 characters");
        }

        errors.into_result()
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Sender phone, omitted when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Enquiry text.
    pub message: String,
}
