//! Newsletter subscription schema.

use serde::{Deserialize, Serialize};

use super::rules::is_valid_email;
use super::{FieldErrors, FormSchema};

/// Values of the footer newsletter form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberFormValues {
    /// Subscriber email.
    #[serde(default)]
    pub email: String,
}

impl FormSchema for SubscriberFormValues {
    const FIELDS: &'static [&'static str] = &["email"];

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.add("email", "Invalid email address");
        }
        errors.into_result()
    }
}
