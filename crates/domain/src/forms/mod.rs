//! Form schemas.
//!
//! Each form the site shows is a plain values struct implementing
//! [`FormSchema`]. Validation is synchronous and returns the first failing
//! message of every field, keyed by field name.

mod contact;
mod review;
mod rules;
mod subscriber;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::failure::{FieldError, NormalizedError};

pub use contact::{ContactFormValues, ContactMessage};
pub use review::ReviewFormValues;
pub use rules::{is_valid_email, is_valid_phone};
pub use subscriber::SubscriberFormValues;

/// A form bound to a declarative schema.
pub trait FormSchema: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Names of the fields the form renders, in display order.
    const FIELDS: &'static [&'static str];

    /// Validates the values.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    fn validate(&self) -> Result<(), FieldErrors>;

    /// Returns true if `field` is rendered by this form.
    fn has_field(field: &str) -> bool {
        Self::FIELDS.contains(&field)
    }
}

/// Inline messages keyed by field, one per field, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    items: Vec<FieldError>,
}

impl FieldErrors {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Records a message unless the field already has one.
    ///
    /// Rules are checked in order, so the first failing rule wins.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.items.push(FieldError::new(field, message));
        }
    }

    /// Sets a field's message, replacing any existing one.
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        if let Some(existing) = self.items.iter_mut().find(|e| e.field == field) {
            existing.message = message;
        } else {
            self.items.push(FieldError::new(field, message));
        }
    }

    /// Returns the message for a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterates over the messages.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.items.iter()
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of fields with a message.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no field has a message.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts into `Ok(())` when empty, `Err(self)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field has a message.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Wraps these messages in a validation [`NormalizedError`].
    #[must_use]
    pub fn into_normalized(self, message: impl Into<String>) -> NormalizedError {
        NormalizedError {
            field_errors: self.items,
            ..NormalizedError::new(crate::failure::FailureKind::Validation, message)
        }
    }
}
