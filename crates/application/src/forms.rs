//! Form submission flow.
//!
//! Validate, mark busy, run the action once, then either reset and report
//! success or keep the values and report the failure. Exactly one toast
//! describes the outcome of a submission that reached the action.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use trekway_domain::{
    ContactFormValues, FieldErrors, FormSchema, NormalizedError, ReviewFormValues,
    SubscriberFormValues, ToastRequest,
};

use crate::ports::Notifier;
use crate::services::ApiMessage;

/// Toast texts used by one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormMessages {
    /// Shown on success when the backend sends no message.
    pub success: &'static str,
    /// Title of the success toast.
    pub success_title: Option<&'static str>,
    /// Shown on failure when the backend sent no message of its own.
    pub failure: &'static str,
    /// Title of the failure toast.
    pub failure_title: Option<&'static str>,
}

/// A form schema that knows how to report its outcome.
pub trait SubmittableForm: FormSchema {
    /// Toast texts for this form.
    const MESSAGES: FormMessages;
}

impl SubmittableForm for ContactFormValues {
    const MESSAGES: FormMessages = FormMessages {
        success: "Message sent successfully",
        success_title: Some("Success"),
        failure: "Failed to send message",
        failure_title: Some("Error"),
    };
}

impl SubmittableForm for SubscriberFormValues {
    const MESSAGES: FormMessages = FormMessages {
        success: "Successfully subscribed!",
        success_title: None,
        failure: "Failed to subscribe!",
        failure_title: None,
    };
}

impl SubmittableForm for ReviewFormValues {
    const MESSAGES: FormMessages = FormMessages {
        success: "Thank you for your review!",
        success_title: Some("Review Submitted"),
        failure: "Failed to submit review. Please try again.",
        failure_title: Some("Error"),
    };
}

/// What the form currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState<V> {
    /// Current values.
    pub values: V,
    /// Inline messages per field.
    pub field_errors: FieldErrors,
    /// Banner shown above the form after a failed submission.
    pub general_error: Option<String>,
    /// A submission is in flight; the submit button is disabled.
    pub busy: bool,
}

/// How a call to [`FormController::submit`] ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The action succeeded and the form was reset.
    Submitted(ApiMessage),
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The action failed.
    Failed(NormalizedError),
    /// Another submission was still in flight.
    Blocked,
}

impl SubmitOutcome {
    /// Returns true if the action succeeded.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Drives one form instance.
pub struct FormController<V> {
    state: Arc<Mutex<FormState<V>>>,
    notifier: Arc<dyn Notifier>,
}

impl<V> Clone for FormController<V> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<V: SubmittableForm> FormController<V> {
    /// Creates a controller with empty values.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            notifier,
        }
    }

    /// Returns a snapshot of the form state.
    #[must_use]
    pub fn state(&self) -> FormState<V> {
        self.state.lock().clone()
    }

    /// Returns true while a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.lock().busy
    }

    /// Validates `values` and, when valid, runs `action` once.
    pub async fn submit<F, Fut>(&self, values: V, action: F) -> SubmitOutcome
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<ApiMessage, NormalizedError>>,
    {
        {
            let mut state = self.state.lock();
            if state.busy {
                tracing::debug!(target: "trekway::forms", "submission blocked, another is in flight");
                return SubmitOutcome::Blocked;
            }

            state.values = values.clone();
            state.general_error = None;
            if let Err(errors) = values.validate() {
                state.field_errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
            state.field_errors.clear();
            state.busy = true;
        }

        let busy = BusyFlag {
            state: Arc::clone(&self.state),
        };
        let result = action(values).await;
        drop(busy);

        match result {
            Ok(reply) => {
                self.state.lock().values = V::default();
                let message = reply.message().unwrap_or(V::MESSAGES.success);
                let mut toast = ToastRequest::success(message);
                if let Some(title) = V::MESSAGES.success_title {
                    toast = toast.with_title(title);
                }
                self.notifier.notify(toast);
                SubmitOutcome::Submitted(reply)
            }
            Err(error) => {
                self.record_failure(&error);
                SubmitOutcome::Failed(error)
            }
        }
    }

    fn record_failure(&self, error: &NormalizedError) {
        let message = if error.generic || error.message.trim().is_empty() {
            V::MESSAGES.failure.to_string()
        } else {
            error.message.clone()
        };

        {
            let mut state = self.state.lock();
            state.general_error = Some(message.clone());
            for field_error in &error.field_errors {
                if V::has_field(&field_error.field) {
                    state
                        .field_errors
                        .set(&field_error.field, field_error.message.clone());
                }
            }
        }

        // The pipeline already toasted the timeout.
        if error.is_timeout() {
            return;
        }
        let mut toast = ToastRequest::error(message);
        if let Some(title) = V::MESSAGES.failure_title {
            toast = toast.with_title(title);
        }
        self.notifier.notify(toast);
    }
}

/// Clears the busy flag when the action settles or is dropped.
struct BusyFlag<V> {
    state: Arc<Mutex<FormState<V>>>,
}

impl<V> Drop for BusyFlag<V> {
    fn drop(&mut self) {
        self.state.lock().busy = false;
    }
}
