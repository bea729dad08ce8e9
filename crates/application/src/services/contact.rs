//! Contact and newsletter endpoints.

use std::sync::Arc;

use serde_json::{Value, json};
use trekway_domain::{ContactMessage, NormalizedError};

use super::ApiMessage;
use crate::http_service::HttpService;
use crate::ports::HttpTransport;

const CONTACT_PATH: &str = "/contact";
const SUBSCRIBER_PATH: &str = "/subscriber";

/// Sends contact enquiries and newsletter subscriptions.
///
/// A pass-through: no validation, caching or retries. Errors come back
/// exactly as the pipeline produced them.
pub struct ContactService<T> {
    http: Arc<HttpService<T>>,
}

impl<T> Clone for ContactService<T> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
        }
    }
}

impl<T: HttpTransport> ContactService<T> {
    /// Creates the service over a shared HTTP service.
    #[must_use]
    pub const fn new(http: Arc<HttpService<T>>) -> Self {
        Self { http }
    }

    /// `POST /contact`.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn send_contact_message(
        &self,
        message: &ContactMessage,
    ) -> Result<ApiMessage, NormalizedError> {
        self.http
            .post_request::<_, Value>(CONTACT_PATH, Some(message), None)
            .await
            .map(ApiMessage::from)
    }

    /// `POST /subscriber` with `{ "email": ... }`.
    ///
    /// # Errors
    ///
    /// Returns the normalized failure of the call.
    pub async fn subscribe_user(&self, email: &str) -> Result<ApiMessage, NormalizedError> {
        let body = json!({ "email": email });
        self.http
            .post_request::<_, Value>(SUBSCRIBER_PATH, Some(&body), None)
            .await
            .map(ApiMessage::from)
    }
}
