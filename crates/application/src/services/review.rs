//! Review submissions.
//!
//! The backend has no review endpoint yet; submissions are recorded in
//! the log and acknowledged locally.

use trekway_domain::{NormalizedError, ReviewFormValues};

use super::ApiMessage;

/// Records a review.
///
/// # Errors
///
/// Never fails today; the signature matches the other form actions.
#[allow(clippy::unused_async)]
pub async fn record_review(values: &ReviewFormValues) -> Result<ApiMessage, NormalizedError> {
    tracing::info!(
        target: "trekway::reviews",
        rating = values.rating,
        length = values.review.chars().count(),
        "review submitted"
    );
    Ok(ApiMessage::default())
}
