//! Review form schema.

use serde::{Deserialize, Serialize};

use super::rules::char_len;
use super::{FieldErrors, FormSchema};

/// Values of the "leave us a review" form next to the FAQ.
///
/// A `rating` of 0 means no star was picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFormValues {
    /// Star rating, 1 to 5.
    #[serde(default)]
    pub rating: u8,
    /// Review text.
    #[serde(default)]
    pub review: String,
}

impl FormSchema for ReviewFormValues {
    const FIELDS: &'static [&'static str] = &["rating", "review"];

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.rating < 1 {
            errors.add("rating", "Please provide a rating");
        } else if self.rating > 5 {
            errors.add("rating", "Rating cannot be more than 5");
        }

        let len = char_len(&self.review);
        if len < 10 {
            errors.add("review", "Review must be at least 10 characters");
        } else if len > 500 {
            errors.add("review", "Review cannot exceed 500 characters");
        }

        errors.into_result()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let unrated = ReviewFormValues {
            rating: 0,
            review: "Wonderful guides and planning.".to_string(),
        };
        assert_eq!(
            unrated.validate().unwrap_err().get("rating"),
            Some("Please provide a rating")
        );

        let too_high = ReviewFormValues {
            rating: 6,
            ..unrated.clone()
        };
        assert_eq!(
            too_high.validate().unwrap_err().get("rating"),
            Some("Rating cannot be more than 5")
        );

        let ok = ReviewFormValues { rating: 5, ..unrated };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_review_length() {
        let long = ReviewFormValues {
            rating: 4,
            review: "a".repeat(501),
        };
        assert_eq!(
            long.validate().unwrap_err().get("review"),
            Some("Review cannot exceed 500 characters")
        );

        let exact = ReviewFormValues {
            rating: 4,
            review: "a".repeat(500),
        };
        assert!(exact.validate().is_ok());
    }
}
