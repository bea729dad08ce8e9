//! Field rules shared by the schemas.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-']+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

#[allow(clippy::expect_used)]
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9+\-\s()]{7,15}$").expect("phone pattern is valid")
});

/// Returns true if `value` looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    !value.contains("..") && EMAIL.is_match(value)
}

/// Returns true if `value` is 7 to 15 digits, spaces, `+`, `-` or parentheses.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value)
}

/// Length in characters, as the schemas count it.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
