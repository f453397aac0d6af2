//! Field-level validation rules
//!
//! Each function returns the inline message for one field, or an empty
//! string when the field passes. Messages are exact UI strings.

use once_cell::sync::Lazy;
use regex::Regex;
use slotbook_domain::constants::{
    EMAIL_FORMAT_MESSAGE, FIRST_NAME_REQUIRED_MESSAGE, LAST_NAME_REQUIRED_MESSAGE,
    PHOTO_REQUIRED_MESSAGE,
};
use slotbook_domain::PhotoAttachment;

/// Static email regex compiled once at first use
///
/// Deliberately loose: one `@`, at least one dot in the domain, no
/// whitespace. Full RFC 5322 compliance is a non-goal.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Message for the first name field, empty when it passes
pub fn first_name_error(value: &str) -> String {
    if value.trim().is_empty() { FIRST_NAME_REQUIRED_MESSAGE.to_string() } else { String::new() }
}

/// Message for the last name field, empty when it passes
pub fn last_name_error(value: &str) -> String {
    if value.trim().is_empty() { LAST_NAME_REQUIRED_MESSAGE.to_string() } else { String::new() }
}

/// Message for the email field, empty when it passes
pub fn email_error(value: &str) -> String {
    if EMAIL_REGEX.is_match(value) { String::new() } else { EMAIL_FORMAT_MESSAGE.to_string() }
}

/// Message for the photo field (checked at submit time only)
pub fn photo_error(photo: Option<&PhotoAttachment>) -> String {
    if photo.is_some() { String::new() } else { PHOTO_REQUIRED_MESSAGE.to_string() }
}
