//! Booking form domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::AGE_DEFAULT;

/// A photo attached to the booking form, held in memory until submission
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    /// Original file name as picked by the user
    pub file_name: String,
    /// MIME type if known (e.g. `image/png`)
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PhotoAttachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoAttachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}

/// The complete set of current values for all form fields in one booking
/// session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Slider value, clamped to 8..=100
    pub age: u8,
    pub photo: Option<PhotoAttachment>,
    pub date: Option<NaiveDate>,
    /// Selected time slot label (e.g. `"14:00"`)
    pub time: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            age: AGE_DEFAULT,
            photo: None,
            date: None,
            time: None,
        }
    }
}

/// Per-field validation message, empty when the field currently passes
///
/// Kept as a flat mapping of field to message string, mirroring the error
/// state the form renders inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub photo: String,
}

impl FieldErrors {
    /// True when any field currently carries a validation message
    pub fn has_errors(&self) -> bool {
        !self.first_name.is_empty()
            || !self.last_name.is_empty()
            || !self.email.is_empty()
            || !self.photo.is_empty()
    }

    /// Reset all messages
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated form packaged for the upload endpoint
///
/// Text fields are sent as multipart text parts (empty or absent values are
/// omitted); the photo is sent as a binary part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u8,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub photo: Option<PhotoAttachment>,
}
