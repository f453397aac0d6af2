//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Age slider bounds
pub const AGE_MIN: u8 = 8;
pub const AGE_MAX: u8 = 100;
pub const AGE_DEFAULT: u8 = 8;

// Bookable time slots offered once a date is selected
pub const TIME_SLOTS: [&str; 5] = ["12:00", "14:00", "16:30", "18:30", "20:00"];

// Field validation messages
pub const FIRST_NAME_REQUIRED_MESSAGE: &str = "Please enter your first name";
pub const LAST_NAME_REQUIRED_MESSAGE: &str = "Please enter your last name";
pub const EMAIL_FORMAT_MESSAGE: &str =
    "Please use correct formatting. Example: address@email.com";
pub const PHOTO_REQUIRED_MESSAGE: &str = "Please upload a photo";

// Day selection rejection banner
pub const WEEKEND_REJECTION_MESSAGE: &str = "Weekends are not allowed";

// Upload endpoint
pub const SUBMIT_ACK_MESSAGE: &str = "Form data received successfully";
pub const PHOTO_FIELD_NAME: &str = "photo";
