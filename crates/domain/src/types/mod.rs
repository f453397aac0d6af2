//! Common data types used throughout the application

pub mod booking;
pub mod calendar;
pub mod upload;

pub use booking::{BookingSubmission, FieldErrors, FormState, PhotoAttachment};
pub use calendar::{DayCell, Holiday, HolidayKind};
pub use upload::{StoredFileMeta, SubmittedFields, UploadAck};
