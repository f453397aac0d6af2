//! Form controller - core business logic
//!
//! One controller is constructed per booking session. It owns the field
//! values, the parallel error state, and the calendar, and it orchestrates
//! submission through the gateway port.

use std::sync::Arc;

use chrono::NaiveDate;
use slotbook_domain::constants::{AGE_MAX, AGE_MIN};
use slotbook_domain::{BookingSubmission, DayCell, FieldErrors, FormState, PhotoAttachment, UploadAck};
use tracing::error;

use super::ports::SubmissionGateway;
use super::validation;
use crate::calendar::ports::HolidayProvider;
use crate::calendar::{CalendarState, DaySelection, MonthStep};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation produced at least one error; no network call was made
    Blocked,
    /// The endpoint acknowledged the booking; the form was reset
    Submitted(UploadAck),
    /// Transport failed; the form stays populated for a manual retry
    Failed,
}

/// Booking form controller
pub struct FormController {
    form: FormState,
    errors: FieldErrors,
    calendar: CalendarState,
    holiday_provider: Arc<dyn HolidayProvider>,
    gateway: Arc<dyn SubmissionGateway>,
}

impl FormController {
    /// Create a controller for a fresh session, anchored at the current month
    pub fn new(
        holiday_provider: Arc<dyn HolidayProvider>,
        gateway: Arc<dyn SubmissionGateway>,
    ) -> Self {
        Self {
            form: FormState::default(),
            errors: FieldErrors::default(),
            calendar: CalendarState::for_today(),
            holiday_provider,
            gateway,
        }
    }

    /// Anchor the calendar at a specific month (used by tests and replays)
    pub fn with_visible_month(mut self, anchor: NaiveDate) -> Self {
        self.calendar = CalendarState::new(anchor);
        self
    }

    /// Current field values
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current per-field validation messages
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Calendar view state
    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    /// One-time holiday fetch for the session (fails open, see the engine)
    pub async fn load_holidays(&mut self, country: &str, year: i32) {
        let provider = Arc::clone(&self.holiday_provider);
        self.calendar.load_holidays(provider.as_ref(), country, year).await;
    }

    /// Set the first name and re-validate that field only
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.form.first_name = value.into();
        self.errors.first_name = validation::first_name_error(&self.form.first_name);
    }

    /// Set the last name and re-validate that field only
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.form.last_name = value.into();
        self.errors.last_name = validation::last_name_error(&self.form.last_name);
    }

    /// Set the email and re-validate that field only
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.errors.email = validation::email_error(&self.form.email);
    }

    /// Set the age slider value, clamped into 8..=100
    pub fn set_age(&mut self, age: u8) {
        self.form.age = age.clamp(AGE_MIN, AGE_MAX);
    }

    /// Attach a photo (replaces any previous attachment)
    pub fn attach_photo(&mut self, photo: PhotoAttachment) {
        self.form.photo = Some(photo);
        self.errors.photo = String::new();
    }

    /// Remove the attached photo
    pub fn remove_photo(&mut self) {
        self.form.photo = None;
    }

    /// Pick a time slot
    ///
    /// The offered labels are [`slotbook_domain::constants::TIME_SLOTS`];
    /// membership is not enforced here, any label is stored as-is.
    pub fn select_time(&mut self, slot: impl Into<String>) {
        self.form.time = Some(slot.into());
    }

    /// Navigate the calendar one month in either direction
    pub fn advance_month(&mut self, step: MonthStep) {
        self.calendar.advance_month(step);
    }

    /// Activate a day cell; an accepted date becomes the selected date
    pub fn select_day(&mut self, date: NaiveDate) -> DaySelection {
        let outcome = self.calendar.select_day(date);
        if let DaySelection::Accepted(accepted) = outcome {
            self.form.date = Some(accepted);
        }
        outcome
    }

    /// Grid for the visible month with the session's selection marked
    pub fn grid(&self) -> Vec<[DayCell; 7]> {
        self.calendar.grid(self.form.date)
    }

    /// Derived submit-button flag: all six inputs present
    ///
    /// Computed from current values, independently of the validation pass
    /// run by [`Self::submit`]; the two can transiently disagree and are
    /// intentionally not unified.
    pub fn is_form_valid(&self) -> bool {
        !self.form.first_name.is_empty()
            && !self.form.last_name.is_empty()
            && !self.form.email.is_empty()
            && self.form.date.is_some()
            && self.form.time.is_some()
            && self.form.photo.is_some()
    }

    /// Re-run all field validations and attempt submission
    ///
    /// Blocks without any network call when a validation message remains.
    /// On acknowledgement the form and errors reset to their defaults; on
    /// transport failure the form stays populated and the error is only
    /// logged.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.validate_all();
        if self.errors.has_errors() {
            return SubmitOutcome::Blocked;
        }

        let submission = self.to_submission();
        match self.gateway.submit_booking(submission).await {
            Ok(ack) => {
                self.reset();
                SubmitOutcome::Submitted(ack)
            }
            Err(err) => {
                error!(error = %err, "booking submission failed");
                SubmitOutcome::Failed
            }
        }
    }

    fn validate_all(&mut self) {
        self.errors.first_name = validation::first_name_error(&self.form.first_name);
        self.errors.last_name = validation::last_name_error(&self.form.last_name);
        self.errors.email = validation::email_error(&self.form.email);
        self.errors.photo = validation::photo_error(self.form.photo.as_ref());
    }

    fn to_submission(&self) -> BookingSubmission {
        BookingSubmission {
            first_name: self.form.first_name.clone(),
            last_name: self.form.last_name.clone(),
            email: self.form.email.clone(),
            age: self.form.age,
            date: self.form.date,
            time: self.form.time.clone(),
            photo: self.form.photo.clone(),
        }
    }

    fn reset(&mut self) {
        self.form = FormState::default();
        self.errors.clear();
    }
}
