//! Form controller: field state, validation rules, and submission
//! orchestration
//!
//! The controller consumes the calendar engine's selected date and talks to
//! the upload endpoint exclusively through the [`ports::SubmissionGateway`]
//! trait.

mod controller;
pub mod ports;
pub mod validation;

pub use controller::{FormController, SubmitOutcome};
