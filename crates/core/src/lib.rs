//! # Slotbook Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The calendar engine (month grid computation, day-selection rules)
//! - The form controller (field state, validation, submission orchestration)
//! - Port/adapter interfaces (traits) for the external collaborators
//!
//! ## Architecture Principles
//! - Only depends on `slotbook-domain`
//! - No HTTP or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod calendar;
pub mod form;

// Re-export specific items to avoid ambiguity
pub use calendar::ports::HolidayProvider;
pub use calendar::{build_grid, CalendarState, DaySelection, MonthStep};
pub use form::ports::SubmissionGateway;
pub use form::{FormController, SubmitOutcome};
