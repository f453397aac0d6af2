//! Calendar domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of an externally sourced holiday
///
/// Only `Public` holidays block day selection; every other wire value is
/// preserved as [`HolidayKind::Other`] so the record can still be used for
/// name lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Public,
    Observance,
    #[serde(other)]
    Other,
}

/// An externally sourced date marked as non-workable
///
/// Immutable once fetched; the calendar never mutates holiday records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub kind: HolidayKind,
}

impl Holiday {
    /// Create a holiday record
    pub fn new(date: NaiveDate, name: impl Into<String>, kind: HolidayKind) -> Self {
        Self { date, name: name.into(), kind }
    }
}

/// One rendered grid square: a single calendar date plus its
/// display/interaction flags
///
/// Derived on every grid build from the calendar state; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether the date belongs to the visible month (padding cells from
    /// adjacent months render without a day number)
    pub in_current_month: bool,
    /// Saturday or Sunday (display flag; only Sunday disables by itself)
    pub is_weekend: bool,
    /// A public holiday falls on this date
    pub is_holiday: bool,
    pub is_selected: bool,
    /// Outside the visible month, or a Sunday
    pub is_disabled: bool,
}
