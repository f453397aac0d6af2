//! Calendar engine: navigable month grid and day-selection rules
//!
//! The engine is a view-state reducer over `(visible month, holidays,
//! selected date)`. The only side effect is the one-time holiday fetch,
//! which goes through the [`ports::HolidayProvider`] trait and fails open:
//! when the lookup is unavailable the calendar degrades to weekend-only
//! disabling.

mod grid;
pub mod ports;

use chrono::{Datelike, Months, NaiveDate, Utc, Weekday};
pub use grid::{build_grid, month_start};
use slotbook_domain::constants::WEEKEND_REJECTION_MESSAGE;
use slotbook_domain::{DayCell, Holiday};
use tracing::warn;

use self::ports::HolidayProvider;

/// Direction for month navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Prev,
    Next,
}

/// Result of activating a day cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaySelection {
    /// The date passed all rules and becomes the selected date
    Accepted(NaiveDate),
    /// The date is a Sunday or a public holiday; a banner message was set
    Rejected,
    /// The date lies outside the visible month; nothing happened
    Ignored,
}

/// Mutable calendar view state for one booking session
#[derive(Debug, Clone)]
pub struct CalendarState {
    visible_month: NaiveDate,
    holidays: Vec<Holiday>,
    message: Option<String>,
}

impl CalendarState {
    /// Create a calendar anchored at the month containing `anchor`
    pub fn new(anchor: NaiveDate) -> Self {
        Self { visible_month: month_start(anchor), holidays: Vec::new(), message: None }
    }

    /// Create a calendar anchored at the current month
    pub fn for_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// First day of the visible month
    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    /// Currently loaded holiday records
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Transient rejection banner, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the holiday set (records are immutable once loaded)
    pub fn set_holidays(&mut self, holidays: Vec<Holiday>) {
        self.holidays = holidays;
    }

    /// Fetch the holiday list once through the provider port
    ///
    /// On failure the holiday set stays empty and the failure is only
    /// logged; selection then falls back to weekend-only rejection.
    pub async fn load_holidays(
        &mut self,
        provider: &dyn HolidayProvider,
        country: &str,
        year: i32,
    ) {
        match provider.fetch_holidays(country, year).await {
            Ok(holidays) => self.holidays = holidays,
            Err(err) => {
                warn!(country, year, error = %err, "holiday lookup failed, disabling weekends only");
            }
        }
    }

    /// Shift the visible month one step in either direction (unbounded)
    pub fn advance_month(&mut self, step: MonthStep) {
        let shifted = match step {
            MonthStep::Prev => self.visible_month.checked_sub_months(Months::new(1)),
            MonthStep::Next => self.visible_month.checked_add_months(Months::new(1)),
        };
        if let Some(month) = shifted {
            self.visible_month = month_start(month);
        }
    }

    /// Build the grid for the visible month against an external selection
    pub fn grid(&self, selected: Option<NaiveDate>) -> Vec<[DayCell; 7]> {
        build_grid(self.visible_month, &self.holidays, selected)
    }

    /// Apply the day-selection rules to an activated cell
    ///
    /// Rule order: outside-month cells are inert; the weekend check runs
    /// before the holiday check, so a Sunday holiday reports the weekend
    /// message. An accepted date clears any prior banner.
    pub fn select_day(&mut self, date: NaiveDate) -> DaySelection {
        let in_month = date.year() == self.visible_month.year()
            && date.month() == self.visible_month.month();
        if !in_month {
            return DaySelection::Ignored;
        }

        if date.weekday() == Weekday::Sun {
            self.message = Some(WEEKEND_REJECTION_MESSAGE.to_string());
            return DaySelection::Rejected;
        }

        if grid::is_public_holiday(date, &self.holidays) {
            let name = grid::holiday_name_on(date, &self.holidays).unwrap_or_default();
            self.message = Some(format!("It's {name} today"));
            return DaySelection::Rejected;
        }

        self.message = None;
        DaySelection::Accepted(date)
    }
}
