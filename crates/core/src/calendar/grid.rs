//! Pure month grid computation
//!
//! Builds the visible grid for one month: full Monday-start weeks covering
//! the month, padded with adjacent-month dates that are always disabled.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use slotbook_domain::{DayCell, Holiday, HolidayKind};

/// Normalize a date to the first day of its month
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `first` (`first` must be a month start)
fn month_end(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(first)
}

/// Monday on or before the given date
fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Sunday on or after the given date
fn week_end(date: NaiveDate) -> NaiveDate {
    let forward = u64::from(6 - date.weekday().num_days_from_monday());
    date.checked_add_days(Days::new(forward)).unwrap_or(date)
}

/// True when a public holiday falls on `date`
pub(crate) fn is_public_holiday(date: NaiveDate, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.date == date && h.kind == HolidayKind::Public)
}

/// Name of the first holiday record on `date`, any kind
pub(crate) fn holiday_name_on(date: NaiveDate, holidays: &[Holiday]) -> Option<&str> {
    holidays.iter().find(|h| h.date == date).map(|h| h.name.as_str())
}

/// Build the month grid as ordered weeks of exactly seven [`DayCell`]s
///
/// The grid starts on the Monday on/before the first of the month and ends
/// on the Sunday on/after its last day. Cells outside the visible month are
/// disabled unconditionally; inside the month only Sundays are disabled.
/// Saturday stays selectable.
pub fn build_grid(
    visible_month: NaiveDate,
    holidays: &[Holiday],
    selected: Option<NaiveDate>,
) -> Vec<[DayCell; 7]> {
    let first = month_start(visible_month);
    let start = week_start(first);
    let end = week_end(month_end(first));

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut day = start;
    while day <= end {
        week.push(day_cell(day, first, holidays, selected));
        if week.len() == 7 {
            if let Ok(full) = <[DayCell; 7]>::try_from(std::mem::take(&mut week)) {
                weeks.push(full);
            }
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    weeks
}

fn day_cell(
    date: NaiveDate,
    first: NaiveDate,
    holidays: &[Holiday],
    selected: Option<NaiveDate>,
) -> DayCell {
    let in_current_month = date.year() == first.year() && date.month() == first.month();
    let weekday = date.weekday();
    DayCell {
        date,
        in_current_month,
        is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
        is_holiday: is_public_holiday(date, holidays),
        is_selected: selected == Some(date),
        is_disabled: !in_current_month || weekday == Weekday::Sun,
    }
}
