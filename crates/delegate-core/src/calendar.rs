use crate::error::{DelegateError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Business days between delegating a task and the first check-in.
pub const DEFAULT_CHECKIN_DAYS: u32 = 2;

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The date `days` business days (Mon–Fri) after `start`.
///
/// Steps forward one calendar day at a time; `start` itself never counts.
pub fn add_business_days(start: NaiveDate, days: u32) -> NaiveDate {
    let mut cursor = start;
    let mut added = 0;
    while added < days {
        let Some(next) = cursor.succ_opt() else {
            break;
        };
        cursor = next;
        if is_business_day(cursor) {
            added += 1;
        }
    }
    cursor
}

/// [`add_business_days`] formatted as `YYYY-MM-DD` for task-list fields.
pub fn add_business_days_str(start: NaiveDate, days: u32) -> String {
    format_date(add_business_days(start, days))
}

/// Business days in `[start, end)`. Zero when `end <= start`.
pub fn business_days_elapsed(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d < end)
        .filter(|d| is_business_day(*d))
        .count() as u32
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| DelegateError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
