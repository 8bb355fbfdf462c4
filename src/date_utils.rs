//! Date and time helpers
//!
//! Every date a user types or a record stores is written `dd/mm/yyyy`, and every
//! time of day is written `hhmm`. This module owns both formats so the parser,
//! the commands and the record codec agree on them.

use crate::commands::CommandError;
use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Date format used in commands, messages and records (e.g. `01/10/2019`)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Time format used in commands, messages and records (e.g. `1230`)
pub const TIME_FORMAT: &str = "%H%M";

/// Current wall-clock time in the local timezone
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a `dd/mm/yyyy` date string
///
/// # Arguments
/// * `date_str` - Date string (e.g., "01/10/2019")
///
/// # Returns
/// The parsed date or a `CommandError::Parse`
pub fn parse_date(date_str: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT).map_err(|_| CommandError::Parse {
        field: "date",
        value: date_str.to_string(),
        expected: "dd/mm/yyyy (e.g., '01/10/2019')",
    })
}

/// Format a date as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a four-digit `hhmm` time string
///
/// `2400` is not a valid time of day and is rejected like any other
/// out-of-range value.
pub fn parse_time(time_str: &str) -> Result<NaiveTime, CommandError> {
    let trimmed = time_str.trim();
    let parse_error = || CommandError::Parse {
        field: "time",
        value: time_str.to_string(),
        expected: "hhmm (e.g., '1730')",
    };

    if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT).map_err(|_| parse_error())
}

/// Format a time of day as `hhmm`
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Add a number of days to a date
///
/// # Returns
/// `None` when the result would fall outside chrono's supported range
pub fn add_days(date: NaiveDate, days: u32) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
}

/// Midnight at the start of `date`
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Whole minutes from `from` to `to` (negative when `to` is earlier)
pub fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

/// Generate the dates of a recurrence chain
///
/// Starts at `start` and steps forward by `interval` days while the date is
/// on or before `final_date`. An empty vector is returned when `start` is
/// already after `final_date`.
///
/// # Arguments
/// * `start` - First date of the chain
/// * `final_date` - Inclusive upper bound
/// * `interval` - Days between occurrences; zero is treated as one
pub fn recurrence_dates(start: NaiveDate, final_date: NaiveDate, interval: u32) -> Vec<NaiveDate> {
    let step = interval.max(1);
    let mut dates = Vec::new();
    let mut current = start;

    while current <= final_date {
        dates.push(current);
        match add_days(current, step) {
            Some(next) => current = next,
            None => break,
        }
    }

    dates
}
