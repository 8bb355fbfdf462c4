//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use daybook::{Daybook, Priority, Task, TaskList};
use tempfile::TempDir;

/// Name of the data file created inside each test directory
pub const DATA_FILE: &str = "tasks.txt";

/// Create a session backed by a fresh temporary directory
///
/// The directory must be kept alive for as long as the session is used.
pub fn get_test_daybook() -> (Daybook, TempDir) {
    let dir = TempDir::new().unwrap();
    let daybook = Daybook::new(dir.path().join(DATA_FILE), 7).unwrap();
    (daybook, dir)
}

/// Reopen the data file of a test directory as a new session
pub fn reopen(dir: &TempDir) -> Daybook {
    Daybook::new(dir.path().join(DATA_FILE), 7).unwrap()
}

/// Build a date from `dd/mm/yyyy` parts
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Build a time from an `hhmm` string
pub fn time(hhmm: &str) -> NaiveTime {
    daybook::date_utils::parse_time(hhmm).unwrap()
}

/// Add an event on `date` occupying `start` to `end`
pub fn add_event(tasks: &mut TaskList, description: &str, date: NaiveDate, start: &str, end: &str) -> u32 {
    tasks.add(Task::event(description, Priority::low, date, time(start), time(end)))
}

/// Dates of all tasks in list order, as `dd/mm/yyyy`
pub fn task_dates(tasks: &TaskList) -> Vec<String> {
    tasks.all().iter().map(|t| t.string_main_date()).collect()
}
