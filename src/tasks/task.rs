use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

use crate::date_utils;

/// Placeholder written for an absent date or time in string form
pub const ABSENT_FIELD: &str = "-";

/// Task priority
///
/// Uses lowercase naming to match the record format and the command grammar.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    low,
    medium,
    high,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::low),
            "medium" => Ok(Priority::medium),
            "high" => Ok(Priority::high),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The variant of a task, identified by a one-letter symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Plain task without date or time (`T`)
    Todo,
    /// Due date and due time, no start time (`D`)
    Deadline,
    /// Date with a start and end time (`E`)
    Event,
}

impl TaskKind {
    /// One-letter symbol used in records and rendered output
    pub fn symbol(self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline => 'D',
            TaskKind::Event => 'E',
        }
    }

    /// Look up a kind by its symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'T' => Some(TaskKind::Todo),
            'D' => Some(TaskKind::Deadline),
            'E' => Some(TaskKind::Event),
            _ => None,
        }
    }

    /// Lowercase name used in messages
    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Todo => "task",
            TaskKind::Deadline => "deadline",
            TaskKind::Event => "event",
        }
    }
}

/// A single task record
///
/// One struct covers every variant; `kind` decides which of the optional
/// date/time fields are meaningful:
/// - `Todo`: no date, no times
/// - `Deadline`: `main_date` and `end_time`
/// - `Event`: `main_date`, `start_time` and `end_time`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Session-unique ID, assigned by `TaskList::add` (0 until then)
    pub id: u32,
    /// Free text; never contains the record separator `_`
    pub description: String,
    pub kind: TaskKind,
    pub is_done: bool,
    pub priority: Priority,
    /// Due date for deadlines, day of the event for events
    pub main_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub has_reminder: bool,
}

impl Task {
    fn blank(description: impl Into<String>, kind: TaskKind, priority: Priority) -> Self {
        Self {
            id: 0,
            description: description.into(),
            kind,
            is_done: false,
            priority,
            main_date: None,
            start_time: None,
            end_time: None,
            has_reminder: false,
        }
    }

    /// Create a plain task with no date
    pub fn todo(description: impl Into<String>, priority: Priority) -> Self {
        Self::blank(description, TaskKind::Todo, priority)
    }

    /// Create a deadline due on `date` at `end_time`
    pub fn deadline(
        description: impl Into<String>,
        priority: Priority,
        date: NaiveDate,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            main_date: Some(date),
            end_time: Some(end_time),
            ..Self::blank(description, TaskKind::Deadline, priority)
        }
    }

    /// Create an event on `date` running from `start_time` to `end_time`
    pub fn event(
        description: impl Into<String>,
        priority: Priority,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            main_date: Some(date),
            start_time: Some(start_time),
            end_time: Some(end_time),
            ..Self::blank(description, TaskKind::Event, priority)
        }
    }

    /// Variant symbol (`T`, `D` or `E`)
    pub fn symbol(&self) -> char {
        self.kind.symbol()
    }

    /// Completion marker shown in rendered output
    pub fn status_icon(&self) -> char {
        if self.is_done { '\u{2714}' } else { '\u{2718}' }
    }

    pub fn mark_as_done(&mut self) {
        self.is_done = true;
    }

    /// Main date as `dd/mm/yyyy`, or `-` when absent
    pub fn string_main_date(&self) -> String {
        self.main_date
            .map(date_utils::format_date)
            .unwrap_or_else(|| ABSENT_FIELD.to_string())
    }

    /// Start time as `hhmm`, or `-` when absent
    pub fn string_start_time(&self) -> String {
        self.start_time
            .map(date_utils::format_time)
            .unwrap_or_else(|| ABSENT_FIELD.to_string())
    }

    /// End time as `hhmm`, or `-` when absent
    pub fn string_end_time(&self) -> String {
        self.end_time
            .map(date_utils::format_time)
            .unwrap_or_else(|| ABSENT_FIELD.to_string())
    }

    /// Start of the task on its main date, if both are known
    pub fn start_datetime(&self) -> Option<NaiveDateTime> {
        Some(self.main_date?.and_time(self.start_time?))
    }

    /// End of the task on its main date, if both are known
    pub fn end_datetime(&self) -> Option<NaiveDateTime> {
        Some(self.main_date?.and_time(self.end_time?))
    }

    /// Whether the task occupies a concrete span of time
    pub fn has_time_window(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }

    /// Check whether `other` describes the same task
    ///
    /// Two tasks are duplicates when the variant, the date string and the end
    /// time string match and the descriptions are equal ignoring case. Events
    /// must also share their start time. IDs, priority, completion and
    /// reminders are not compared.
    pub fn is_duplicate_of(&self, other: &Task) -> bool {
        self.kind == other.kind
            && self.string_main_date() == other.string_main_date()
            && (self.kind != TaskKind::Event
                || self.string_start_time() == other.string_start_time())
            && self.string_end_time() == other.string_end_time()
            && self.description.to_lowercase() == other.description.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deadline() -> Task {
        Task::deadline(
            "Test content",
            Priority::high,
            NaiveDate::from_ymd_opt(2019, 10, 1).unwrap(),
            NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_deadline_fields() {
        let deadline = sample_deadline();
        assert_eq!(deadline.symbol(), 'D');
        assert_eq!(deadline.priority, Priority::high);
        assert!(!deadline.is_done);
        assert!(!deadline.has_reminder);
        assert_eq!(deadline.string_main_date(), "01/10/2019");
        assert_eq!(deadline.string_end_time(), "1230");
        assert!(deadline.start_time.is_none());
        assert_eq!(deadline.string_start_time(), "-");
        assert!(!deadline.has_time_window());
    }

    #[test]
    fn test_status_icon_follows_completion() {
        let mut deadline = sample_deadline();
        assert_eq!(deadline.status_icon(), '\u{2718}');
        deadline.mark_as_done();
        assert!(deadline.is_done);
        assert_eq!(deadline.status_icon(), '\u{2714}');
    }

    #[test]
    fn test_todo_has_no_dates() {
        let todo = Task::todo("buy milk", Priority::low);
        assert_eq!(todo.symbol(), 'T');
        assert_eq!(todo.string_main_date(), "-");
        assert!(todo.start_datetime().is_none());
        assert!(todo.end_datetime().is_none());
    }

    #[test]
    fn test_event_datetimes() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let event = Task::event(
            "meeting",
            Priority::medium,
            date,
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        );
        assert!(event.has_time_window());
        assert_eq!(event.start_datetime(), date.and_hms_opt(10, 0, 0));
        assert_eq!(event.end_datetime(), date.and_hms_opt(12, 0, 0));
    }

    #[test]
    fn test_duplicate_ignores_case_priority_and_id() {
        let original = sample_deadline();
        let mut candidate = sample_deadline();
        candidate.description = "TEST CONTENT".to_string();
        candidate.priority = Priority::low;
        candidate.id = 42;
        assert!(candidate.is_duplicate_of(&original));
    }

    #[test]
    fn test_duplicate_requires_same_date_and_time() {
        let original = sample_deadline();

        let mut other_time = sample_deadline();
        other_time.end_time = NaiveTime::from_hms_opt(12, 31, 0);
        assert!(!other_time.is_duplicate_of(&original));

        let mut other_date = sample_deadline();
        other_date.main_date = NaiveDate::from_ymd_opt(2019, 10, 2);
        assert!(!other_date.is_duplicate_of(&original));

        let mut other_kind = sample_deadline();
        other_kind.kind = TaskKind::Event;
        assert!(!other_kind.is_duplicate_of(&original));
    }

    #[test]
    fn test_deadline_duplicate_ignores_start_time() {
        let original = sample_deadline();
        let mut candidate = sample_deadline();
        candidate.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        assert!(candidate.is_duplicate_of(&original));
    }

    #[test]
    fn test_event_duplicate_requires_same_start() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let end = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let morning = Task::event("sync", Priority::low, date, NaiveTime::from_hms_opt(9, 0, 0).unwrap(), end);
        let later = Task::event("sync", Priority::low, date, NaiveTime::from_hms_opt(10, 0, 0).unwrap(), end);
        assert!(!later.is_duplicate_of(&morning));
        assert!(morning.clone().is_duplicate_of(&morning));
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::high));
        assert_eq!(" Medium ".parse::<Priority>(), Ok(Priority::medium));
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!(Priority::default(), Priority::low);
        assert_eq!(Priority::medium.to_string(), "medium");
    }

    #[test]
    fn test_kind_symbols_round_trip() {
        for kind in [TaskKind::Todo, TaskKind::Deadline, TaskKind::Event] {
            assert_eq!(TaskKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(TaskKind::from_symbol('X'), None);
    }
}
