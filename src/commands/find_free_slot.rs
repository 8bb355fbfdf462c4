//! Find-free-slot command: list the gaps on a date that fit a given duration

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::commands::{CommandError, CommandResult};
use crate::date_utils;
use crate::formatting;
use crate::tasks::TaskList;

/// Busy interval taken from a task with a start and an end time
type Interval = (NaiveDateTime, NaiveDateTime);

/// Find free time slots of at least `hour` hours and `min` minutes on `date`
///
/// Only tasks with both a start and an end time occupy the day. When the date
/// is today, intervals that already ended are ignored and the scan starts no
/// earlier than the end of the first remaining interval or the current time,
/// whichever is later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindFreeSlotCommand {
    date: NaiveDate,
    hour: u32,
    min: u32,
}

impl FindFreeSlotCommand {
    pub fn new(date: NaiveDate, hour: u32, min: u32) -> Self {
        Self { date, hour, min }
    }

    /// Required slot length in minutes
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.min)
    }

    /// Run the query against the current wall-clock time
    pub fn execute(&self, tasks: &TaskList) -> Result<CommandResult, CommandError> {
        self.execute_at(tasks, date_utils::local_now())
    }

    /// Run the query as if the current time were `now`
    ///
    /// The list is never modified, so the result is never marked as mutated.
    pub fn execute_at(
        &self,
        tasks: &TaskList,
        now: NaiveDateTime,
    ) -> Result<CommandResult, CommandError> {
        let is_today = self.date == now.date();

        let mut busy: Vec<Interval> = tasks
            .all()
            .iter()
            .filter(|t| t.main_date == Some(self.date))
            .filter_map(|t| Some((t.start_datetime()?, t.end_datetime()?)))
            .filter(|&(_, end)| !is_today || end > now)
            .collect();

        info!(
            date = %self.date,
            duration = self.duration_minutes(),
            busy = busy.len(),
            "executing findfreeslot command"
        );

        if busy.is_empty() {
            return Ok(CommandResult::new(formatting::MESSAGE_FREE_ALL_DAY, false));
        }

        // Insertion order says nothing about time order
        busy.sort_by_key(|&(start, _)| start);

        let day_end = date_utils::add_days(self.date, 1)
            .map(date_utils::start_of_day)
            .ok_or_else(|| {
                CommandError::Validation(format!(
                    "Date {} is out of range.",
                    date_utils::format_date(self.date)
                ))
            })?;
        let window_start = if is_today {
            busy[0].1.max(now)
        } else {
            date_utils::start_of_day(self.date)
        };

        let slots = free_slots(&busy, window_start, day_end, self.duration_minutes());
        Ok(CommandResult::new(
            formatting::format_free_slots(self.date, &slots),
            false,
        ))
    }
}

/// Collect the gaps between `window_start`, the busy intervals and `day_end`
///
/// `busy` must be sorted by start time. Gaps are rendered as `"HHmm to HHmm"`,
/// and the gap running to the end of the day as `"HHmm to 2400"`.
fn free_slots(
    busy: &[Interval],
    window_start: NaiveDateTime,
    day_end: NaiveDateTime,
    duration: i64,
) -> Vec<String> {
    let mut slots = Vec::new();
    let mut pointer = window_start;

    for &(start, end) in busy {
        if fits(pointer, start, duration) {
            slots.push(format!(
                "{} to {}",
                date_utils::format_time(pointer.time()),
                date_utils::format_time(start.time())
            ));
        }
        // A task nested inside an earlier one must not move the pointer back
        pointer = pointer.max(end);
    }

    if fits(pointer, day_end, duration) {
        slots.push(format!(
            "{} to 2400",
            date_utils::format_time(pointer.time())
        ));
    }

    slots
}

/// A gap fits when it is non-empty and at least `duration` minutes long
///
/// The non-empty check only matters for a zero `duration`, which the parser
/// rejects.
fn fits(from: NaiveDateTime, to: NaiveDateTime, duration: i64) -> bool {
    let gap = date_utils::minutes_between(from, to);
    gap > 0 && gap >= duration
}
