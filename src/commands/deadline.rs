//! Deadline command: add a deadline, optionally recurring

use tracing::info;

use crate::commands::{CommandError, CommandResult, add_recurring};
use crate::date_utils;
use crate::tasks::{Priority, Task, TaskList};
use crate::validation;

/// Notice placed above each deadline that was added
pub const MESSAGE_DEADLINE_ADDED: &str = "The following deadline was added:";

/// Add a deadline on each start date and on every `interval` days after it,
/// up to and including the final date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineCommand {
    description: String,
    priority: Priority,
    start_dates: Vec<String>,
    end_time: String,
    final_date: String,
    interval: u32,
}

impl DeadlineCommand {
    /// Create a deadline command
    ///
    /// # Arguments
    /// * `description` - Deadline description (no `_`)
    /// * `priority` - Priority of every generated deadline
    /// * `start_dates` - One or more `dd/mm/yyyy` dates, expanded in order
    /// * `end_time` - Due time as `hhmm`
    /// * `final_date` - Inclusive `dd/mm/yyyy` recurrence bound
    /// * `interval` - Days between recurrences (at least 1)
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        start_dates: Vec<String>,
        end_time: impl Into<String>,
        final_date: impl Into<String>,
        interval: u32,
    ) -> Self {
        Self {
            description: description.into(),
            priority,
            start_dates,
            end_time: end_time.into(),
            final_date: final_date.into(),
            interval,
        }
    }

    /// Expand the deadline into tasks and add the ones not already present
    ///
    /// All arguments are validated and parsed before the first insertion, so
    /// an error never leaves a partially applied command behind.
    pub fn execute(&self, tasks: &mut TaskList) -> Result<CommandResult, CommandError> {
        validation::validate_description(&self.description)?;
        validation::validate_interval(self.interval)?;
        validation::validate_start_dates(&self.start_dates)?;

        let final_date = date_utils::parse_date(&self.final_date)?;
        let start_dates = self
            .start_dates
            .iter()
            .map(|s| date_utils::parse_date(s))
            .collect::<Result<Vec<_>, _>>()?;
        let end_time = date_utils::parse_time(&self.end_time)?;

        info!(
            description = %self.description,
            start_dates = start_dates.len(),
            final_date = %final_date,
            interval = self.interval,
            "executing deadline command"
        );

        let outcome = add_recurring(
            tasks,
            &start_dates,
            final_date,
            self.interval,
            MESSAGE_DEADLINE_ADDED,
            |date| Task::deadline(self.description.as_str(), self.priority, date, end_time),
        );

        info!(
            added = outcome.added,
            duplicates = outcome.duplicates,
            "deadline command finished"
        );
        Ok(outcome.into_result("deadline", final_date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MESSAGE_DUPLICATE_TASK;

    fn dates(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn trip(start_dates: &[&str], final_date: &str, interval: u32) -> DeadlineCommand {
        DeadlineCommand::new(
            "trip",
            Priority::low,
            dates(start_dates),
            "1000",
            final_date,
            interval,
        )
    }

    #[test]
    fn test_weekly_recurrence_until_final_date() {
        let mut tasks = TaskList::new();
        let result = trip(&["01/01/2019"], "15/01/2019", 7)
            .execute(&mut tasks)
            .unwrap();

        let added: Vec<String> = tasks.all().iter().map(|t| t.string_main_date()).collect();
        assert_eq!(added, vec!["01/01/2019", "08/01/2019", "15/01/2019"]);
        assert!(tasks.all().iter().all(|t| t.string_end_time() == "1000"));
        assert!(result.mutated());
        assert_eq!(result.message().matches(MESSAGE_DEADLINE_ADDED).count(), 3);
    }

    #[test]
    fn test_single_date_without_recurrence() {
        let mut tasks = TaskList::new();
        trip(&["01/01/2019"], "01/01/2019", 7)
            .execute(&mut tasks)
            .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.all()[0].symbol(), 'D');
        assert!(tasks.all()[0].start_time.is_none());
    }

    #[test]
    fn test_daily_interval() {
        let mut tasks = TaskList::new();
        trip(&["30/12/2019"], "02/01/2020", 1)
            .execute(&mut tasks)
            .unwrap();
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks.all()[3].string_main_date(), "02/01/2020");
    }

    #[test]
    fn test_second_run_only_reports_duplicates() {
        let mut tasks = TaskList::new();
        let command = trip(&["01/01/2019"], "15/01/2019", 7);
        command.execute(&mut tasks).unwrap();

        let second = command.execute(&mut tasks).unwrap();
        assert_eq!(tasks.len(), 3);
        assert!(!second.mutated());
        assert_eq!(second.message().matches(MESSAGE_DUPLICATE_TASK).count(), 3);
        assert!(!second.message().contains(MESSAGE_DEADLINE_ADDED));
    }

    #[test]
    fn test_duplicate_match_ignores_description_case() {
        let mut tasks = TaskList::new();
        trip(&["01/01/2019"], "01/01/2019", 7)
            .execute(&mut tasks)
            .unwrap();

        let shouted = DeadlineCommand::new(
            "TRIP",
            Priority::high,
            dates(&["01/01/2019"]),
            "1000",
            "01/01/2019",
            7,
        );
        let result = shouted.execute(&mut tasks).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(result.message().starts_with(MESSAGE_DUPLICATE_TASK));
        assert!(result.message().contains("#1 trip"));
    }

    #[test]
    fn test_different_end_time_is_not_duplicate() {
        let mut tasks = TaskList::new();
        trip(&["01/01/2019"], "01/01/2019", 7)
            .execute(&mut tasks)
            .unwrap();
        DeadlineCommand::new("trip", Priority::low, dates(&["01/01/2019"]), "1100", "01/01/2019", 7)
            .execute(&mut tasks)
            .unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_underscore_rejected_before_parsing() {
        let mut tasks = TaskList::new();
        // The dates are malformed too; validation must win
        let command = DeadlineCommand::new(
            "cs2106_as",
            Priority::low,
            dates(&["not-a-date"]),
            "99",
            "garbage",
            7,
        );
        let err = command.execute(&mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::Validation(_)));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_bad_later_start_date_adds_nothing() {
        let mut tasks = TaskList::new();
        let command = trip(&["01/01/2019", "32/01/2019"], "15/01/2019", 7);
        let err = command.execute(&mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::Parse { field: "date", .. }));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_bad_end_time_is_parse_error() {
        let mut tasks = TaskList::new();
        let command = DeadlineCommand::new(
            "trip",
            Priority::low,
            dates(&["01/01/2019"]),
            "2460",
            "01/01/2019",
            7,
        );
        assert!(matches!(
            command.execute(&mut tasks),
            Err(CommandError::Parse { field: "time", .. })
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut tasks = TaskList::new();
        let err = trip(&["01/01/2019"], "15/01/2019", 0)
            .execute(&mut tasks)
            .unwrap_err();
        assert!(matches!(err, CommandError::Validation(_)));
    }

    #[test]
    fn test_start_after_final_adds_nothing() {
        let mut tasks = TaskList::new();
        let result = trip(&["20/01/2019"], "15/01/2019", 7)
            .execute(&mut tasks)
            .unwrap();
        assert!(tasks.is_empty());
        assert!(!result.mutated());
        assert!(result.message().starts_with("No deadline was added"));
    }
}
