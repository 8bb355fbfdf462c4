//! Validation helper functions for daybook commands
//!
//! Business-rule checks that run before a command touches the task list.
//! Each returns `CommandError::Validation` with a message meant for the user.

use crate::commands::CommandError;
use crate::tasks::SEPARATOR;
use chrono::NaiveTime;

/// Validate a task description
///
/// # Arguments
/// * `description` - Description text to check
///
/// # Returns
/// `Ok(())` if the description is non-empty and free of the record separator
pub fn validate_description(description: &str) -> Result<(), CommandError> {
    if description.contains(SEPARATOR) {
        return Err(CommandError::Validation(format!(
            "Invalid description '{}'. Descriptions must not contain '{}'.",
            description, SEPARATOR
        )));
    }
    if description.trim().is_empty() {
        return Err(CommandError::Validation(
            "Description cannot be empty.".to_string(),
        ));
    }
    Ok(())
}

/// Validate a recurrence interval in days
pub fn validate_interval(interval: u32) -> Result<(), CommandError> {
    if interval == 0 {
        return Err(CommandError::Validation(
            "Interval must be at least 1 day.".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a list of start dates is not empty
pub fn validate_start_dates(start_dates: &[String]) -> Result<(), CommandError> {
    if start_dates.is_empty() {
        return Err(CommandError::Validation(
            "At least one date is required.".to_string(),
        ));
    }
    Ok(())
}

/// Validate that an event starts before it ends
///
/// # Arguments
/// * `start` - Start time of the event
/// * `end` - End time of the event
pub fn validate_time_window(start: NaiveTime, end: NaiveTime) -> Result<(), CommandError> {
    if start >= end {
        return Err(CommandError::Validation(format!(
            "Start time {} must be before end time {}.",
            start.format("%H%M"),
            end.format("%H%M")
        )));
    }
    Ok(())
}
