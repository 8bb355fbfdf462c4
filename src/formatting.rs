//! Formatting helper functions for daybook
//!
//! This module contains the rendering of tasks and query results shown to the
//! user.

use crate::date_utils;
use crate::tasks::{Task, TaskKind};
use chrono::NaiveDate;

/// Message returned when a free-slot query finds no qualifying gap
pub const MESSAGE_FREE_ALL_DAY: &str = "You are free for the entire day!";

/// Render one task as a multi-line block
///
/// # Example output
/// ```text
/// [D][✘] #3 trip
///   Date: 01/01/2019
///   Due: 1000
///   Priority: low
/// ```
pub fn format_task(task: &Task) -> String {
    let mut result = format!(
        "[{}][{}] #{} {}\n",
        task.symbol(),
        task.status_icon(),
        task.id,
        task.description
    );

    if task.main_date.is_some() {
        result.push_str(&format!("  Date: {}\n", task.string_main_date()));
    }
    match task.kind {
        TaskKind::Deadline => {
            result.push_str(&format!("  Due: {}\n", task.string_end_time()));
        }
        TaskKind::Event => {
            result.push_str(&format!(
                "  Time: {} to {}\n",
                task.string_start_time(),
                task.string_end_time()
            ));
        }
        TaskKind::Todo => {}
    }
    result.push_str(&format!("  Priority: {}", task.priority));
    if task.has_reminder {
        result.push_str("\n  Reminder: on");
    }

    result
}

/// Format tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks to render, in display order
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n", tasks.len());
    for task in tasks {
        result.push('\n');
        result.push_str(&format_task(task));
        result.push('\n');
    }

    result.trim_end().to_string()
}

/// Render free-slot query results
///
/// # Arguments
/// * `date` - Date that was queried
/// * `slots` - Slots already formatted as `"HHmm to HHmm"`
///
/// # Returns
/// The numbered slot list, or `MESSAGE_FREE_ALL_DAY` when `slots` is empty
pub fn format_free_slots(date: NaiveDate, slots: &[String]) -> String {
    if slots.is_empty() {
        return MESSAGE_FREE_ALL_DAY.to_string();
    }

    let mut result = format!(
        "Here are the available time slots for {}:",
        date_utils::format_date(date)
    );
    for (i, slot) in slots.iter().enumerate() {
        result.push_str(&format!("\n{}. {}", i + 1, slot));
    }

    result
}
