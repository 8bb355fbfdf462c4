//! Line record codec for tasks
//!
//! Each task is stored as one line of eight `_`-separated fields:
//! `symbol_description_isDone_priority_date_startTime_endTime_hasReminder`,
//! e.g. `D_Test content_false_high_01/10/2019_-_1230_false`.
//! Absent dates and times are written as `-`.

use chrono::{NaiveDate, NaiveTime};

use crate::date_utils;
use crate::tasks::task::{ABSENT_FIELD, Priority, Task, TaskKind};

/// Field separator; descriptions are validated never to contain it
pub const SEPARATOR: char = '_';

const FIELD_COUNT: usize = 8;

/// Errors produced while decoding a task record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("expected 8 fields separated by '_', found {0}")]
    FieldCount(usize),

    #[error("unknown task symbol '{0}'")]
    UnknownSymbol(String),

    #[error("invalid {field} '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("{kind} record is missing its {field}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

/// Encode a task as a single record line (without trailing newline)
pub fn to_record(task: &Task) -> String {
    [
        task.symbol().to_string(),
        task.description.clone(),
        task.is_done.to_string(),
        task.priority.to_string(),
        task.string_main_date(),
        task.string_start_time(),
        task.string_end_time(),
        task.has_reminder.to_string(),
    ]
    .join(&SEPARATOR.to_string())
}

/// Decode a record line into a task
///
/// The returned task has ID 0; `TaskList::add` assigns the real one.
pub fn from_record(line: &str) -> Result<Task, RecordError> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(RecordError::FieldCount(fields.len()));
    }

    let kind = parse_symbol(fields[0])?;
    let description = fields[1].to_string();
    let is_done = parse_bool("isDone", fields[2])?;
    let priority: Priority = fields[3].parse().map_err(|_| RecordError::InvalidField {
        field: "priority",
        value: fields[3].to_string(),
    })?;
    let main_date = parse_optional_date(fields[4])?;
    let start_time = parse_optional_time("start time", fields[5])?;
    let end_time = parse_optional_time("end time", fields[6])?;
    let has_reminder = parse_bool("hasReminder", fields[7])?;

    let missing = |field| RecordError::MissingField {
        kind: kind.name(),
        field,
    };
    // A field the kind cannot carry must be written as `-`
    let reject_present = |field: &'static str, index: usize| {
        if fields[index] == ABSENT_FIELD {
            Ok(())
        } else {
            Err(RecordError::InvalidField {
                field,
                value: fields[index].to_string(),
            })
        }
    };
    match kind {
        TaskKind::Todo => {
            reject_present("date", 4)?;
            reject_present("start time", 5)?;
            reject_present("end time", 6)?;
        }
        TaskKind::Deadline => {
            main_date.ok_or_else(|| missing("date"))?;
            reject_present("start time", 5)?;
            end_time.ok_or_else(|| missing("end time"))?;
        }
        TaskKind::Event => {
            main_date.ok_or_else(|| missing("date"))?;
            start_time.ok_or_else(|| missing("start time"))?;
            end_time.ok_or_else(|| missing("end time"))?;
        }
    }

    Ok(Task {
        id: 0,
        description,
        kind,
        is_done,
        priority,
        main_date,
        start_time,
        end_time,
        has_reminder,
    })
}

fn parse_symbol(value: &str) -> Result<TaskKind, RecordError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            TaskKind::from_symbol(c).ok_or_else(|| RecordError::UnknownSymbol(value.to_string()))
        }
        _ => Err(RecordError::UnknownSymbol(value.to_string())),
    }
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, RecordError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(RecordError::InvalidField {
            field,
            value: value.to_string(),
        }),
    }
}

fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, RecordError> {
    if value == ABSENT_FIELD {
        return Ok(None);
    }
    date_utils::parse_date(value)
        .map(Some)
        .map_err(|_| RecordError::InvalidField {
            field: "date",
            value: value.to_string(),
        })
}

fn parse_optional_time(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveTime>, RecordError> {
    if value == ABSENT_FIELD {
        return Ok(None);
    }
    date_utils::parse_time(value)
        .map(Some)
        .map_err(|_| RecordError::InvalidField {
            field,
            value: value.to_string(),
        })
}
