//! Command line grammar
//!
//! Turns one line of user input into a `Command`. A line starts with a command
//! word, optionally followed by free text, followed by `/flag value...` blocks
//! in any order:
//!
//! ```text
//! deadline cs2106 assignment /date 01/01/2019 08/01/2019 /end 2359 /priority high
//! ```
//!
//! The parser checks that required blocks are present and that numbers and
//! priorities are well formed. Dates and times inside deadline/event/edit
//! commands are left as strings; the commands parse them so that a bad value
//! is reported before anything is changed.

use std::str::FromStr;

use tracing::debug;

use crate::commands::{
    Command, DeadlineCommand, DeleteCommand, DoneCommand, EditCommand, EventCommand,
    FindFreeSlotCommand, ListCommand, ReminderCommand,
};
use crate::date_utils;
use crate::tasks::Priority;

/// Recurrence interval used when a command gives no `/interval`
pub const DEFAULT_INTERVAL: u32 = 7;

pub const DEADLINE_USAGE: &str = "deadline <description> /date <dd/mm/yyyy>... /end <hhmm> [/interval <days>] [/priority <low|medium|high>] [/final-date <dd/mm/yyyy>]";
pub const EVENT_USAGE: &str = "event <description> /date <dd/mm/yyyy>... /start <hhmm> /end <hhmm> [/interval <days>] [/priority <low|medium|high>] [/final-date <dd/mm/yyyy>]";
pub const FIND_FREE_SLOT_USAGE: &str = "findfreeslot /date <dd/mm/yyyy> [/hour <n>] [/min <n>]";
pub const DONE_USAGE: &str = "done <task-id>";
pub const DELETE_USAGE: &str = "delete <task-id>";
pub const EDIT_USAGE: &str = "edit <task-id> [/description <text>] [/date <dd/mm/yyyy>] [/start <hhmm>] [/end <hhmm>] [/priority <low|medium|high>]";
pub const REMINDER_USAGE: &str = "set-reminder <task-id> <on|off>";
pub const LIST_USAGE: &str = "list";

/// Full help text listing every command
pub const USAGE: &str = "Available commands:
  deadline <description> /date <dd/mm/yyyy>... /end <hhmm> [/interval <days>] [/priority <low|medium|high>] [/final-date <dd/mm/yyyy>]
      Add a deadline on each date, repeating every <days> (default 7) until the final date (default: latest date).
  event <description> /date <dd/mm/yyyy>... /start <hhmm> /end <hhmm> [/interval <days>] [/priority <low|medium|high>] [/final-date <dd/mm/yyyy>]
      Add an event on each date, repeating like deadlines.
  findfreeslot /date <dd/mm/yyyy> [/hour <n>] [/min <n>]
      List free slots of at least the given length on a date.
  done <task-id>
  delete <task-id>
  edit <task-id> [/description <text>] [/date <dd/mm/yyyy>] [/start <hhmm>] [/end <hhmm>] [/priority <low|medium|high>]
  set-reminder <task-id> <on|off>
  list
  help
  bye";

/// Errors produced while turning a line into a command
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("Empty command. Type 'help' to see the available commands.")]
    Empty,

    #[error("Unknown command '{0}'. Type 'help' to see the available commands.")]
    UnknownCommand(String),

    #[error("Missing {what} for '{command}'. Usage: {usage}")]
    Missing {
        command: &'static str,
        what: &'static str,
        usage: &'static str,
    },

    #[error("Invalid {what} '{value}' for '{command}'. {hint}")]
    InvalidValue {
        command: &'static str,
        what: &'static str,
        value: String,
        hint: &'static str,
    },

    #[error("Unknown flag '/{flag}' for '{command}'. Usage: {usage}")]
    UnknownFlag {
        command: &'static str,
        flag: String,
        usage: &'static str,
    },

    #[error("Flag '/{0}' was given more than once")]
    DuplicateFlag(String),
}

/// Parses input lines into commands
#[derive(Debug, Clone)]
pub struct CommandParser {
    default_interval: u32,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl CommandParser {
    /// Create a parser that uses `default_interval` when `/interval` is absent
    pub fn new(default_interval: u32) -> Self {
        Self { default_interval }
    }

    /// Parse one line of input
    pub fn parse(&self, input: &str) -> Result<Command, ParserError> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (input, ""),
        };
        if word.is_empty() {
            return Err(ParserError::Empty);
        }

        debug!(command = word, "parsing command");
        match word.to_lowercase().as_str() {
            "deadline" => self.parse_deadline(rest),
            "event" => self.parse_event(rest),
            "findfreeslot" => parse_find_free_slot(rest),
            "done" => parse_id_only(rest, "done", DONE_USAGE).map(|id| Command::Done(DoneCommand::new(id))),
            "delete" => parse_id_only(rest, "delete", DELETE_USAGE)
                .map(|id| Command::Delete(DeleteCommand::new(id))),
            "edit" => parse_edit(rest),
            "set-reminder" => parse_reminder(rest),
            "list" => Ok(Command::List(ListCommand::new())),
            _ => Err(ParserError::UnknownCommand(word.to_string())),
        }
    }

    fn parse_deadline(&self, rest: &str) -> Result<Command, ParserError> {
        const COMMAND: &str = "deadline";
        let mut args = Arguments::split(rest)?;
        let description = args.description(COMMAND, DEADLINE_USAGE)?;
        let start_dates = args.required_list("date", COMMAND, "/date", DEADLINE_USAGE)?;
        let end_time = args.required_single("end", COMMAND, "/end", DEADLINE_USAGE)?;
        let common = self.recurrence_options(&mut args, COMMAND, DEADLINE_USAGE, &start_dates)?;
        args.finish(COMMAND, DEADLINE_USAGE)?;

        Ok(Command::Deadline(DeadlineCommand::new(
            description,
            common.priority,
            start_dates,
            end_time,
            common.final_date,
            common.interval,
        )))
    }

    fn parse_event(&self, rest: &str) -> Result<Command, ParserError> {
        const COMMAND: &str = "event";
        let mut args = Arguments::split(rest)?;
        let description = args.description(COMMAND, EVENT_USAGE)?;
        let start_dates = args.required_list("date", COMMAND, "/date", EVENT_USAGE)?;
        let start_time = args.required_single("start", COMMAND, "/start", EVENT_USAGE)?;
        let end_time = args.required_single("end", COMMAND, "/end", EVENT_USAGE)?;
        let common = self.recurrence_options(&mut args, COMMAND, EVENT_USAGE, &start_dates)?;
        args.finish(COMMAND, EVENT_USAGE)?;

        Ok(Command::Event(EventCommand::new(
            description,
            common.priority,
            start_dates,
            start_time,
            end_time,
            common.final_date,
            common.interval,
        )))
    }

    /// Read `/interval`, `/priority` and `/final-date`, filling in defaults
    fn recurrence_options(
        &self,
        args: &mut Arguments,
        command: &'static str,
        usage: &'static str,
        start_dates: &[String],
    ) -> Result<RecurrenceOptions, ParserError> {
        let interval = match args.optional_single("interval", command, usage)? {
            Some(value) => parse_number(&value, command, "interval")?,
            None => self.default_interval,
        };
        let priority = match args.optional_single("priority", command, usage)? {
            Some(value) => parse_priority(&value, command)?,
            None => Priority::default(),
        };
        let final_date = match args.optional_single("final-date", command, usage)? {
            Some(value) => value,
            None => latest_date(start_dates),
        };

        Ok(RecurrenceOptions {
            interval,
            priority,
            final_date,
        })
    }
}

struct RecurrenceOptions {
    interval: u32,
    priority: Priority,
    final_date: String,
}

fn parse_find_free_slot(rest: &str) -> Result<Command, ParserError> {
    const COMMAND: &str = "findfreeslot";
    let mut args = Arguments::split(rest)?;
    let date_str = args.required_single("date", COMMAND, "/date", FIND_FREE_SLOT_USAGE)?;
    let hour = args.optional_single("hour", COMMAND, FIND_FREE_SLOT_USAGE)?;
    let min = args.optional_single("min", COMMAND, FIND_FREE_SLOT_USAGE)?;
    args.finish(COMMAND, FIND_FREE_SLOT_USAGE)?;
    if !args.head.is_empty() {
        return Err(ParserError::InvalidValue {
            command: COMMAND,
            what: "argument",
            value: args.head.join(" "),
            hint: "Arguments must be given as /date, /hour and /min blocks.",
        });
    }

    let date = date_utils::parse_date(&date_str).map_err(|_| ParserError::InvalidValue {
        command: COMMAND,
        what: "date",
        value: date_str.clone(),
        hint: "Use dd/mm/yyyy (e.g., '01/01/2019').",
    })?;

    if hour.is_none() && min.is_none() {
        return Err(ParserError::Missing {
            command: COMMAND,
            what: "duration (/hour or /min)",
            usage: FIND_FREE_SLOT_USAGE,
        });
    }
    let hour = hour
        .map(|h| parse_number(&h, COMMAND, "hour"))
        .transpose()?
        .unwrap_or(0);
    let min = min
        .map(|m| parse_number(&m, COMMAND, "min"))
        .transpose()?
        .unwrap_or(0);
    if hour == 0 && min == 0 {
        return Err(ParserError::InvalidValue {
            command: COMMAND,
            what: "duration",
            value: "0".to_string(),
            hint: "The slot length must be at least one minute.",
        });
    }

    Ok(Command::FindFreeSlot(FindFreeSlotCommand::new(
        date, hour, min,
    )))
}

fn parse_edit(rest: &str) -> Result<Command, ParserError> {
    const COMMAND: &str = "edit";
    let mut args = Arguments::split(rest)?;
    let id = parse_task_id(&args.head, COMMAND, EDIT_USAGE)?;

    let mut edit = EditCommand::new(id);
    if let Some(words) = args.take("description") {
        edit = edit.with_description(words.join(" "));
    }
    if let Some(date) = args.optional_single("date", COMMAND, EDIT_USAGE)? {
        edit = edit.with_date(date);
    }
    if let Some(start) = args.optional_single("start", COMMAND, EDIT_USAGE)? {
        edit = edit.with_start_time(start);
    }
    if let Some(end) = args.optional_single("end", COMMAND, EDIT_USAGE)? {
        edit = edit.with_end_time(end);
    }
    if let Some(priority) = args.optional_single("priority", COMMAND, EDIT_USAGE)? {
        edit = edit.with_priority(parse_priority(&priority, COMMAND)?);
    }
    args.finish(COMMAND, EDIT_USAGE)?;

    Ok(Command::Edit(edit))
}

fn parse_reminder(rest: &str) -> Result<Command, ParserError> {
    const COMMAND: &str = "set-reminder";
    let words: Vec<&str> = rest.split_whitespace().collect();
    let (id_word, state) = match words.as_slice() {
        [id, state] => (*id, *state),
        _ => {
            return Err(ParserError::Missing {
                command: COMMAND,
                what: "task ID and state",
                usage: REMINDER_USAGE,
            });
        }
    };

    let id = parse_task_id(&[id_word.to_string()], COMMAND, REMINDER_USAGE)?;
    let enabled = match state.to_lowercase().as_str() {
        "on" => true,
        "off" => false,
        _ => {
            return Err(ParserError::InvalidValue {
                command: COMMAND,
                what: "state",
                value: state.to_string(),
                hint: "Use 'on' or 'off'.",
            });
        }
    };

    Ok(Command::Reminder(ReminderCommand::new(id, enabled)))
}

fn parse_id_only(
    rest: &str,
    command: &'static str,
    usage: &'static str,
) -> Result<u32, ParserError> {
    let words: Vec<String> = rest.split_whitespace().map(str::to_string).collect();
    parse_task_id(&words, command, usage)
}

fn parse_task_id(
    words: &[String],
    command: &'static str,
    usage: &'static str,
) -> Result<u32, ParserError> {
    match words {
        [] => Err(ParserError::Missing {
            command,
            what: "task ID",
            usage,
        }),
        [word] => word
            .trim_start_matches('#')
            .parse::<u32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ParserError::InvalidValue {
                command,
                what: "task ID",
                value: word.clone(),
                hint: "Task IDs are positive numbers shown by 'list'.",
            }),
        _ => Err(ParserError::InvalidValue {
            command,
            what: "task ID",
            value: words.join(" "),
            hint: "Give exactly one task ID.",
        }),
    }
}

fn parse_number<T: FromStr>(
    value: &str,
    command: &'static str,
    what: &'static str,
) -> Result<T, ParserError> {
    value.parse::<T>().map_err(|_| ParserError::InvalidValue {
        command,
        what,
        value: value.to_string(),
        hint: "Use a whole number.",
    })
}

fn parse_priority(value: &str, command: &'static str) -> Result<Priority, ParserError> {
    value.parse::<Priority>().map_err(|_| ParserError::InvalidValue {
        command,
        what: "priority",
        value: value.to_string(),
        hint: "Valid priorities: low, medium, high.",
    })
}

/// Latest of the given dates; unparsable entries are left for the command to report
fn latest_date(start_dates: &[String]) -> String {
    start_dates
        .iter()
        .max_by_key(|s| date_utils::parse_date(s).ok())
        .cloned()
        .unwrap_or_default()
}

/// Whitespace-split words of a line, grouped into free text and flag blocks
#[derive(Debug, Default)]
struct Arguments {
    /// Words before the first flag
    head: Vec<String>,
    /// Flag name (without `/`) and its words, in input order
    flags: Vec<(String, Vec<String>)>,
}

impl Arguments {
    fn split(rest: &str) -> Result<Self, ParserError> {
        let mut args = Arguments::default();
        for word in rest.split_whitespace() {
            if let Some(flag) = word.strip_prefix('/')
                && !flag.is_empty()
            {
                let flag = flag.to_lowercase();
                if args.flags.iter().any(|(name, _)| *name == flag) {
                    return Err(ParserError::DuplicateFlag(flag));
                }
                args.flags.push((flag, Vec::new()));
            } else if let Some((_, values)) = args.flags.last_mut() {
                values.push(word.to_string());
            } else {
                args.head.push(word.to_string());
            }
        }
        Ok(args)
    }

    /// Remove a flag block and return its words
    fn take(&mut self, flag: &str) -> Option<Vec<String>> {
        let pos = self.flags.iter().position(|(name, _)| name == flag)?;
        Some(self.flags.remove(pos).1)
    }

    fn description(
        &self,
        command: &'static str,
        usage: &'static str,
    ) -> Result<String, ParserError> {
        if self.head.is_empty() {
            return Err(ParserError::Missing {
                command,
                what: "description",
                usage,
            });
        }
        Ok(self.head.join(" "))
    }

    fn required_list(
        &mut self,
        flag: &str,
        command: &'static str,
        what: &'static str,
        usage: &'static str,
    ) -> Result<Vec<String>, ParserError> {
        match self.take(flag) {
            Some(values) if !values.is_empty() => Ok(values),
            _ => Err(ParserError::Missing {
                command,
                what,
                usage,
            }),
        }
    }

    fn required_single(
        &mut self,
        flag: &str,
        command: &'static str,
        what: &'static str,
        usage: &'static str,
    ) -> Result<String, ParserError> {
        self.optional_single(flag, command, usage)?
            .ok_or(ParserError::Missing {
                command,
                what,
                usage,
            })
    }

    fn optional_single(
        &mut self,
        flag: &str,
        command: &'static str,
        usage: &'static str,
    ) -> Result<Option<String>, ParserError> {
        let Some(values) = self.take(flag) else {
            return Ok(None);
        };
        match values.as_slice() {
            [value] => Ok(Some(value.clone())),
            [] => Err(ParserError::InvalidValue {
                command,
                what: "value",
                value: format!("/{}", flag),
                hint: usage,
            }),
            _ => Err(ParserError::InvalidValue {
                command,
                what: "value",
                value: values.join(" "),
                hint: usage,
            }),
        }
    }

    /// Fail on any flag the command did not consume
    fn finish(&self, command: &'static str, usage: &'static str) -> Result<(), ParserError> {
        match self.flags.first() {
            Some((flag, _)) => Err(ParserError::UnknownFlag {
                command,
                flag: flag.clone(),
                usage,
            }),
            None => Ok(()),
        }
    }
}
