//! Line commands driving a [`ShiftSession`] from the terminal.

use crate::components::daily_record::ShiftSession;
use crate::components::shift_calculator::WorkerType;
use crate::components::shift_form::{
    end_time_options, start_time_options, ShiftForm, HEADCOUNT_RANGE,
};
use crate::error::{invalid_shift_error, Error, TallyResult};
use rust_i18n::t;
use tracing::{debug, error};

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        worker_type: WorkerType,
        start_time: String,
        end_time: String,
        count: u32,
    },
    List,
    Summary,
    Save,
    Reset,
    History,
    Options,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parse one line of input
    pub fn parse(line: &str) -> TallyResult<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Command::Empty);
        };

        let command = match name.to_lowercase().as_str() {
            "add" | "a" => {
                let args: Vec<&str> = words.collect();
                let [worker_type, start, end, count] = args.as_slice() else {
                    return Err(invalid_shift_error(&t!("add_usage")));
                };
                let count = count.parse::<u32>().map_err(|_| {
                    invalid_shift_error(&format!("'{}' is not a headcount", count))
                })?;

                Command::Add {
                    worker_type: worker_type.parse()?,
                    start_time: start.to_string(),
                    end_time: end.to_string(),
                    count,
                }
            }
            "list" | "ls" => Command::List,
            "summary" | "sum" => Command::Summary,
            "save" => Command::Save,
            "reset" => Command::Reset,
            "history" | "hist" => Command::History,
            "options" | "opts" => Command::Options,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(Error::Other(
                    t!("unknown_command", command = other).to_string(),
                ))
            }
        };

        Ok(command)
    }
}

/// Result of running a command
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Lines to print
    pub lines: Vec<String>,
    /// The session should end
    pub quit: bool,
}

impl CommandOutcome {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: String) -> Self {
        Self::lines(vec![line])
    }
}

/// Parse and run one line; errors become printable lines
pub fn handle_line(session: &mut ShiftSession, form: &mut ShiftForm, line: &str) -> CommandOutcome {
    let result = Command::parse(line).and_then(|command| execute(session, form, command));

    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!("Command '{}' failed: {:?}", line.trim(), e);
            CommandOutcome::line(t!("error_prefix", error = e).to_string())
        }
    }
}

/// Run a parsed command against the session
pub fn execute(
    session: &mut ShiftSession,
    form: &mut ShiftForm,
    command: Command,
) -> TallyResult<CommandOutcome> {
    let outcome = match command {
        Command::Add {
            worker_type,
            start_time,
            end_time,
            count,
        } => {
            form.worker_type = worker_type;
            form.start_time = start_time;
            form.end_time = end_time;
            form.count = count;

            let shift = match form.submit() {
                Ok(shift) => shift,
                Err(e) => {
                    form.reset();
                    return Err(e);
                }
            };
            let line = t!("shift_added", shift = shift.format()).to_string();
            session.add_shift(shift);
            CommandOutcome::line(line)
        }
        Command::List => {
            let mut lines = vec![t!("added_workers_title").to_string()];
            if session.shifts().is_empty() {
                lines.push(format!("  {}", t!("added_workers_empty")));
            }
            lines.extend(session.shifts().iter().map(|s| format!("  {}", s.format())));
            CommandOutcome::lines(lines)
        }
        Command::Summary => CommandOutcome::lines(session.summary().format_lines()),
        Command::Save => match session.save_daily_record() {
            Ok(record) => {
                CommandOutcome::line(t!("day_saved", record = record.format()).to_string())
            }
            Err(e) => {
                error!("Failed to save daily record: {}", e);
                return Err(e);
            }
        },
        Command::Reset => {
            session.reset_current_day();
            CommandOutcome::line(t!("day_reset").to_string())
        }
        Command::History => {
            let mut lines = vec![t!("history_title").to_string()];
            if session.history().is_empty() {
                lines.push(format!("  {}", t!("history_empty")));
            }
            lines.extend(session.history().iter().map(|r| format!("  {}", r.format())));
            CommandOutcome::lines(lines)
        }
        Command::Options => CommandOutcome::lines(vec![
            t!("options_start", options = start_time_options().join(" ")).to_string(),
            t!("options_end", options = end_time_options().join(" ")).to_string(),
            t!(
                "options_count",
                min = HEADCOUNT_RANGE.start(),
                max = HEADCOUNT_RANGE.end()
            )
            .to_string(),
        ]),
        Command::Help => CommandOutcome::line(t!("help").trim_end().to_string()),
        Command::Quit => CommandOutcome {
            lines: vec![t!("goodbye").to_string()],
            quit: true,
        },
        Command::Empty => CommandOutcome::default(),
    };

    Ok(outcome)
}
