use std::fmt;

use super::types::RawEvent;
use crate::core::date::{Date, DateError};

/// Errors raised by the external collaborators (reminder engine, editor).
///
/// None of these end the session: the event loop shows them in the status
/// bar and tries again on the next refresh.
#[derive(Debug)]
pub enum CollaboratorError {
    /// The program could not be started at all (not installed, not executable).
    Spawn { program: String, source: std::io::Error },
    /// The program ran but exited unsuccessfully.
    Exit { program: String, status: Option<i32>, stderr: String },
    /// The program exited successfully without printing anything.
    EmptyOutput { program: String },
    /// The output did not have the expected shape.
    Parse(String),
    /// A reported reminder falls on a date that does not exist.
    InvalidEvent(DateError),
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Spawn { program, source } => {
                write!(f, "could not run {program}: {source}")
            }
            CollaboratorError::Exit {
                program,
                status,
                stderr,
            } => {
                let status = status.map_or_else(|| "signal".to_string(), |s| s.to_string());
                if stderr.trim().is_empty() {
                    write!(f, "{program} failed (exit {status})")
                } else {
                    write!(f, "{program} failed (exit {status}): {}", stderr.trim())
                }
            }
            CollaboratorError::EmptyOutput { program } => {
                write!(f, "{program} did not return any output")
            }
            CollaboratorError::Parse(msg) => write!(f, "parse error: {msg}"),
            CollaboratorError::InvalidEvent(e) => write!(f, "reminder with {e}"),
        }
    }
}

impl std::error::Error for CollaboratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollaboratorError::Spawn { source, .. } => Some(source),
            CollaboratorError::InvalidEvent(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DateError> for CollaboratorError {
    fn from(e: DateError) -> Self {
        CollaboratorError::InvalidEvent(e)
    }
}

/// The engine that evaluates reminder rules into concrete dated entries.
///
/// Calls are synchronous; the UI stalls for their duration.
pub trait ReminderSource {
    /// Returns the name of the source, for log lines.
    fn name(&self) -> &str;

    /// All reminders of `span` months starting at `year`-`month`, in the
    /// order the engine reports them.
    fn events(&self, year: i32, month: u8, span: u8) -> Result<Vec<RawEvent>, CollaboratorError>;

    /// The engine's own rendering of `date`'s reminders, hard-wrapped so no
    /// line is wider than `max_line_width` columns.
    fn today(&self, date: &Date, max_line_width: usize) -> Result<Vec<String>, CollaboratorError>;
}
