//! `remind` subprocess implementation of [`ReminderSource`].

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use super::provider::{CollaboratorError, ReminderSource};
use super::types::{OutputFormat, RawEvent, parse_json_events, parse_simple_events, today_lines};
use crate::core::date::Date;

pub const DEFAULT_REMIND_BINARY: &str = "remind";

pub struct RemindCommand {
    binary: String,
    source: PathBuf,
    format: OutputFormat,
}

impl RemindCommand {
    pub fn new(binary: impl Into<String>, source: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            binary: binary.into(),
            source: source.into(),
            format,
        }
    }

    /// Runs remind with `args` and returns its stdout. Failure to start,
    /// non-zero exit and empty output are all errors.
    fn run(&self, args: &[String]) -> Result<String, CollaboratorError> {
        debug!("Running {} {:?}", self.binary, args);
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|source| CollaboratorError::Spawn {
                program: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CollaboratorError::Exit {
                program: self.binary.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        if output.stdout.is_empty() {
            return Err(CollaboratorError::EmptyOutput {
                program: self.binary.clone(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ReminderSource for RemindCommand {
    fn name(&self) -> &str {
        &self.binary
    }

    fn events(&self, year: i32, month: u8, span: u8) -> Result<Vec<RawEvent>, CollaboratorError> {
        let mode = match self.format {
            OutputFormat::Json => format!("-ppp{span}"),
            OutputFormat::Simple => format!("-s{span}"),
        };
        let args = [
            mode,
            "-g".to_string(),
            self.source.display().to_string(),
            format!("{year:04}-{month:02}-01"),
        ];
        let output = self.run(&args)?;
        match self.format {
            OutputFormat::Json => parse_json_events(&output),
            OutputFormat::Simple => parse_simple_events(&output),
        }
    }

    fn today(&self, date: &Date, max_line_width: usize) -> Result<Vec<String>, CollaboratorError> {
        let args = [self.source.display().to_string(), date.to_string()];
        let output = self.run(&args)?;
        Ok(today_lines(&output, max_line_width))
    }
}
