use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

use super::provider::CollaboratorError;

/// Where a reminder was defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    pub file: PathBuf,
    pub line: u32,
}

/// A reminder as reported by the engine, before date validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub message: String,
    pub locator: Option<SourceLocator>,
}

impl RawEvent {
    pub fn new(year: i32, month: u32, day: u32, message: impl Into<String>) -> Self {
        Self {
            year,
            month,
            day,
            message: message.into(),
            locator: None,
        }
    }

    pub fn with_locator(mut self, file: impl Into<PathBuf>, line: u32) -> Self {
        self.locator = Some(SourceLocator {
            file: file.into(),
            line,
        });
        self
    }
}

/// Which of remind's machine-readable formats to request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `remind -ppp`: JSON, includes file and line of each reminder.
    #[default]
    Json,
    /// `remind -s`: one line per reminder, dates and bodies only.
    Simple,
}

// ============================================================================
// JSON format (remind -ppp)
// ============================================================================

#[derive(Debug, Deserialize)]
struct MonthDescriptor {
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    date: String,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    lineno: Option<u32>,
    #[serde(default)]
    body: String,
}

fn parse_date(text: &str, format: &str) -> Result<NaiveDate, CollaboratorError> {
    NaiveDate::parse_from_str(text, format)
        .map_err(|e| CollaboratorError::Parse(format!("could not parse reminder date {text}: {e}")))
}

/// Parses `remind -ppp` output: an array of month descriptors, each with its
/// `entries`. Order is preserved.
pub fn parse_json_events(output: &str) -> Result<Vec<RawEvent>, CollaboratorError> {
    let months: Vec<MonthDescriptor> =
        serde_json::from_str(output).map_err(|e| CollaboratorError::Parse(e.to_string()))?;

    let mut events = Vec::new();
    for entry in months.into_iter().flat_map(|m| m.entries) {
        let date = parse_date(&entry.date, "%Y-%m-%d")?;
        let mut event = RawEvent::new(date.year(), date.month(), date.day(), entry.body);
        if let (Some(file), Some(line)) = (entry.filename, entry.lineno) {
            event = event.with_locator(file, line);
        }
        events.push(event);
    }
    Ok(events)
}

// ============================================================================
// Simple format (remind -s)
// ============================================================================

/// Parses one line of `remind -s` output.
///
/// Fields are separated by single spaces:
/// `date passthru tags duration time body`, with the date as `YYYY/MM/DD`.
/// Only date and body are kept.
pub fn parse_simple_line(line: &str) -> Result<RawEvent, CollaboratorError> {
    let invalid = || CollaboratorError::Parse(format!("invalid reminder line: {line}"));

    let (date_text, mut rest) = line.split_once(' ').ok_or_else(invalid)?;
    let date = parse_date(date_text, "%Y/%m/%d")?;

    // passthru, tags, duration, time
    for _ in 0..4 {
        rest = rest.split_once(' ').ok_or_else(invalid)?.1;
    }
    Ok(RawEvent::new(date.year(), date.month(), date.day(), rest))
}

pub fn parse_simple_events(output: &str) -> Result<Vec<RawEvent>, CollaboratorError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_simple_line)
        .collect()
}

// ============================================================================
// Today output
// ============================================================================

pub const TODAY_HEADER: &str = "Todays Reminders:";

/// Turns `remind <file> <date>` output into display lines.
///
/// The first line (remind's long "Reminders for ..." banner) is replaced by
/// [`TODAY_HEADER`]; every other line is hard-wrapped to `max_line_width`.
pub fn today_lines(output: &str, max_line_width: usize) -> Vec<String> {
    let mut lines = vec![TODAY_HEADER.to_string()];
    for line in output.lines().skip(1) {
        lines.extend(hard_wrap(line, max_line_width));
    }
    lines
}

/// Cuts `line` into pieces no wider than `width` display columns.
/// An empty line stays one empty line. A width of 0 disables wrapping.
pub fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() || pieces.is_empty() {
        pieces.push(current);
    }
    pieces
}
