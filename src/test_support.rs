//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;

use ratatui::buffer::Buffer;

use crate::core::date::Date;
use crate::core::state::App;
use crate::remind::{CollaboratorError, RawEvent, ReminderSource};

/// An in-memory reminder source that records what it was asked for.
#[derive(Default)]
pub struct StubSource {
    events: Vec<RawEvent>,
    today: Vec<String>,
    fail: bool,
    requests: RefCell<Vec<(i32, u8, u8)>>,
}

impl StubSource {
    pub fn with_events(events: Vec<RawEvent>) -> Self {
        Self {
            events,
            ..Default::default()
        }
    }

    /// A source whose every call fails like a missing `remind` binary would.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_today(mut self, lines: Vec<String>) -> Self {
        self.today = lines;
        self
    }

    pub fn requests(&self) -> Vec<(i32, u8, u8)> {
        self.requests.borrow().clone()
    }

    fn failure(&self) -> CollaboratorError {
        CollaboratorError::EmptyOutput {
            program: self.name().to_string(),
        }
    }
}

impl ReminderSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    fn events(&self, year: i32, month: u8, span: u8) -> Result<Vec<RawEvent>, CollaboratorError> {
        self.requests.borrow_mut().push((year, month, span));
        if self.fail {
            return Err(self.failure());
        }
        Ok(self.events.clone())
    }

    fn today(&self, _date: &Date, _max_line_width: usize) -> Result<Vec<String>, CollaboratorError> {
        if self.fail {
            return Err(self.failure());
        }
        Ok(self.today.clone())
    }
}

/// Creates a test App focused on 2024-03-15 with the today pane disabled.
pub fn test_app() -> App {
    App::new(Date::new(2024, 3, 15).unwrap(), false)
}

/// Rows of a rendered buffer as plain strings, styles dropped.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}
