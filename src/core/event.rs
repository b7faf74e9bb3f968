//! # Events
//!
//! The event index maps canonical date keys (`2024-3-9`) to the reminders of
//! that day, in the order the reminder engine reported them. It always covers
//! three months: the one before the focus month, the focus month, and the one
//! after.

use std::collections::HashMap;

use log::debug;

use crate::core::date::{self, Date};
use crate::remind::{CollaboratorError, RawEvent, ReminderSource, SourceLocator};

/// Months covered by one refresh.
pub const MONTH_SPAN: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    date: Date,
    message: String,
    locator: Option<SourceLocator>,
}

impl Event {
    pub fn new(date: Date, message: impl Into<String>) -> Self {
        Self {
            date,
            message: message.into(),
            locator: None,
        }
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locator(&self) -> Option<&SourceLocator> {
        self.locator.as_ref()
    }
}

impl TryFrom<RawEvent> for Event {
    type Error = CollaboratorError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let date = Date::new(raw.year, raw.month, raw.day)?;
        Ok(Self {
            date,
            message: raw.message,
            locator: raw.locator,
        })
    }
}

#[derive(Debug, Default)]
pub struct EventIndex {
    entries: HashMap<String, Vec<Event>>,
}

impl EventIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the index and reloads the three months around the focus month.
    ///
    /// Every record is validated before anything is inserted, so on error the
    /// index is left empty rather than partially filled.
    pub fn refresh(
        &mut self,
        source: &dyn ReminderSource,
        focus_year: i32,
        focus_month: u8,
    ) -> Result<(), CollaboratorError> {
        self.entries.clear();
        let (year, month) = date::subtract_month(focus_year, focus_month);
        let events = source
            .events(year, month, MONTH_SPAN)?
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Indexed {} events from {} starting {}-{}",
            events.len(),
            source.name(),
            year,
            month
        );
        for event in events {
            self.insert(event);
        }
        Ok(())
    }

    pub fn insert(&mut self, event: Event) {
        self.entries.entry(event.date.key()).or_default().push(event);
    }

    pub fn get(&self, date: &Date) -> Option<&[Event]> {
        self.get_key(&date.key())
    }

    pub fn get_key(&self, key: &str) -> Option<&[Event]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, year: i32, month: u8, day: u8) -> bool {
        self.entries.contains_key(&date::date_key(year, month, day))
    }

    /// Number of events on `date`.
    pub fn count(&self, date: &Date) -> usize {
        self.get(date).map_or(0, <[Event]>::len)
    }

    /// Number of distinct days with events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
