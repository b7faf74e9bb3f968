//! # Application State
//!
//! Everything the event loop owns, bundled in one value. No terminal types
//! live here; presentation-only state stays in the `tui` module.
//!
//! ```text
//! App
//! ├── focus: Date                  // selected day, drives the month shown
//! ├── today: Date                  // fixed at startup
//! ├── nav: NavigationState         // active pane, event selection, scroll
//! ├── year: YearStructure          // rebuilt when the focus year changes
//! ├── events: EventIndex           // three months around the focus month
//! ├── today_lines: Vec<String>     // today pane content
//! ├── status_message: String       // status bar text, cleared per key
//! ├── events_dirty / today_dirty   // pending collaborator refreshes
//! └── today_pane_height: u16       // last laid-out height, for scroll clamping
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! plus the refresh helpers below that the loop calls for pending effects.

use std::time::Instant;

use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::core::date::Date;
use crate::core::event::{Event, EventIndex};
use crate::core::grid::Grid;
use crate::core::year::YearStructure;
use crate::remind::ReminderSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Calendar,
    EventsList,
    TodayPane,
}

impl Pane {
    pub fn label(&self) -> &'static str {
        match self {
            Pane::Calendar => "Calendar",
            Pane::EventsList => "Events",
            Pane::TodayPane => "Today",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Pane,
    /// Selected event of the focus day. Only set while the events list is active.
    pub selected_event: Option<usize>,
    pub today_scroll: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Pane::Calendar,
            selected_event: None,
            today_scroll: 0,
        }
    }
}

pub struct App {
    pub focus: Date,
    pub today: Date,
    pub nav: NavigationState,
    pub year: YearStructure,
    pub events: EventIndex,
    pub today_lines: Vec<String>,
    pub status_message: String,
    pub today_pane_enabled: bool,
    pub today_pane_height: u16,
    /// Show how long each reminder refresh took.
    pub debug_timing: bool,
    pub events_dirty: bool,
    pub today_dirty: bool,
    shown_month: (i32, u8),
}

impl App {
    pub fn new(today: Date, today_pane_enabled: bool) -> Self {
        Self {
            focus: today,
            today,
            nav: NavigationState::default(),
            year: YearStructure::generate(today.year()),
            events: EventIndex::new(),
            today_lines: Vec::new(),
            status_message: String::new(),
            today_pane_enabled,
            today_pane_height: 0,
            debug_timing: false,
            events_dirty: true,
            today_dirty: today_pane_enabled,
            shown_month: (today.year(), today.month()),
        }
    }

    pub fn from_config(today: Date, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(today, config.today_pane);
        app.debug_timing = config.debug_timing;
        app
    }

    /// Brings the year table and refresh flags in line with the focus date.
    /// Returns true if the focus moved to another month.
    pub fn sync_focus(&mut self) -> bool {
        if self.year.year() != self.focus.year() {
            self.year = YearStructure::generate(self.focus.year());
        }
        let month = (self.focus.year(), self.focus.month());
        if month == self.shown_month {
            return false;
        }
        self.shown_month = month;
        self.events_dirty = true;
        true
    }

    pub fn grid(&self) -> Grid {
        Grid::build(&self.focus, &self.year, &self.today, &self.events)
    }

    pub fn focus_events(&self) -> &[Event] {
        self.events.get(&self.focus).unwrap_or_default()
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.nav
            .selected_event
            .and_then(|i| self.focus_events().get(i))
    }

    /// Largest scroll offset that still fills the today pane.
    pub fn max_today_scroll(&self) -> usize {
        (self.today_lines.len() + 2).saturating_sub(usize::from(self.today_pane_height))
    }

    /// Adds `message` to the status bar after whatever the current loop
    /// iteration already reported there.
    pub fn push_status(&mut self, message: String) {
        if self.status_message.is_empty() {
            self.status_message = message;
        } else if !self.status_message.contains(&message) {
            self.status_message.push_str(" | ");
            self.status_message.push_str(&message);
        }
    }

    /// Reloads the event index for the focus month.
    ///
    /// A failing reminder engine does not end the session: the index stays
    /// empty and the error goes to the status bar until the next refresh.
    pub fn refresh_events(&mut self, source: &dyn ReminderSource) {
        let start = Instant::now();
        let result = self
            .events
            .refresh(source, self.focus.year(), self.focus.month());
        self.events_dirty = false;

        match result {
            Ok(()) => {
                let elapsed = start.elapsed().as_secs_f64();
                info!(
                    "Loaded events for {}-{} in {:.3}s",
                    self.focus.year(),
                    self.focus.month(),
                    elapsed
                );
                if self.debug_timing {
                    self.push_status(format!("{} took {:.3}s", source.name(), elapsed));
                }
            }
            Err(e) => {
                warn!("Event refresh failed: {}", e);
                self.push_status(format!("Events unavailable: {e}"));
            }
        }
    }

    /// Reloads the today pane content, wrapped to `width` columns.
    pub fn refresh_today(&mut self, source: &dyn ReminderSource, width: usize) {
        self.today_dirty = false;
        if !self.today_pane_enabled {
            return;
        }
        match source.today(&self.today, width) {
            Ok(lines) => {
                info!("Loaded {} today lines", lines.len());
                self.today_lines = lines;
            }
            Err(e) => {
                warn!("Today refresh failed: {}", e);
                self.today_lines.clear();
                self.push_status(format!("Today unavailable: {e}"));
            }
        }
        self.nav.today_scroll = self.nav.today_scroll.min(self.max_today_scroll());
    }
}
