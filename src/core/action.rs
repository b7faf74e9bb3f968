//! # Actions
//!
//! Every key the user presses becomes an `Action`. `update()` applies it to
//! the `App` and returns an `Effect` describing the I/O the event loop has to
//! perform next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! What an action means depends on the active pane:
//!
//! ```text
//!              Calendar        EventsList            TodayPane
//! Left/Right   -/+ 1 day       -                     -
//! Up/Down      -/+ 1 week      previous/next event   scroll
//! Prev/Next    -/+ 1 month     -                     -
//! ```
//!
//! `CyclePane` walks Calendar → EventsList → TodayPane (if enabled) → Calendar.

use std::path::PathBuf;

use crate::core::state::{App, Pane};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    PrevMonth,
    NextMonth,
    CyclePane,
    Edit,
    Quit,
    /// A key with no binding; reported in the status bar.
    Unbound(String),
}

/// File and line to open in the editor. `None` means the reminder source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditTarget {
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// The focus month changed; the event index must be reloaded.
    RefreshEvents,
    /// Suspend the UI, run the editor, then reload events and today lines.
    OpenEditor(EditTarget),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    app.status_message.clear();

    let effect = match action {
        Action::Quit => Effect::Quit,
        Action::Edit => Effect::OpenEditor(edit_target(app)),
        Action::CyclePane => {
            cycle_pane(app);
            app.status_message = format!("Switched to {}", app.nav.active.label());
            Effect::None
        }
        Action::Unbound(key) => {
            app.status_message = format!("Unbound key: '{key}'");
            Effect::None
        }
        movement => {
            match app.nav.active {
                Pane::Calendar => move_calendar(app, &movement),
                Pane::EventsList => move_events_list(app, &movement),
                Pane::TodayPane => scroll_today(app, &movement),
            }
            if app.sync_focus() {
                Effect::RefreshEvents
            } else {
                Effect::None
            }
        }
    };

    normalize_selection(app);
    effect
}

fn cycle_pane(app: &mut App) {
    app.nav.active = match app.nav.active {
        Pane::Calendar => Pane::EventsList,
        Pane::EventsList if app.today_pane_enabled => Pane::TodayPane,
        Pane::EventsList | Pane::TodayPane => Pane::Calendar,
    };
}

/// The events list always has a selection while active and never otherwise.
fn normalize_selection(app: &mut App) {
    if app.nav.active != Pane::EventsList {
        app.nav.selected_event = None;
    } else if app.nav.selected_event.is_none() {
        app.nav.selected_event = Some(0);
    }
}

fn move_calendar(app: &mut App, action: &Action) {
    match action {
        Action::Left => app.focus.subtract_day(),
        Action::Right => app.focus.add_day(),
        Action::Up => app.focus.subtract_week(),
        Action::Down => app.focus.add_week(),
        Action::PrevMonth => app.focus.subtract_month(),
        Action::NextMonth => app.focus.add_month(),
        _ => {}
    }
}

fn move_events_list(app: &mut App, action: &Action) {
    match action {
        Action::Down => {
            let count = app.events.count(&app.focus);
            let next = app.nav.selected_event.map_or(0, |i| i + 1);
            if next >= count {
                app.nav.selected_event = Some(0);
                app.focus.add_day();
            } else {
                app.nav.selected_event = Some(next);
            }
        }
        Action::Up => match app.nav.selected_event {
            Some(i) if i > 0 => app.nav.selected_event = Some(i - 1),
            _ => {
                app.focus.subtract_day();
                app.nav.selected_event = app.events.count(&app.focus).checked_sub(1);
            }
        },
        _ => {}
    }
}

fn scroll_today(app: &mut App, action: &Action) {
    match action {
        Action::Down => {
            app.nav.today_scroll = (app.nav.today_scroll + 1).min(app.max_today_scroll());
        }
        Action::Up => {
            app.nav.today_scroll = app.nav.today_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn edit_target(app: &App) -> EditTarget {
    match app.selected_event().and_then(|e| e.locator()) {
        Some(locator) => EditTarget {
            file: Some(locator.file.clone()),
            line: Some(locator.line),
        },
        None => EditTarget::default(),
    }
}
