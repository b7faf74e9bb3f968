//! # TUI Components
//!
//! One file per pane. Every component is a short-lived props struct built
//! from `App` each frame and drawn through the [`Component`] trait.
//!
//! ```text
//! components/
//! ├── calendar.rs    (month grid, fixed 34×10)
//! ├── event_list.rs  (focus day and following days)
//! ├── today_pane.rs  (wrapped today lines, scrollable)
//! └── status_bar.rs  (status message and key bindings)
//! ```
//!
//! Components never touch `App` directly. The caller picks the fields it
//! needs, which keeps every component testable with a `TestBackend` and a
//! handful of literals.
//!
//! [`Component`]: crate::tui::component::Component

pub mod calendar;
pub mod event_list;
pub mod status_bar;
pub mod today_pane;

pub use calendar::Calendar;
pub use event_list::EventList;
pub use status_bar::StatusBar;
pub use today_pane::TodayPane;
