//! # Pane Layout
//!
//! Fixed geometry of the four panes, recomputed whenever the terminal size
//! changes.
//!
//! ```text
//! ┌──────────── events ────────────┐┌──── calendar 34×10 ────┐
//! │                                ││                        │
//! │                                │└────────────────────────┘
//! │                                │┌──── today (optional) ──┐
//! │                                ││                        │
//! └────────────────────────────────┘└────────────────────────┘
//!  status line
//!  controls line
//! ```

use std::fmt;

use ratatui::layout::Rect;

pub const CALENDAR_WIDTH: u16 = 34;
pub const CALENDAR_HEIGHT: u16 = 10;
pub const STATUS_HEIGHT: u16 = 2;
/// Narrowest events pane that still shows a date label.
pub const MIN_EVENTS_WIDTH: u16 = 20;
/// A bordered pane needs one inner row.
pub const MIN_PANE_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::TooSmall {
                width,
                height,
                min_width,
                min_height,
            } => write!(
                f,
                "Terminal too small: {width}x{height} (need at least {min_width}x{min_height})"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub events: Rect,
    pub calendar: Rect,
    pub today: Option<Rect>,
    pub status: Rect,
}

impl PaneLayout {
    pub fn min_size(today_enabled: bool) -> (u16, u16) {
        let min_width = CALENDAR_WIDTH + MIN_EVENTS_WIDTH;
        let mut min_height = CALENDAR_HEIGHT + STATUS_HEIGHT;
        if today_enabled {
            min_height += MIN_PANE_HEIGHT;
        }
        (min_width, min_height)
    }

    /// Splits `area` into panes, or reports that it is too small to draw.
    pub fn compute(area: Rect, today_enabled: bool) -> Result<Self, LayoutError> {
        let (min_width, min_height) = Self::min_size(today_enabled);
        if area.width < min_width || area.height < min_height {
            return Err(LayoutError::TooSmall {
                width: area.width,
                height: area.height,
                min_width,
                min_height,
            });
        }

        let body_height = area.height - STATUS_HEIGHT;
        let side_x = area.x + area.width - CALENDAR_WIDTH;

        let events = Rect::new(area.x, area.y, area.width - CALENDAR_WIDTH, body_height);
        let calendar = Rect::new(side_x, area.y, CALENDAR_WIDTH, CALENDAR_HEIGHT);
        let today = today_enabled.then(|| {
            Rect::new(
                side_x,
                area.y + CALENDAR_HEIGHT,
                CALENDAR_WIDTH,
                body_height - CALENDAR_HEIGHT,
            )
        });
        let status = Rect::new(area.x, area.y + body_height, area.width, STATUS_HEIGHT);

        Ok(Self {
            events,
            calendar,
            today,
            status,
        })
    }

    /// Columns available for today lines inside the pane border.
    pub fn today_text_width(&self) -> usize {
        self.today
            .map(|r| usize::from(r.width.saturating_sub(2)))
            .unwrap_or(0)
    }
}
