//! # Calendar Grid
//!
//! Builds the 6×7 month view model. Weeks start on Monday. Leading cells
//! hold the tail of the previous month, trailing cells complete the last week
//! with the head of the next month, and whatever is left of the 42 cells
//! stays as sentinel cells (`day == 0`).
//!
//! ```text
//!  wk  Mon Tue Wed Thu Fri Sat Sun
//!   9   26  27  28  29   1   2   3     <- leading cells from February
//!  10    4   5   6   7   8   9  10
//!  ..
//!  14   25  26  27  28  29  30  31
//!        0   0   0   0   0   0   0     <- sentinel row, rendered blank
//! ```
//!
//! Week numbers are a running count from January 1st of the focus year, not
//! ISO-8601 weeks.

use crate::core::date::{self, Date, MAX_YEAR, monday_based, weekday};
use crate::core::event::EventIndex;
use crate::core::year::YearStructure;

pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 7;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Day of month, 0 for a sentinel cell.
    pub day: u8,
    pub has_events: bool,
}

impl Cell {
    pub fn is_sentinel(&self) -> bool {
        self.day == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cells: [Cell; GRID_CELLS],
    pub week_numbers: [u32; GRID_ROWS],
    /// Cell showing today's date, if it is on screen.
    pub today: Option<usize>,
    /// Cell showing the focus date.
    pub selected: usize,
    /// Ordinal of the focus date within its year, starting at 1.
    pub day_of_year: u32,
}

impl Grid {
    /// Lays out the month of `focus`.
    ///
    /// `year` must be the structure of `focus.year()`.
    pub fn build(focus: &Date, year: &YearStructure, today: &Date, events: &EventIndex) -> Self {
        debug_assert_eq!(year.year(), focus.year());

        let (y, m) = (focus.year(), focus.month());
        let month_slot = usize::from(m);
        let days_prev = year.days_in(month_slot - 1);
        let days_this = year.days_in(month_slot);

        let wd_start = monday_based(weekday(y, m, 1));
        let wd_end = monday_based(weekday(y, m, days_this));

        // The first and last month of the calendar have no neighbour to take
        // dates from on that side.
        let prev = (y > 1 || m > 1).then(|| date::subtract_month(y, m));
        let next = (y < MAX_YEAR || m < 12).then(|| date::add_month(y, m));

        let leading = (days_prev - wd_start + 1..=days_prev).map(|d| (prev, d));
        let current = (1..=days_this).map(|d| (Some((y, m)), d));
        let trailing = (1..=6 - wd_end).map(|d| (next, d));

        let mut grid = Grid {
            cells: [Cell::default(); GRID_CELLS],
            week_numbers: [0; GRID_ROWS],
            today: None,
            selected: 0,
            day_of_year: 0,
        };

        for (i, (month_of, day)) in leading.chain(current).chain(trailing).enumerate().take(GRID_CELLS) {
            let mut cell = Cell {
                day,
                has_events: false,
            };
            if let Some((cy, cm)) = month_of {
                cell.has_events = events.contains(cy, cm, day);
                if today.is(cy, cm, day) {
                    grid.today = Some(i);
                }
                if (cy, cm) == (y, m) && day == focus.day() {
                    grid.selected = i;
                }
            }
            grid.cells[i] = cell;
        }

        let days_before = year.days_before(m);
        let first_week = 1 + days_before / 7;
        for (row, week) in grid.week_numbers.iter_mut().enumerate() {
            *week = first_week + row as u32;
        }
        grid.day_of_year = days_before + u32::from(focus.day());
        grid
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.cells[row * GRID_COLS..(row + 1) * GRID_COLS]
    }

    /// A row with any sentinel cell renders empty, week number included.
    pub fn row_is_blank(&self, row: usize) -> bool {
        self.row(row).iter().any(Cell::is_sentinel)
    }
}
