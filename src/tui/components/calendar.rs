//! # Calendar Component
//!
//! Draws the month grid into a fixed 34×10 box.
//!
//! ```text
//! ┌──────────────────────────(# 75)┐
//! │         March 2024             │
//! │    Mon Tue Wed Thu Fri Sat Sun │
//! │  9  26  27  28  29   1   2   3 │
//! │ 11  11  12  13  14 [15] 16  17 │
//! └────────────────────────────────┘
//! ```
//!
//! Days with events are cyan, today is yellow, the focus day is bracketed.
//! Rows holding sentinel cells stay empty, week number included.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Block;

use crate::core::date::{Date, month_name};
use crate::core::grid::{GRID_COLS, GRID_ROWS, Grid};
use crate::tui::component::Component;
use crate::tui::layout::{CALENDAR_HEIGHT, CALENDAR_WIDTH};

pub const WEEKDAYS: &str = "Mon Tue Wed Thu Fri Sat Sun";

/// Column of the first day cell, after border and week number.
const DAYS_X: u16 = 5;
/// Row of the first week, after border, label and weekday header.
const WEEKS_Y: u16 = 3;
const CELL_WIDTH: u16 = 4;

pub struct Calendar<'a> {
    pub grid: &'a Grid,
    pub label: String,
    pub active: bool,
}

impl<'a> Calendar<'a> {
    pub fn new(grid: &'a Grid, focus: &Date, active: bool) -> Self {
        Self {
            grid,
            label: format!("{} {}", month_name(focus.month()), focus.year()),
            active,
        }
    }
}

pub(crate) fn accent() -> Style {
    Style::default().fg(Color::Red)
}

pub(crate) fn border_style(active: bool) -> Style {
    if active { accent() } else { Style::default() }
}

impl Component for Calendar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width < CALENDAR_WIDTH || area.height < CALENDAR_HEIGHT {
            return;
        }
        let area = Rect::new(area.x, area.y, CALENDAR_WIDTH, CALENDAR_HEIGHT);

        let day_label = Line::from(format!("(#{:>3})", self.grid.day_of_year))
            .style(accent())
            .right_aligned();
        let block = Block::bordered()
            .border_style(border_style(self.active))
            .title_top(day_label);
        frame.render_widget(block, area);

        let buf = frame.buffer_mut();
        let x0 = area.x + DAYS_X;
        let header_width = WEEKDAYS.len() as u16;
        let label_x = x0 + header_width.saturating_sub(self.label.len() as u16) / 2;
        buf.set_string(label_x, area.y + 1, &self.label, accent());
        buf.set_string(x0, area.y + 2, WEEKDAYS, accent());

        for row in 0..GRID_ROWS {
            if self.grid.row_is_blank(row) {
                continue;
            }
            let y = area.y + WEEKS_Y + row as u16;
            let week = format!(" {:>2} ", self.grid.week_numbers[row]);
            buf.set_string(area.x + 1, y, week, accent());

            for (col, cell) in self.grid.row(row).iter().enumerate() {
                let index = row * GRID_COLS + col;
                let style = if self.grid.today == Some(index) {
                    Style::default().fg(Color::Yellow)
                } else if cell.has_events {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                let x = x0 + col as u16 * CELL_WIDTH;
                buf.set_string(x, y, format!(" {:>2} ", cell.day), style);
            }
        }

        let row = (self.grid.selected / GRID_COLS) as u16;
        let col = (self.grid.selected % GRID_COLS) as u16;
        let y = area.y + WEEKS_Y + row;
        let x = x0 + col * CELL_WIDTH;
        let bracket = accent().add_modifier(Modifier::BOLD);
        buf.set_string(x, y, "[", bracket);
        buf.set_string(x + CELL_WIDTH - 1, y, "]", bracket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{Event, EventIndex};
    use crate::core::year::YearStructure;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::new(y, m, d).unwrap()
    }

    fn render(focus: Date, today: Date, events: &EventIndex, active: bool) -> Terminal<TestBackend> {
        let grid = Grid::build(&focus, &YearStructure::generate(focus.year()), &today, events);
        let mut terminal = Terminal::new(TestBackend::new(34, 10)).unwrap();
        terminal
            .draw(|f| Calendar::new(&grid, &focus, active).render(f, f.area()))
            .unwrap();
        terminal
    }

    #[test]
    fn test_calendar_march_2024() {
        let terminal = render(date(2024, 3, 15), date(2000, 1, 1), &EventIndex::new(), false);
        let lines = buffer_lines(terminal.backend().buffer());

        assert!(lines[0].contains("(# 75)"));
        assert!(lines[1].contains("March 2024"));
        assert!(lines[2].contains(WEEKDAYS));
        assert_eq!(lines[3], "│  9  26  27  28  29   1   2   3 │");
        assert_eq!(lines[5], "│ 11  11  12  13  14 [15] 16  17 │");
        assert_eq!(lines[7], "│ 13  25  26  27  28  29  30  31 │");
        assert_eq!(lines[8], format!("│{}│", " ".repeat(32)));
    }

    #[test]
    fn test_calendar_highlights() {
        let mut events = EventIndex::new();
        events.insert(Event::new(date(2024, 3, 10), "Birthday"));
        let terminal = render(date(2024, 3, 15), date(2024, 3, 15), &events, true);
        let buffer = terminal.backend().buffer();

        // March 10th sits in the last column of the second week.
        assert_eq!(buffer[(30, 4)].fg, Color::Cyan);
        // Today is the focus day, inside the brackets.
        assert_eq!(buffer[(22, 5)].fg, Color::Yellow);
        assert_eq!(buffer[(21, 5)].symbol(), "[");
        assert!(buffer[(21, 5)].modifier.contains(Modifier::BOLD));
        // Active pane draws a red border.
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }

    #[test]
    fn test_calendar_too_small_area_draws_nothing() {
        let focus = date(2024, 3, 15);
        let grid = Grid::build(&focus, &YearStructure::generate(2024), &focus, &EventIndex::new());
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|f| Calendar::new(&grid, &focus, false).render(f, f.area()))
            .unwrap();
        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines.iter().all(|l| l.trim().is_empty()));
    }
}
