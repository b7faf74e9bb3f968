//! # EventList Component
//!
//! The focus day and the days after it, each as a right-aligned date label
//! followed by its events and a separator line. The list runs for as long as
//! the pane is tall, so a quiet week still fills the screen.
//!
//! The row model is built separately from drawing so that scrolling and
//! trimming can be tested without a terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::core::date::Date;
use crate::core::event::EventIndex;
use crate::tui::component::Component;
use crate::tui::components::calendar::{accent, border_style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Label { text: String, focus_day: bool },
    Event { text: String, selected: bool },
    /// Placeholder under a day without events.
    Empty,
    Separator,
}

pub struct EventList<'a> {
    pub focus: Date,
    pub events: &'a EventIndex,
    pub selected: Option<usize>,
    pub active: bool,
}

impl<'a> EventList<'a> {
    pub fn new(focus: Date, events: &'a EventIndex, selected: Option<usize>, active: bool) -> Self {
        Self {
            focus,
            events,
            selected,
            active,
        }
    }

    /// Rows needed to fill `height` lines after skipping `offset`.
    /// Event text is trimmed to `text_width` columns.
    pub fn rows(&self, text_width: usize, offset: usize, height: usize) -> Vec<ListRow> {
        let mut rows = Vec::new();
        let mut day = self.focus;
        let mut first = true;
        while rows.len() < offset + height {
            rows.push(ListRow::Label {
                text: day.label(),
                focus_day: first,
            });
            match self.events.get(&day) {
                Some(events) => {
                    for (i, event) in events.iter().enumerate() {
                        rows.push(ListRow::Event {
                            text: trim_to_width(event.message(), text_width),
                            selected: first && self.selected == Some(i),
                        });
                    }
                }
                None => rows.push(ListRow::Empty),
            }
            rows.push(ListRow::Separator);
            day.add_day();
            first = false;
        }
        rows
    }
}

/// First visible row so the selected event (row `1 + selected`) stays on screen.
pub fn scroll_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(i) => (i + 2).saturating_sub(height),
        None => 0,
    }
}

/// Cuts `text` to at most `max` display columns, ending in `...` when cut.
pub fn trim_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    match max {
        0 => String::new(),
        1 | 2 => ".".to_string(),
        _ => {
            let budget = max - 3;
            let mut used = 0;
            let mut out = String::new();
            for c in text.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > budget {
                    break;
                }
                used += w;
                out.push(c);
            }
            out.push_str("...");
            out
        }
    }
}

impl Component for EventList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(border_style(self.active));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let height = usize::from(inner.height);
        let width = usize::from(inner.width);
        let text_width = width.saturating_sub(2);
        let offset = scroll_offset(self.selected, height);

        let lines: Vec<Line> = self
            .rows(text_width, offset, height)
            .into_iter()
            .skip(offset)
            .take(height)
            .map(|row| match row {
                ListRow::Label { text, focus_day } => {
                    let style = if focus_day {
                        accent().add_modifier(Modifier::BOLD)
                    } else {
                        accent()
                    };
                    Line::from(vec![Span::styled(text, style), Span::raw(" ")]).right_aligned()
                }
                ListRow::Event { text, selected } => {
                    let style = if selected {
                        accent().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![Span::raw(" "), Span::styled(text, style)])
                }
                ListRow::Empty => Line::default(),
                ListRow::Separator => Line::from("─".repeat(width)),
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
