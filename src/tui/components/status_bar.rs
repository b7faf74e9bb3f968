//! # StatusBar Component
//!
//! Two lines at the bottom of the screen: the status message drawn over a
//! horizontal rule, and the key bindings below it.
//!
//! ```text
//! ─Unbound key: 'x'──────────────────────────────────
//!  q:Quit TAB:ChgWin  e:Edit  h:Left  j:Down  k:Up  l:Right  J/K:Month
//! ```
//!
//! Purely presentational; the message comes from `App::status_message` and
//! is cut to the terminal width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::event_list::trim_to_width;

pub const CONTROLS: &str = "q:Quit TAB:ChgWin  e:Edit  h:Left  j:Down  k:Up  l:Right  J/K:Month";

pub struct StatusBar<'a> {
    pub message: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

fn status_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = usize::from(area.width);
        let message = trim_to_width(self.message, width.saturating_sub(2));
        let rule = width.saturating_sub(message.width() + 1);

        let status = Line::from(vec![
            Span::raw("─"),
            Span::raw(message),
            Span::raw("─".repeat(rule)),
        ])
        .style(status_style());
        let controls = Line::from(format!(" {CONTROLS}"));

        frame.render_widget(Paragraph::new(vec![status, controls]), area);
    }
}
