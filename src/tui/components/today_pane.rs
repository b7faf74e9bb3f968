use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::calendar::border_style;

/// Today's reminders, already wrapped to the pane width, scrolled by `scroll` lines.
pub struct TodayPane<'a> {
    pub lines: &'a [String],
    pub scroll: usize,
    pub active: bool,
}

impl<'a> TodayPane<'a> {
    pub fn new(lines: &'a [String], scroll: usize, active: bool) -> Self {
        Self {
            lines,
            scroll,
            active,
        }
    }
}

impl Component for TodayPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text: Vec<&str> = self
            .lines
            .iter()
            .skip(self.scroll)
            .map(String::as_str)
            .collect();
        let paragraph = Paragraph::new(text.join("\n"))
            .block(Block::bordered().border_style(border_style(self.active)));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_lines;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(lines: &[String], scroll: usize) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|f| TodayPane::new(lines, scroll, false).render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_today_pane_shows_lines() {
        let lines = vec!["Todays Reminders:".to_string(), "Dentist".to_string()];
        let rendered = draw(&lines, 0);
        assert_eq!(rendered[1], "│Todays Reminders: │");
        assert_eq!(rendered[2], "│Dentist           │");
    }

    #[test]
    fn test_today_pane_scrolls() {
        let lines: Vec<String> = (0..6).map(|i| format!("line {i}")).collect();
        let rendered = draw(&lines, 4);
        assert!(rendered[1].contains("line 4"));
        assert!(rendered[2].contains("line 5"));
        assert!(!rendered.iter().any(|l| l.contains("line 3")));
    }
}
