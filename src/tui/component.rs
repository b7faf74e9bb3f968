use ratatui::Frame;
use ratatui::layout::Rect;

/// A pane of the calendar screen.
///
/// Components receive their data as struct fields (props) and draw it into
/// the `Rect` they are given. `render` takes `&mut self` so a component may
/// keep presentation caches, matching ratatui's `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
