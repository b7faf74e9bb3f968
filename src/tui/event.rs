use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Left,
    Right,
    Up,
    Down,
    MonthUp,
    MonthDown,
    CyclePane,
    Edit,
    Resize,
    Unbound(String),
}

impl TuiEvent {
    /// The core action this event stands for. Resize is handled by the loop.
    pub fn action(self) -> Option<Action> {
        Some(match self {
            TuiEvent::Quit => Action::Quit,
            TuiEvent::Left => Action::Left,
            TuiEvent::Right => Action::Right,
            TuiEvent::Up => Action::Up,
            TuiEvent::Down => Action::Down,
            TuiEvent::MonthUp => Action::PrevMonth,
            TuiEvent::MonthDown => Action::NextMonth,
            TuiEvent::CyclePane => Action::CyclePane,
            TuiEvent::Edit => Action::Edit,
            TuiEvent::Unbound(key) => Action::Unbound(key),
            TuiEvent::Resize => return None,
        })
    }
}

/// Maps a key press to an event. Vim keys and arrows move; `J`/`K` and
/// PageDown/PageUp change the month.
pub fn map_key(key: KeyEvent) -> Option<TuiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        return Some(TuiEvent::Quit);
    }
    // Letter bindings only fire without Ctrl/Alt/Super.
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    let event = match key.code {
        KeyCode::Esc => TuiEvent::Quit,
        KeyCode::Left => TuiEvent::Left,
        KeyCode::Right => TuiEvent::Right,
        KeyCode::Up => TuiEvent::Up,
        KeyCode::Down => TuiEvent::Down,
        KeyCode::PageUp => TuiEvent::MonthUp,
        KeyCode::PageDown => TuiEvent::MonthDown,
        KeyCode::Tab => TuiEvent::CyclePane,
        KeyCode::Char(c) if !plain => TuiEvent::Unbound(describe_modified(key.modifiers, c)),
        KeyCode::Char('q') => TuiEvent::Quit,
        KeyCode::Char('h') => TuiEvent::Left,
        KeyCode::Char('l') => TuiEvent::Right,
        KeyCode::Char('k') => TuiEvent::Up,
        KeyCode::Char('j') => TuiEvent::Down,
        KeyCode::Char('K') => TuiEvent::MonthUp,
        KeyCode::Char('J') => TuiEvent::MonthDown,
        KeyCode::Char('e') => TuiEvent::Edit,
        KeyCode::Char(c) => TuiEvent::Unbound(c.to_string()),
        _ => return None,
    };
    Some(event)
}

/// Emacs style name such as `C-e` or `M-j` for the status bar.
fn describe_modified(modifiers: KeyModifiers, c: char) -> String {
    let mut name = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("C-");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        name.push_str("M-");
    }
    if modifiers.contains(KeyModifiers::SUPER) {
        name.push_str("s-");
    }
    name.push(c);
    name
}

/// Waits up to `timeout` for one event.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            Ok(map_key(key_event))
        }
        Event::Resize(cols, rows) => {
            log::debug!("Resize event: {}x{}", cols, rows);
            Ok(Some(TuiEvent::Resize))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(map_key(press(KeyCode::Char('h'))), Some(TuiEvent::Left));
        assert_eq!(map_key(press(KeyCode::Char('j'))), Some(TuiEvent::Down));
        assert_eq!(map_key(press(KeyCode::Char('k'))), Some(TuiEvent::Up));
        assert_eq!(map_key(press(KeyCode::Char('l'))), Some(TuiEvent::Right));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT)),
            Some(TuiEvent::MonthDown)
        );
        assert_eq!(map_key(press(KeyCode::Char('K'))), Some(TuiEvent::MonthUp));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Tab)), Some(TuiEvent::CyclePane));
        assert_eq!(map_key(press(KeyCode::Char('e'))), Some(TuiEvent::Edit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(
            map_key(press(KeyCode::Char('z'))),
            Some(TuiEvent::Unbound("z".to_string()))
        );
        assert_eq!(map_key(press(KeyCode::F(5))), None);
    }

    #[test]
    fn test_modified_letters_are_unbound() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);

        assert_eq!(map_key(ctrl('h')), Some(TuiEvent::Unbound("C-h".to_string())));
        assert_eq!(map_key(ctrl('e')), Some(TuiEvent::Unbound("C-e".to_string())));
        assert_eq!(map_key(alt('j')), Some(TuiEvent::Unbound("M-j".to_string())));
        assert_eq!(
            map_key(KeyEvent::new(
                KeyCode::Char('K'),
                KeyModifiers::SHIFT | KeyModifiers::ALT
            )),
            Some(TuiEvent::Unbound("M-K".to_string()))
        );
        // Ctrl-C still quits, arrows keep working under modifiers.
        assert_eq!(map_key(ctrl('c')), Some(TuiEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL)),
            Some(TuiEvent::Down)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Char('j'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_event_to_action() {
        assert_eq!(TuiEvent::MonthDown.action(), Some(Action::NextMonth));
        assert_eq!(TuiEvent::Resize.action(), None);
    }
}
