//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, draws the panes and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! resize flag set? → recompute pane sizes, reload today lines
//! pending refresh? → ask `remind` for events / today lines
//! draw
//! wait up to poll_interval_ms for one key
//! update(app, action) → Effect
//! ```
//!
//! The bounded wait lets a resize that arrives as a bare SIGWINCH be picked up
//! without a key press. Reminder refreshes run on the loop thread and block it
//! while `remind` runs.

mod component;
mod components;
mod event;
pub mod layout;
pub mod signal;
mod ui;

use std::io::{self, stdout};
use std::path::Path;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use log::{debug, info, warn};
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::date::Date;
use crate::core::state::App;
use crate::remind::{Editor, ExternalEditor, ReminderSource, RemindCommand};
use crate::tui::event::{TuiEvent, poll_event_timeout};
use crate::tui::layout::PaneLayout;
use crate::tui::signal::{ResizeFlag, ResizeListener};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Everything the loop talks to outside of `App`.
struct Collaborators<'a> {
    source: &'a dyn ReminderSource,
    editor: &'a dyn Editor,
    source_path: &'a Path,
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let source = RemindCommand::new(
        config.remind_binary.clone(),
        config.source_path.clone(),
        config.output_format,
    );
    let editor = ExternalEditor::new(config.editor.clone());
    let today = Date::today().map_err(io::Error::other)?;
    let mut app = App::from_config(today, &config);
    info!("Starting on {} with source {}", today, config.source_path.display());

    let resize = ResizeFlag::new();
    let _listener = ResizeListener::spawn(resize.clone())
        .inspect_err(|e| warn!("Resize listener unavailable: {}", e))
        .ok();

    let mut terminal = ratatui::try_init()?;
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let collaborators = Collaborators {
        source: &source,
        editor: &editor,
        source_path: &config.source_path,
    };
    let poll_interval = Duration::from_millis(config.poll_interval_ms);
    let result = event_loop(&mut terminal, &mut app, &collaborators, &resize, poll_interval);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    collaborators: &Collaborators,
    resize: &ResizeFlag,
    poll_interval: Duration,
) -> io::Result<()> {
    let mut today_width = 0;

    loop {
        if resize.take() {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            match PaneLayout::compute(area, app.today_pane_enabled) {
                Ok(layout) => {
                    app.today_pane_height = layout.today.map(|r| r.height).unwrap_or(0);
                    today_width = layout.today_text_width();
                }
                Err(e) => {
                    debug!("{}", e);
                    app.today_pane_height = 0;
                }
            }
            app.today_dirty = app.today_pane_enabled;
            debug!("Layout recomputed for {}x{}", size.width, size.height);
        }

        if app.events_dirty {
            app.refresh_events(collaborators.source);
        }
        if app.today_dirty {
            app.refresh_today(collaborators.source, today_width);
        }

        terminal.draw(|f| ui::draw_ui(f, app))?;

        let Some(event) = poll_event_timeout(poll_interval)? else {
            continue;
        };
        if event == TuiEvent::Resize {
            resize.mark();
            continue;
        }
        let Some(action) = event.action() else {
            continue;
        };

        match update(app, action) {
            Effect::None => {}
            Effect::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Effect::RefreshEvents => app.refresh_events(collaborators.source),
            Effect::OpenEditor(target) => {
                let path = target
                    .file
                    .unwrap_or_else(|| collaborators.source_path.to_path_buf());

                ratatui::restore();
                execute!(stdout(), Show)?;
                let result = collaborators.editor.open(&path, target.line);
                *terminal = ratatui::try_init()?;
                execute!(stdout(), Hide)?;
                terminal.clear()?;

                if let Err(e) = result {
                    warn!("Editor failed: {}", e);
                    app.push_status(format!("Editor failed: {e}"));
                }
                // The file may have changed under us.
                app.events_dirty = true;
                resize.mark();
            }
        }
    }
}
