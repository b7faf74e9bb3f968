use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::{App, Pane};
use crate::tui::component::Component;
use crate::tui::components::{Calendar, EventList, StatusBar, TodayPane};
use crate::tui::layout::{LayoutError, PaneLayout};

/// Draws one frame. The layout is derived from the frame itself so a resize
/// that the loop has not picked up yet still draws inside the buffer.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    match PaneLayout::compute(frame.area(), app.today_pane_enabled) {
        Ok(layout) => draw_panes(frame, app, &layout),
        Err(e) => draw_too_small(frame, frame.area(), &e),
    }
}

fn draw_panes(frame: &mut Frame, app: &App, layout: &PaneLayout) {
    let active = app.nav.active;

    EventList::new(
        app.focus,
        &app.events,
        app.nav.selected_event,
        active == Pane::EventsList,
    )
    .render(frame, layout.events);

    let grid = app.grid();
    Calendar::new(&grid, &app.focus, active == Pane::Calendar).render(frame, layout.calendar);

    if let Some(area) = layout.today {
        TodayPane::new(&app.today_lines, app.nav.today_scroll, active == Pane::TodayPane)
            .render(frame, area);
    }

    StatusBar::new(&app.status_message).render(frame, layout.status);
}

fn draw_too_small(frame: &mut Frame, area: Rect, error: &LayoutError) {
    let notice = Paragraph::new(error.to_string())
        .block(Block::bordered())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(notice, area);
}
