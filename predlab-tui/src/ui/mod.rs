//! Top-level UI layout — metrics bar, active panel, status bar.

pub mod controls_panel;
pub mod help_panel;
pub mod metrics_bar;
pub mod price_panel;
pub mod prob_panel;
pub mod status_bar;
pub mod table_panel;
pub mod trend_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI for one frame.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: 3-line metrics bar + main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    metrics_bar::render(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Controls => controls_panel::render(f, inner, app),
        Panel::Table => table_panel::render(f, inner, app),
        Panel::Price => price_panel::render(f, inner, app),
        Panel::Trend => trend_panel::render(f, inner, app),
        Panel::Probability => prob_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}
