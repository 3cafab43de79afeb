//! Always-visible metrics bar — the three per-class summaries.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use predlab_core::Direction as Trend;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, direction) in Trend::ALL.into_iter().enumerate() {
        let class = app.view.breakdown.class(direction);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted());
        let inner = block.inner(columns[i]);
        f.render_widget(block, columns[i]);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} Predictions: ", direction.label()),
                theme::muted(),
            ),
            Span::styled(
                format!("{} ({:.1}%)", class.count, class.success_rate),
                theme::direction_style(direction),
            ),
        ]);
        f.render_widget(Paragraph::new(line), inner);
    }
}
