//! Panel 4 — Trend: one bar per prediction class, annotated with its
//! success rate.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = &app.view;
    if view.breakdown.total() == 0 {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No records match the current filters.",
                theme::muted(),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let bar_width = (area.width / 3).saturating_sub(3).clamp(5, 20);

    let bars: Vec<Bar> = view
        .trend_bars
        .iter()
        .map(|b| {
            Bar::default()
                .label(Line::from(Span::styled(
                    b.direction.label(),
                    theme::direction_style(b.direction),
                )))
                .value(b.count as u64)
                .text_value(format!("{} ({:.1}%)", b.count, b.success_rate))
                .style(Style::default().fg(theme::direction_color(b.direction)))
                .value_style(
                    Style::default()
                        .fg(ratatui::style::Color::Black)
                        .bg(theme::direction_color(b.direction)),
                )
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(3);

    f.render_widget(chart, area);
}
