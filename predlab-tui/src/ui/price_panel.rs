//! Panel 3 — Price: one line per price field, predicted vs actual.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = &app.view;
    if view.rows.is_empty() {
        render_empty(f, area);
        return;
    }

    let (mut x_min, mut x_max) = view.time_bounds().unwrap_or((0.0, 1.0));
    if x_max - x_min < 1.0 {
        // Single timestamp — widen so the chart still has an x extent.
        x_max = x_min + 1.0;
    }

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for series in &view.price_series {
        for (_, y) in &series.points {
            y_min = y_min.min(*y);
            y_max = y_max.max(*y);
        }
    }
    let padding = ((y_max - y_min).abs() * 0.05).max(1.0);
    let y_min = y_min - padding;
    let y_max = y_max + padding;

    let datasets: Vec<Dataset> = view
        .price_series
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| {
            Dataset::default()
                .name(s.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme::price_color(s.name)))
                .data(&s.points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([x_min, x_max])
                .labels(vec![
                    Span::styled(format_date(x_min), theme::muted()),
                    Span::styled(format_date(x_max), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "No records match the current filters.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Widen the time frame or lower the probability threshold in Panel 1.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Epoch seconds → short date label.
pub(crate) fn format_date(epoch: f64) -> String {
    chrono::DateTime::from_timestamp(epoch as i64, 0)
        .map(|dt| dt.naive_utc().format("%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_formats_to_month_day() {
        // 2025-07-21 00:00:00 UTC
        assert_eq!(format_date(1_753_056_000.0), "07-21");
    }
}
