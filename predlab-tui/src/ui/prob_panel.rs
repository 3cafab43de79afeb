//! Panel 5 — Probability: stacked class probabilities over time.
//!
//! The three series are drawn cumulatively (up, up+down, up+down+neutral),
//! the terminal rendition of a stacked area chart.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::price_panel::format_date;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let view = &app.view;
    if view.rows.is_empty() {
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

    let [up, down, neutral] = &view.probability_series;

    // Cumulative stacking, in percent.
    let up_band: Vec<(f64, f64)> = up.points.iter().map(|(x, y)| (*x, y * 100.0)).collect();
    let down_band: Vec<(f64, f64)> = up
        .points
        .iter()
        .zip(&down.points)
        .map(|((x, a), (_, b))| (*x, (a + b) * 100.0))
        .collect();
    let neutral_band: Vec<(f64, f64)> = up
        .points
        .iter()
        .zip(&down.points)
        .zip(&neutral.points)
        .map(|(((x, a), (_, b)), (_, c))| (*x, (a + b + c) * 100.0))
        .collect();

    let (mut x_min, mut x_max) = view.time_bounds().unwrap_or((0.0, 1.0));
    if x_max - x_min < 1.0 {
        x_max = x_min + 1.0;
    }
    let y_max = neutral_band
        .iter()
        .map(|(_, y)| *y)
        .fold(100.0_f64, f64::max)
        * 1.05;

    let datasets = vec![
        dataset(up.name, &up_band, theme::POSITIVE),
        dataset(down.name, &down_band, theme::NEGATIVE),
        dataset(neutral.name, &neutral_band, theme::NEUTRAL),
    ];

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
                .title(Span::styled("Probability %", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn dataset<'a>(
    name: &'static str,
    points: &'a [(f64, f64)],
    color: ratatui::style::Color,
) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(ratatui::style::Style::default().fg(color))
        .data(points)
}
