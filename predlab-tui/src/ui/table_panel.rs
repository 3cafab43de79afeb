//! Panel 2 — Table: filtered records with colour-coded class probabilities.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use predlab_core::Direction;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = &app.view.rows;
    let mut lines: Vec<Line> = Vec::new();

    if rows.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No records match the current filters. Adjust them in Panel 1.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Column headers
    lines.push(Line::from(Span::styled(
        format!(
            "{:<13} {:<12} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}  {:>4} {:>4} {:>4}  {:<7} {:>2}",
            "Stock", "Datetime", "P.Open", "A.Open", "P.Close", "A.Close", "P.High", "A.High",
            "P.Low", "A.Low", "Up%", "Dn%", "Nu%", "Pred", "OK"
        ),
        theme::accent_bold(),
    )));

    let visible_height = (area.height as usize).saturating_sub(2);
    let start = app.table_scroll.min(rows.len().saturating_sub(1));
    let end = (start + visible_height.max(1)).min(rows.len());

    for row in &rows[start..end] {
        let r = &row.record;
        lines.push(Line::from(vec![
            Span::styled(format!("{:<13} ", truncate(&r.stock, 13)), theme::text()),
            Span::styled(
                format!("{:<12} ", r.timestamp.format("%m-%d %H:%M").to_string()),
                theme::muted(),
            ),
            Span::styled(
                format!(
                    "{:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} ",
                    r.predicted_open,
                    r.actual_open,
                    r.predicted_close,
                    r.actual_close,
                    r.predicted_high,
                    r.actual_high,
                    r.predicted_low,
                    r.actual_low
                ),
                theme::text(),
            ),
            Span::styled(
                format!(" {:>3.0}%", r.up_prob * 100.0),
                theme::direction_style(Direction::Up),
            ),
            Span::styled(
                format!(" {:>3.0}%", r.down_prob * 100.0),
                theme::direction_style(Direction::Down),
            ),
            Span::styled(
                format!(" {:>3.0}%", r.neutral_prob * 100.0),
                theme::direction_style(Direction::Neutral),
            ),
            Span::styled(
                format!("  {:<7} ", r.prediction.label()),
                theme::direction_style(r.prediction),
            ),
            Span::styled(
                if row.success { " \u{2713}" } else { " \u{2717}" },
                theme::success_style(row.success),
            ),
        ]));
    }

    lines.push(Line::from(Span::styled(
        format!(
            "rows {}\u{2013}{} of {}  [j/k] scroll  [g/G] top/bottom",
            start + 1,
            end,
            rows.len()
        ),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}.", &s[..max - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("ACC", 13), "ACC");
        assert_eq!(truncate("NIFTY24SEPFUTURES", 13), "NIFTY24SEPFU.");
    }
}
