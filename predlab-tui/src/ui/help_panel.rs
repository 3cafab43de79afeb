//! Panel 6 — Help: keyboard reference and dataset info.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled("Navigation", theme::accent_bold())),
        help_row("1-6", "jump to a panel"),
        help_row("Tab / Shift-Tab", "next / previous panel"),
        help_row("q", "quit"),
        Line::from(""),
        Line::from(Span::styled("Controls (Panel 1)", theme::accent_bold())),
        help_row("j / k", "move between controls"),
        help_row("h / l", "adjust the selected control"),
        help_row("space", "flip the open-lines toggle"),
        help_row("r", "refresh (re-runs the full pass)"),
        Line::from(""),
        Line::from(Span::styled("Table (Panel 2)", theme::accent_bold())),
        help_row("j / k", "scroll"),
        help_row("g / G", "jump to top / bottom"),
        Line::from(""),
        Line::from(Span::styled("Dataset", theme::accent_bold())),
    ];

    lines.push(Line::from(vec![
        Span::styled("  source       ", theme::muted()),
        Span::styled(app.data_label.clone(), theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  records      ", theme::muted()),
        Span::styled(app.dataset.len().to_string(), theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  symbols      ", theme::muted()),
        Span::styled(app.symbols.len().to_string(), theme::text()),
    ]));
    if let (Some(min), Some(max)) = (app.dataset.min_timestamp(), app.dataset.max_timestamp()) {
        lines.push(Line::from(vec![
            Span::styled("  date range   ", theme::muted()),
            Span::styled(
                format!("{} to {}", min.format("%Y-%m-%d"), max.format("%Y-%m-%d")),
                theme::text(),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn help_row(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {keys:<16}"), theme::accent()),
        Span::styled(action.to_string(), theme::muted()),
    ])
}
