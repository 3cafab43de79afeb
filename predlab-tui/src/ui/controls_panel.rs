//! Panel 1 — Controls: the filter inputs driving every render pass.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

const SLIDER_CELLS: usize = 20;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k] move  [h/l] adjust  [space] toggle  [r] refresh",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    lines.push(control_row(
        app,
        0,
        "Stock",
        format!(
            "< {} >  ({} of {})",
            app.stock_label(),
            app.stock_idx + 1,
            app.stock_option_count()
        ),
    ));
    lines.push(control_row(
        app,
        1,
        "Time Frame",
        format!("< {} >", app.window.label()),
    ));
    lines.push(control_row(
        app,
        2,
        "Min Probability",
        format!("[{}] {:>3}%", slider(app.threshold_pct), app.threshold_pct),
    ));
    lines.push(control_row(
        app,
        3,
        "Show Open Lines",
        if app.show_open_lines { "[x] on" } else { "[ ] off" }.to_string(),
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("In view: ", theme::muted()),
        Span::styled(
            format!("{} of {} records", app.view.rows.len(), app.dataset.len()),
            theme::accent(),
        ),
    ]));

    f.render_widget(Paragraph::new(lines), area);
}

fn control_row(app: &AppState, index: usize, name: &str, value: String) -> Line<'static> {
    let selected = app.controls_cursor == index;
    let name_style = if selected {
        theme::accent_bold().add_modifier(Modifier::REVERSED)
    } else {
        theme::text()
    };
    let value_style = if selected {
        theme::accent()
    } else {
        theme::muted()
    };
    Line::from(vec![
        Span::styled(format!(" {name:<18}"), name_style),
        Span::styled(value, value_style),
    ])
}

/// Threshold slider track: one cell per 5%.
fn slider(pct: u16) -> String {
    let filled = (usize::from(pct) * SLIDER_CELLS) / 100;
    let mut track = String::with_capacity(SLIDER_CELLS);
    for i in 0..SLIDER_CELLS {
        track.push(if i < filled { '\u{2588}' } else { '\u{2500}' });
    }
    track
}
