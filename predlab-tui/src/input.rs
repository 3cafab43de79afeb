//! Keyboard input dispatch — global keys first, then panel-specific handlers.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel, CONTROL_COUNT};

/// Deliberate pause on manual refresh so the user sees the action land.
const REFRESH_PAUSE: Duration = Duration::from_millis(350);

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Controls; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Table; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Price; return; }
        KeyCode::Char('4') => { app.active_panel = Panel::Trend; return; }
        KeyCode::Char('5') => { app.active_panel = Panel::Probability; return; }
        KeyCode::Char('6') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('r') => {
            refresh(app);
            return;
        }
        _ => {}
    }

    // Panel-specific keys.
    match app.active_panel {
        Panel::Controls => handle_controls_key(app, key),
        Panel::Table => handle_table_key(app, key),
        // Chart and help panels are display-only.
        Panel::Price | Panel::Trend | Panel::Probability | Panel::Help => {}
    }
}

/// Manual refresh: a short blocking pause, then the full pass. The source is
/// static for the session, so reloading is the same as re-filtering the
/// resident dataset.
fn refresh(app: &mut AppState) {
    std::thread::sleep(REFRESH_PAUSE);
    app.refresh_view();
    app.set_status(format!(
        "Data refreshed: {} of {} records in view",
        app.view.rows.len(),
        app.dataset.len()
    ));
}

fn handle_controls_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.controls_cursor + 1 < CONTROL_COUNT {
                app.controls_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.controls_cursor = app.controls_cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            adjust_control(app, -1);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            adjust_control(app, 1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            // Toggle rows react to space/enter; elsewhere it re-runs the pass.
            if app.controls_cursor == 3 {
                adjust_control(app, 1);
            } else {
                refresh(app);
            }
        }
        _ => {}
    }
}

/// Adjust the control under the cursor, then run the synchronous pass —
/// every change re-derives the entire view from the full dataset.
fn adjust_control(app: &mut AppState, direction: i32) {
    match app.controls_cursor {
        0 => app.cycle_stock(direction),
        1 => {
            app.window = if direction >= 0 {
                app.window.next()
            } else {
                app.window.prev()
            };
        }
        2 => app.adjust_threshold(direction),
        3 => app.show_open_lines = !app.show_open_lines,
        _ => return,
    }
    app.refresh_view();
    app.set_status(format!(
        "{} records in view ({} {}, min prob {}%)",
        app.view.rows.len(),
        app.stock_label(),
        app.window.label(),
        app.threshold_pct
    ));
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.view.rows.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.table_scroll + 1 < row_count {
                app.table_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.table_scroll = app.table_scroll.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.table_scroll = 0;
        }
        KeyCode::Char('G') => {
            app.table_scroll = row_count.saturating_sub(1);
        }
        _ => {}
    }
}
