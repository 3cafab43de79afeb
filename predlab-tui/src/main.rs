//! PredLab TUI — prediction-outcomes dashboard.
//!
//! Usage: `predlab-tui [DATA.csv]`
//!
//! The data path comes from the first argument, falling back to the `data`
//! key of a `predlab.toml` in the working directory. With neither, a
//! deterministic synthetic dataset is generated so the dashboard is
//! explorable without a file. A load failure aborts startup — no report can
//! render without data.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use predlab_core::{load_path, sample, DashboardConfig, FilterState, PredictionSet};
use predlab_tui::app::AppState;
use predlab_tui::{input, ui};

/// Sample-data shape when no file is given.
const SAMPLE_DAYS: usize = 120;
const SAMPLE_SEED: u64 = 7;

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let (dataset, label, initial) = load_dataset()?;
    let mut app = AppState::new(dataset, label, initial);
    app.set_status(format!("Loaded {} records", app.dataset.len()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Resolve the data source: argument, then config, then synthetic sample.
fn load_dataset() -> Result<(PredictionSet, String, FilterState)> {
    let config = DashboardConfig::load_default().context("reading predlab.toml")?;
    let initial = config.initial_filter().context("applying predlab.toml")?;

    let path = std::env::args().nth(1).map(PathBuf::from).or(config.data);
    match path {
        Some(path) => {
            let set = load_path(&path)
                .with_context(|| format!("loading predictions from {}", path.display()))?;
            Ok((set, path.display().to_string(), initial))
        }
        None => {
            let end = chrono::Local::now().naive_local();
            let set = sample::generate(end, SAMPLE_DAYS, SAMPLE_SEED);
            Ok((set, "built-in sample data".to_string(), initial))
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
