//! PredLab CLI — one-shot reports over a prediction table.
//!
//! Commands:
//! - `report` — load, filter, aggregate, and print the accuracy summary
//!   plus the filtered rows
//! - `check` — validate a data file and describe its contents
//! - `sample` — write a synthetic dataset for demos and tests

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use predlab_core::{
    build_view, load_path, sample, write_csv, Direction, FilterState, StockSelector, TimeWindow,
};

#[derive(Parser)]
#[command(
    name = "predlab",
    about = "PredLab CLI — prediction-outcome accuracy reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the accuracy summary and filtered rows for a data file.
    Report {
        /// Path to the prediction table (CSV).
        #[arg(long)]
        data: PathBuf,

        /// Restrict to one stock symbol. Defaults to all stocks.
        #[arg(long)]
        stock: Option<String>,

        /// Time window: 1d, 1w, 1m, 3m, 1y, all.
        #[arg(long, default_value = "all")]
        window: String,

        /// Minimum probability threshold, integer percent 0-100.
        #[arg(long, default_value_t = 30)]
        min_prob: u8,

        /// Print at most this many rows. Defaults to all of them.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Validate a data file and describe its contents.
    Check {
        /// Path to the prediction table (CSV).
        #[arg(long)]
        data: PathBuf,
    },
    /// Write a synthetic dataset.
    Sample {
        /// Output path.
        #[arg(long)]
        out: PathBuf,

        /// Days of history per symbol.
        #[arg(long, default_value_t = 120)]
        rows: usize,

        /// RNG seed.
        #[arg(long, default_value_t = 7)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            data,
            stock,
            window,
            min_prob,
            limit,
        } => run_report(data, stock, &window, min_prob, limit),
        Commands::Check { data } => run_check(&data),
        Commands::Sample { out, rows, seed } => run_sample(&out, rows, seed),
    }
}

fn run_report(
    data: PathBuf,
    stock: Option<String>,
    window: &str,
    min_prob: u8,
    limit: Option<usize>,
) -> Result<()> {
    if min_prob > 100 {
        bail!("--min-prob must be between 0 and 100");
    }
    let Some(window) = TimeWindow::from_code(window) else {
        bail!("unknown window '{window}'. Valid: 1d, 1w, 1m, 3m, 1y, all");
    };

    let set = load_path(&data)
        .with_context(|| format!("loading predictions from {}", data.display()))?;

    let state = FilterState {
        stock: stock.map(StockSelector::Symbol).unwrap_or(StockSelector::All),
        window,
        min_probability: f64::from(min_prob) / 100.0,
        show_open_lines: true,
    };
    let now = chrono::Local::now().naive_local();
    let view = build_view(&set, &state, now);

    println!();
    println!("=== Prediction Accuracy ===");
    println!(
        "Source:    {} ({} records, {} in view)",
        data.display(),
        set.len(),
        view.rows.len()
    );
    println!(
        "Filters:   stock {} | window {} | min prob {}%",
        state.stock.label(),
        state.window.label(),
        min_prob
    );
    println!();
    for dir in Direction::ALL {
        let class = view.breakdown.class(dir);
        println!(
            "{:<8} {:>6} predictions   {:>5.1}% success",
            dir.label(),
            class.count,
            class.success_rate
        );
    }

    if view.rows.is_empty() {
        println!();
        println!("No records match the current filters.");
        return Ok(());
    }

    println!();
    println!(
        "{:<13} {:<17} {:>9} {:>9} {:>5} {:>5} {:>5}  {:<7} {:>3}",
        "Stock", "Datetime", "P.Close", "A.Close", "Up%", "Dn%", "Nu%", "Pred", "OK"
    );
    println!("{}", "-".repeat(82));

    let shown = limit.unwrap_or(view.rows.len()).min(view.rows.len());
    for row in &view.rows[..shown] {
        let r = &row.record;
        println!(
            "{:<13} {:<17} {:>9.2} {:>9.2} {:>4.0}% {:>4.0}% {:>4.0}%  {:<7} {:>3}",
            r.stock,
            r.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            r.predicted_close,
            r.actual_close,
            r.up_prob * 100.0,
            r.down_prob * 100.0,
            r.neutral_prob * 100.0,
            r.prediction.label(),
            if row.success { "yes" } else { "no" }
        );
    }
    if shown < view.rows.len() {
        println!("... {} more row(s); raise --limit to see them", view.rows.len() - shown);
    }

    Ok(())
}

fn run_check(data: &Path) -> Result<()> {
    let set = load_path(data)
        .with_context(|| format!("validating {}", data.display()))?;

    println!("OK: {}", data.display());
    println!("Records:  {}", set.len());

    let symbols = set.symbols();
    println!("Symbols:  {}", symbols.len());
    for symbol in &symbols {
        let count = set.iter().filter(|r| &r.stock == symbol).count();
        println!("  {symbol:<16} {count} rows");
    }

    if let (Some(min), Some(max)) = (set.min_timestamp(), set.max_timestamp()) {
        println!(
            "Range:    {} to {}",
            min.format("%Y-%m-%d %H:%M"),
            max.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

fn run_sample(out: &Path, rows: usize, seed: u64) -> Result<()> {
    let end = chrono::Local::now().naive_local();
    let set = sample::generate(end, rows, seed);

    let file = std::fs::File::create(out)
        .with_context(|| format!("creating {}", out.display()))?;
    write_csv(&set, file)?;

    println!(
        "Wrote {} records ({} symbols x {} days) to {}",
        set.len(),
        set.symbols().len(),
        rows,
        out.display()
    );
    Ok(())
}
