//! Pure view-model builder — one full pass from dataset to renderable data.
//!
//! `build_view` is the `render(filter_state, dataset) -> ViewModel` seam:
//! the hosting event loop calls it synchronously on every control change and
//! hands the result to widgets. Nothing here holds state between passes;
//! every ViewModel is a fresh derivation from the resident dataset.

use chrono::NaiveDateTime;

use crate::analysis::{self, DirectionBreakdown};
use crate::filter::{filter_records, FilterState};
use crate::record::{Direction, PredictionRecord, PredictionSet};

/// One table row: the filtered record plus its derived success flag.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub record: PredictionRecord,
    pub success: bool,
}

/// A named chart series. X is epoch seconds, so renderers can format axis
/// labels however they like.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// One bar of the trend chart: class, count, and its success-rate annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendBar {
    pub direction: Direction,
    pub count: usize,
    pub success_rate: f64,
}

/// Everything a renderer needs for one pass. Fully reconstructed each time.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub breakdown: DirectionBreakdown,
    /// Filtered records in dataset order, each with its success flag.
    pub rows: Vec<TableRow>,
    /// One line series per price field. The predicted/actual open pair is
    /// present only when `show_open_lines` is set.
    pub price_series: Vec<Series>,
    pub trend_bars: [TrendBar; 3],
    /// Up/down/neutral probability over time, as fractions in [0, 1].
    /// Stacking is presentational and left to the renderer.
    pub probability_series: [Series; 3],
}

impl ViewModel {
    /// Min and max x across the price series, if any point exists.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let xs = self
            .price_series
            .iter()
            .flat_map(|s| s.points.iter().map(|(x, _)| *x));
        let mut bounds: Option<(f64, f64)> = None;
        for x in xs {
            bounds = match bounds {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            };
        }
        bounds
    }
}

fn epoch(ts: NaiveDateTime) -> f64 {
    ts.and_utc().timestamp() as f64
}

fn series(
    name: &'static str,
    filtered: &[&PredictionRecord],
    value: fn(&PredictionRecord) -> f64,
) -> Series {
    Series {
        name,
        points: filtered
            .iter()
            .map(|r| (epoch(r.timestamp), value(r)))
            .collect(),
    }
}

/// Build the complete view for one render pass.
///
/// `now` anchors the time window; inject it rather than reading the clock so
/// repeated calls over the same inputs are identical.
pub fn build_view(set: &PredictionSet, state: &FilterState, now: NaiveDateTime) -> ViewModel {
    let filtered = filter_records(set, state, now);
    let breakdown = analysis::summarize(&filtered);

    let rows = filtered
        .iter()
        .map(|r| TableRow {
            record: (*r).clone(),
            success: analysis::success(r),
        })
        .collect();

    let mut price_series = Vec::with_capacity(8);
    if state.show_open_lines {
        price_series.push(series("Predicted Open", &filtered, |r| r.predicted_open));
        price_series.push(series("Actual Open", &filtered, |r| r.actual_open));
    }
    price_series.push(series("Predicted Close", &filtered, |r| r.predicted_close));
    price_series.push(series("Actual Close", &filtered, |r| r.actual_close));
    price_series.push(series("Predicted High", &filtered, |r| r.predicted_high));
    price_series.push(series("Actual High", &filtered, |r| r.actual_high));
    price_series.push(series("Predicted Low", &filtered, |r| r.predicted_low));
    price_series.push(series("Actual Low", &filtered, |r| r.actual_low));

    let trend_bars = [
        TrendBar {
            direction: Direction::Up,
            count: breakdown.up.count,
            success_rate: breakdown.up.success_rate,
        },
        TrendBar {
            direction: Direction::Down,
            count: breakdown.down.count,
            success_rate: breakdown.down.success_rate,
        },
        TrendBar {
            direction: Direction::Neutral,
            count: breakdown.neutral.count,
            success_rate: breakdown.neutral.success_rate,
        },
    ];

    let probability_series = [
        series("Up Prob", &filtered, |r| r.up_prob),
        series("Down Prob", &filtered, |r| r.down_prob),
        series("Neutral Prob", &filtered, |r| r.neutral_prob),
    ];

    ViewModel {
        breakdown,
        rows,
        price_series,
        trend_bars,
        probability_series,
    }
}
