//! Domain types — prediction records and the loaded dataset.
//!
//! A `PredictionRecord` is one row of the source table: one stock at one
//! timestamp, with the model's predicted OHLC prices, the observed OHLC
//! prices, and the per-class probabilities. Records are immutable once
//! loaded; every render pass derives fresh views and never mutates them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

/// The model's directional call for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl Direction {
    /// All three classes, in display order.
    pub const ALL: [Direction; 3] = [Direction::Up, Direction::Down, Direction::Neutral];

    /// The label as written by the upstream model (and in the source file).
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Neutral => "NEUTRAL",
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            "NEUTRAL" => Ok(Direction::Neutral),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `Prediction` column value that is not UP, DOWN, or NEUTRAL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown prediction label '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

/// One row of the source table: one stock at one timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    pub stock: String,
    pub timestamp: NaiveDateTime,
    pub predicted_open: f64,
    pub actual_open: f64,
    pub predicted_close: f64,
    pub actual_close: f64,
    pub predicted_high: f64,
    pub actual_high: f64,
    pub predicted_low: f64,
    pub actual_low: f64,
    /// Class probabilities in [0, 1]. Independent — not required to sum to 1.
    pub up_prob: f64,
    pub down_prob: f64,
    pub neutral_prob: f64,
    pub prediction: Direction,
}

/// The loaded dataset — ordered records, owned for the process lifetime.
///
/// Loaded once at startup; every render pass borrows it read-only and
/// derives a fresh filtered view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionSet {
    records: Vec<PredictionRecord>,
}

impl PredictionSet {
    pub fn new(records: Vec<PredictionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PredictionRecord> {
        self.records.iter()
    }

    /// Unique stock symbols, sorted. Drives the stock selector.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.records.iter().map(|r| r.stock.clone()).collect();
        symbols.sort();
        symbols.dedup();
        symbols
    }

    /// Earliest timestamp in the dataset, if any.
    pub fn min_timestamp(&self) -> Option<NaiveDateTime> {
        self.records.iter().map(|r| r.timestamp).min()
    }

    /// Latest timestamp in the dataset, if any.
    pub fn max_timestamp(&self) -> Option<NaiveDateTime> {
        self.records.iter().map(|r| r.timestamp).max()
    }
}

impl From<Vec<PredictionRecord>> for PredictionSet {
    fn from(records: Vec<PredictionRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a PredictionSet {
    type Item = &'a PredictionRecord;
    type IntoIter = std::slice::Iter<'a, PredictionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
