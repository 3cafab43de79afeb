//! Success rule and per-class aggregation.
//!
//! The success flag is derived fresh on every pass — it is never stored on
//! the record. Aggregation partitions the filtered view by prediction class
//! and reports count plus success rate per class.

use crate::record::{Direction, PredictionRecord};

/// Absolute price-unit tolerance for a NEUTRAL call to count as a hit.
///
/// Carried verbatim from the upstream rule. Known limitation: an absolute
/// tolerance does not scale across instruments of different price magnitude.
pub const NEUTRAL_TOLERANCE: f64 = 10.0;

/// Whether the prediction direction matched the observed close.
///
/// UP requires the actual close strictly above the predicted close, DOWN
/// strictly below; an exact match fails both.
pub fn success(record: &PredictionRecord) -> bool {
    match record.prediction {
        Direction::Up => record.actual_close > record.predicted_close,
        Direction::Down => record.actual_close < record.predicted_close,
        Direction::Neutral => {
            (record.actual_close - record.predicted_close).abs() <= NEUTRAL_TOLERANCE
        }
    }
}

/// Count and success rate for one prediction class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassSummary {
    pub count: usize,
    /// Percentage in [0, 100]; exactly 0 for an empty partition.
    pub success_rate: f64,
}

impl ClassSummary {
    fn from_counts(count: usize, successes: usize) -> Self {
        // Empty-partition guard: the rate is defined as 0, never a division
        // by zero.
        let success_rate = if count == 0 {
            0.0
        } else {
            successes as f64 / count as f64 * 100.0
        };
        Self {
            count,
            success_rate,
        }
    }
}

/// Per-class summaries for one filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DirectionBreakdown {
    pub up: ClassSummary,
    pub down: ClassSummary,
    pub neutral: ClassSummary,
}

impl DirectionBreakdown {
    pub fn class(&self, direction: Direction) -> ClassSummary {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Neutral => self.neutral,
        }
    }

    /// Sum of the three class counts. Equals the filtered set's size — the
    /// classes partition it exhaustively.
    pub fn total(&self) -> usize {
        self.up.count + self.down.count + self.neutral.count
    }
}

/// Partition `filtered` by prediction class and summarize each partition.
pub fn summarize(filtered: &[&PredictionRecord]) -> DirectionBreakdown {
    let mut counts = [0usize; 3];
    let mut successes = [0usize; 3];

    for record in filtered {
        let slot = match record.prediction {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Neutral => 2,
        };
        counts[slot] += 1;
        if success(record) {
            successes[slot] += 1;
        }
    }

    DirectionBreakdown {
        up: ClassSummary::from_counts(counts[0], successes[0]),
        down: ClassSummary::from_counts(counts[1], successes[1]),
        neutral: ClassSummary::from_counts(counts[2], successes[2]),
    }
}
