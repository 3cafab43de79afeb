//! Synthetic dataset generator.
//!
//! Produces realistic-looking prediction tables for demos and tests:
//! random-walk prices per symbol, predictions that are sometimes right and
//! sometimes wrong, and probabilities with one dominant class. Fully
//! deterministic for a given seed and end instant, so the TUI demo and the
//! `sample` command are reproducible.

use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::{Direction, PredictionRecord, PredictionSet};

/// Demo symbols with their starting price levels.
const SAMPLE_SYMBOLS: &[(&str, f64)] = &[
    ("ACC24SEPFUT", 2450.0),
    ("TCS24SEPFUT", 4310.0),
    ("RELI24SEPFUT", 2975.0),
    ("NIFTY24SEPFUT", 25350.0),
];

/// Generate one record per symbol per day, ending at `end`.
///
/// `end` is injected rather than read from the clock, so callers decide the
/// anchor and repeated calls stay identical.
pub fn generate(end: NaiveDateTime, days: usize, seed: u64) -> PredictionSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(days * SAMPLE_SYMBOLS.len());

    for (symbol, base) in SAMPLE_SYMBOLS {
        let mut close = *base;
        for day in (0..days).rev() {
            let timestamp = end - Duration::days(day as i64);
            let prev_close = close;
            let drift: f64 = rng.gen_range(-0.015..0.015);
            close = (close * (1.0 + drift)).max(1.0);

            let actual_open = prev_close * (1.0 + rng.gen_range(-0.004..0.004));
            let actual_close = close;
            let wick = close * rng.gen_range(0.001..0.008);
            let actual_high = actual_open.max(actual_close) + wick;
            let actual_low = actual_open.min(actual_close) - wick;

            // Predictions track the outcome with their own error, so the
            // success rates land somewhere interesting rather than at 0 or 100.
            let mut err = || 1.0 + rng.gen_range(-0.01..0.01_f64);
            let predicted_open = actual_open * err();
            let predicted_close = actual_close * err();
            let predicted_high = actual_high * err();
            let predicted_low = actual_low * err();

            let prediction = match rng.gen_range(0..10) {
                0..=3 => Direction::Up,
                4..=7 => Direction::Down,
                _ => Direction::Neutral,
            };
            let dominant = rng.gen_range(0.35..0.90_f64);
            let minor_a = rng.gen_range(0.05..(1.0 - dominant).max(0.06));
            let minor_b = rng.gen_range(0.05..(1.0 - dominant).max(0.06));
            let (up_prob, down_prob, neutral_prob) = match prediction {
                Direction::Up => (dominant, minor_a, minor_b),
                Direction::Down => (minor_a, dominant, minor_b),
                Direction::Neutral => (minor_a, minor_b, dominant),
            };

            records.push(PredictionRecord {
                stock: symbol.to_string(),
                timestamp,
                predicted_open,
                actual_open,
                predicted_close,
                actual_close,
                predicted_high,
                actual_high,
                predicted_low,
                actual_low,
                up_prob,
                down_prob,
                neutral_prob,
                prediction,
            });
        }
    }

    records.sort_by(|a, b| (a.timestamp, &a.stock).cmp(&(b.timestamp, &b.stock)));
    PredictionSet::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn end() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 21)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap()
    }

    #[test]
    fn generates_one_record_per_symbol_per_day() {
        let set = generate(end(), 30, 7);
        assert_eq!(set.len(), 30 * SAMPLE_SYMBOLS.len());
        assert_eq!(set.symbols().len(), SAMPLE_SYMBOLS.len());
    }

    #[test]
    fn same_seed_is_deterministic() {
        assert_eq!(generate(end(), 10, 42), generate(end(), 10, 42));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate(end(), 10, 1), generate(end(), 10, 2));
    }

    #[test]
    fn probabilities_stay_in_range_with_a_dominant_class() {
        let set = generate(end(), 60, 9);
        for r in &set {
            for p in [r.up_prob, r.down_prob, r.neutral_prob] {
                assert!((0.0..=1.0).contains(&p), "probability out of range: {p}");
            }
            let dominant = match r.prediction {
                Direction::Up => r.up_prob,
                Direction::Down => r.down_prob,
                Direction::Neutral => r.neutral_prob,
            };
            assert!(dominant >= 0.35);
        }
    }

    #[test]
    fn timestamps_span_the_requested_range() {
        let set = generate(end(), 30, 7);
        assert_eq!(set.max_timestamp().unwrap(), end());
        assert_eq!(set.min_timestamp().unwrap(), end() - Duration::days(29));
    }

    #[test]
    fn prices_are_positive_and_ordered() {
        let set = generate(end(), 90, 3);
        for r in &set {
            assert!(r.actual_low > 0.0);
            assert!(r.actual_high >= r.actual_open.max(r.actual_close));
            assert!(r.actual_low <= r.actual_open.min(r.actual_close));
        }
    }
}
