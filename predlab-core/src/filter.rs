//! Filter predicates — stock, time window, and probability threshold.
//!
//! `FilterState` is transient and UI-owned: rebuilt from control values on
//! every render pass, never persisted. Filtering is total — a selector that
//! names a symbol absent from the data yields an empty result, not an error.

use chrono::{Duration, NaiveDateTime};

use crate::record::{PredictionRecord, PredictionSet};

/// Stock predicate: a single symbol, or the "All" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StockSelector {
    #[default]
    All,
    Symbol(String),
}

impl StockSelector {
    pub fn matches(&self, stock: &str) -> bool {
        match self {
            StockSelector::All => true,
            StockSelector::Symbol(s) => s == stock,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StockSelector::All => "All",
            StockSelector::Symbol(s) => s,
        }
    }
}

/// Relative lookback anchored at evaluation time, or unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
    OneYear,
    #[default]
    All,
}

impl TimeWindow {
    /// All windows, in selector order.
    pub const ALL_WINDOWS: [TimeWindow; 6] = [
        TimeWindow::OneDay,
        TimeWindow::OneWeek,
        TimeWindow::OneMonth,
        TimeWindow::ThreeMonths,
        TimeWindow::OneYear,
        TimeWindow::All,
    ];

    /// Lookback in days; `None` for the unrestricted window.
    pub fn lookback_days(self) -> Option<i64> {
        match self {
            TimeWindow::OneDay => Some(1),
            TimeWindow::OneWeek => Some(7),
            TimeWindow::OneMonth => Some(30),
            TimeWindow::ThreeMonths => Some(90),
            TimeWindow::OneYear => Some(365),
            TimeWindow::All => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::OneDay => "1 Day",
            TimeWindow::OneWeek => "1 Week",
            TimeWindow::OneMonth => "1 Month",
            TimeWindow::ThreeMonths => "3 Months",
            TimeWindow::OneYear => "1 Year",
            TimeWindow::All => "All",
        }
    }

    fn index(self) -> usize {
        Self::ALL_WINDOWS.iter().position(|w| *w == self).unwrap()
    }

    pub fn next(self) -> TimeWindow {
        Self::ALL_WINDOWS[(self.index() + 1) % Self::ALL_WINDOWS.len()]
    }

    pub fn prev(self) -> TimeWindow {
        let len = Self::ALL_WINDOWS.len();
        Self::ALL_WINDOWS[(self.index() + len - 1) % len]
    }

    /// Parse the short code used by the CLI and the config file.
    pub fn from_code(code: &str) -> Option<TimeWindow> {
        match code {
            "1d" => Some(TimeWindow::OneDay),
            "1w" => Some(TimeWindow::OneWeek),
            "1m" => Some(TimeWindow::OneMonth),
            "3m" => Some(TimeWindow::ThreeMonths),
            "1y" => Some(TimeWindow::OneYear),
            "all" => Some(TimeWindow::All),
            _ => None,
        }
    }

    /// A record passes when its timestamp falls in `[now - lookback, now]`.
    /// The unrestricted window imposes no bound at all.
    pub fn contains(self, timestamp: NaiveDateTime, now: NaiveDateTime) -> bool {
        match self.lookback_days() {
            None => true,
            Some(days) => timestamp >= now - Duration::days(days) && timestamp <= now,
        }
    }
}

/// The full set of user-selected predicates for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub stock: StockSelector,
    pub window: TimeWindow,
    /// Threshold as a fraction in [0, 1]. The UI speaks integer percent and
    /// converts at the boundary.
    pub min_probability: f64,
    pub show_open_lines: bool,
}

impl Default for FilterState {
    /// Dashboard defaults: all stocks, unrestricted window, 30% threshold,
    /// open lines on.
    fn default() -> Self {
        Self {
            stock: StockSelector::All,
            window: TimeWindow::All,
            min_probability: 0.30,
            show_open_lines: true,
        }
    }
}

impl FilterState {
    /// True when at least one class probability clears the threshold.
    ///
    /// Deliberately an OR across the three classes: a record with high
    /// confidence on any class passes even if its predicted class is weak.
    pub fn passes_probability(&self, record: &PredictionRecord) -> bool {
        record.up_prob >= self.min_probability
            || record.down_prob >= self.min_probability
            || record.neutral_prob >= self.min_probability
    }

    pub fn passes(&self, record: &PredictionRecord, now: NaiveDateTime) -> bool {
        self.stock.matches(&record.stock)
            && self.window.contains(record.timestamp, now)
            && self.passes_probability(record)
    }
}

/// The filtered view: every record passing all predicates, in dataset order.
///
/// `now` is the evaluation instant, injected so callers (and tests) control
/// the window anchor.
pub fn filter_records<'a>(
    set: &'a PredictionSet,
    state: &FilterState,
    now: NaiveDateTime,
) -> Vec<&'a PredictionRecord> {
    set.iter().filter(|r| state.passes(r, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Direction;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 21)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn record(stock: &str, hours_ago: i64, up: f64, down: f64, neutral: f64) -> PredictionRecord {
        PredictionRecord {
            stock: stock.to_string(),
            timestamp: now() - Duration::hours(hours_ago),
            predicted_open: 100.0,
            actual_open: 100.0,
            predicted_close: 100.0,
            actual_close: 101.0,
            predicted_high: 102.0,
            actual_high: 102.0,
            predicted_low: 98.0,
            actual_low: 98.0,
            up_prob: up,
            down_prob: down,
            neutral_prob: neutral,
            prediction: Direction::Up,
        }
    }

    #[test]
    fn stock_selector_restricts_to_one_symbol() {
        let set = PredictionSet::new(vec![
            record("ACC", 1, 0.9, 0.05, 0.05),
            record("TCS", 1, 0.9, 0.05, 0.05),
        ]);
        let state = FilterState {
            stock: StockSelector::Symbol("ACC".into()),
            ..FilterState::default()
        };
        let filtered = filter_records(&set, &state, now());
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|r| r.stock == "ACC"));
    }

    #[test]
    fn absent_symbol_yields_empty_not_error() {
        let set = PredictionSet::new(vec![record("ACC", 1, 0.9, 0.05, 0.05)]);
        let state = FilterState {
            stock: StockSelector::Symbol("NOPE".into()),
            ..FilterState::default()
        };
        assert!(filter_records(&set, &state, now()).is_empty());
    }

    #[test]
    fn one_day_window_excludes_records_older_than_24_hours() {
        let set = PredictionSet::new(vec![
            record("ACC", 23, 0.9, 0.05, 0.05),
            record("ACC", 25, 0.9, 0.05, 0.05),
        ]);
        let state = FilterState {
            window: TimeWindow::OneDay,
            ..FilterState::default()
        };
        let filtered = filter_records(&set, &state, now());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].timestamp, now() - Duration::hours(23));
    }

    #[test]
    fn bounded_window_excludes_future_records() {
        let set = PredictionSet::new(vec![record("ACC", -2, 0.9, 0.05, 0.05)]);
        let state = FilterState {
            window: TimeWindow::OneDay,
            ..FilterState::default()
        };
        assert!(filter_records(&set, &state, now()).is_empty());
    }

    #[test]
    fn all_window_includes_every_record_regardless_of_timestamp() {
        let set = PredictionSet::new(vec![
            record("ACC", 24 * 365 * 3, 0.9, 0.05, 0.05),
            record("ACC", -48, 0.9, 0.05, 0.05), // future-dated
        ]);
        let filtered = filter_records(&set, &FilterState::default(), now());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn probability_threshold_is_an_or_across_classes() {
        // Predicted class has low confidence, but neutral clears the bar.
        let set = PredictionSet::new(vec![record("ACC", 1, 0.10, 0.10, 0.80)]);
        let state = FilterState {
            min_probability: 0.50,
            ..FilterState::default()
        };
        assert_eq!(filter_records(&set, &state, now()).len(), 1);

        // No class clears the bar.
        let state = FilterState {
            min_probability: 0.90,
            ..FilterState::default()
        };
        assert!(filter_records(&set, &state, now()).is_empty());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let set = PredictionSet::new(vec![record("ACC", 1, 0.30, 0.1, 0.1)]);
        let state = FilterState {
            min_probability: 0.30,
            ..FilterState::default()
        };
        assert_eq!(filter_records(&set, &state, now()).len(), 1);
    }

    #[test]
    fn window_codes_round_trip() {
        for (code, window) in [
            ("1d", TimeWindow::OneDay),
            ("1w", TimeWindow::OneWeek),
            ("1m", TimeWindow::OneMonth),
            ("3m", TimeWindow::ThreeMonths),
            ("1y", TimeWindow::OneYear),
            ("all", TimeWindow::All),
        ] {
            assert_eq!(TimeWindow::from_code(code), Some(window));
        }
        assert_eq!(TimeWindow::from_code("2w"), None);
        assert_eq!(TimeWindow::from_code("ALL"), None);
    }

    #[test]
    fn window_cycling_wraps() {
        assert_eq!(TimeWindow::OneDay.next(), TimeWindow::OneWeek);
        assert_eq!(TimeWindow::All.next(), TimeWindow::OneDay);
        assert_eq!(TimeWindow::OneDay.prev(), TimeWindow::All);
        for w in TimeWindow::ALL_WINDOWS {
            assert_eq!(w.next().prev(), w);
        }
    }

    #[test]
    fn defaults_match_the_dashboard_controls() {
        let state = FilterState::default();
        assert_eq!(state.stock, StockSelector::All);
        assert_eq!(state.window, TimeWindow::All);
        assert!((state.min_probability - 0.30).abs() < f64::EPSILON);
        assert!(state.show_open_lines);
    }
}
