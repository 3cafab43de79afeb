//! Property tests for the filter & aggregation engine.
//!
//! Uses proptest to verify:
//! 1. Class partition — up + down + neutral counts always equal the
//!    filtered set's size
//! 2. Rate bounds — every success rate stays in [0, 100], empty partitions
//!    report exactly 0
//! 3. Stock predicate — a symbol filter yields only that symbol; "All"
//!    never grows the set
//! 4. Threshold monotonicity — raising min_probability can only shrink the
//!    filtered set
//! 5. Window ordering — every bounded window is a subset of "All"

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use predlab_core::{
    filter_records, summarize, Direction, FilterState, PredictionRecord, PredictionSet,
    StockSelector, TimeWindow,
};

fn eval_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 21)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Neutral),
    ]
}

fn arb_prob() -> impl Strategy<Value = f64> {
    (0u32..=100).prop_map(|p| f64::from(p) / 100.0)
}

fn arb_price() -> impl Strategy<Value = f64> {
    (50.0..5000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_record() -> impl Strategy<Value = PredictionRecord> {
    (
        prop_oneof![Just("ACC"), Just("TCS"), Just("RELI"), Just("NIFTY")],
        -5i64..400, // hours before (or slightly after) evaluation time
        arb_price(),
        arb_price(),
        arb_prob(),
        arb_prob(),
        arb_prob(),
        arb_direction(),
    )
        .prop_map(
            |(stock, hours_ago, predicted_close, actual_close, up, down, neutral, prediction)| {
                PredictionRecord {
                    stock: stock.to_string(),
                    timestamp: eval_time() - Duration::hours(hours_ago),
                    predicted_open: predicted_close,
                    actual_open: actual_close,
                    predicted_close,
                    actual_close,
                    predicted_high: predicted_close * 1.02,
                    actual_high: actual_close * 1.02,
                    predicted_low: predicted_close * 0.98,
                    actual_low: actual_close * 0.98,
                    up_prob: up,
                    down_prob: down,
                    neutral_prob: neutral,
                    prediction,
                }
            },
        )
}

fn arb_dataset() -> impl Strategy<Value = PredictionSet> {
    prop::collection::vec(arb_record(), 0..60).prop_map(PredictionSet::new)
}

fn arb_window() -> impl Strategy<Value = TimeWindow> {
    prop::sample::select(TimeWindow::ALL_WINDOWS.to_vec())
}

// ── Properties ───────────────────────────────────────────────────────

proptest! {
    /// The three classes partition every filtered set exhaustively.
    #[test]
    fn classes_partition_the_filtered_set(
        set in arb_dataset(),
        threshold in arb_prob(),
        window in arb_window(),
    ) {
        let state = FilterState { window, min_probability: threshold, ..FilterState::default() };
        let filtered = filter_records(&set, &state, eval_time());
        let breakdown = summarize(&filtered);
        prop_assert_eq!(breakdown.total(), filtered.len());
    }

    /// Success rates stay in [0, 100]; empty partitions report exactly 0.
    #[test]
    fn rates_stay_in_bounds(set in arb_dataset()) {
        let filtered = filter_records(&set, &FilterState::default(), eval_time());
        let breakdown = summarize(&filtered);
        for dir in Direction::ALL {
            let class = breakdown.class(dir);
            prop_assert!((0.0..=100.0).contains(&class.success_rate));
            if class.count == 0 {
                prop_assert_eq!(class.success_rate, 0.0);
            }
        }
    }

    /// A symbol filter yields only that symbol; "All" never grows the set.
    #[test]
    fn stock_predicate_restricts_correctly(set in arb_dataset()) {
        let all = filter_records(&set, &FilterState::default(), eval_time());
        prop_assert!(all.len() <= set.len());

        let state = FilterState {
            stock: StockSelector::Symbol("ACC".to_string()),
            ..FilterState::default()
        };
        let only_acc = filter_records(&set, &state, eval_time());
        prop_assert!(only_acc.iter().all(|r| r.stock == "ACC"));
        prop_assert!(only_acc.len() <= all.len());
    }

    /// Raising the threshold can only shrink the filtered set.
    #[test]
    fn threshold_is_monotone(
        set in arb_dataset(),
        lo in arb_prob(),
        hi in arb_prob(),
    ) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let loose = FilterState { min_probability: lo, ..FilterState::default() };
        let strict = FilterState { min_probability: hi, ..FilterState::default() };
        let loose_len = filter_records(&set, &loose, eval_time()).len();
        let strict_len = filter_records(&set, &strict, eval_time()).len();
        prop_assert!(strict_len <= loose_len);
    }

    /// Every bounded window passes a subset of what "All" passes.
    #[test]
    fn bounded_windows_are_subsets_of_all(set in arb_dataset(), window in arb_window()) {
        let unrestricted = FilterState::default();
        let bounded = FilterState { window, ..FilterState::default() };
        let all_len = filter_records(&set, &unrestricted, eval_time()).len();
        let bounded_len = filter_records(&set, &bounded, eval_time()).len();
        prop_assert!(bounded_len <= all_len);
    }

    /// "All" ignores timestamps entirely — it passes exactly the records the
    /// probability predicate passes.
    #[test]
    fn all_window_ignores_timestamps(set in arb_dataset(), threshold in arb_prob()) {
        let state = FilterState { min_probability: threshold, ..FilterState::default() };
        let filtered = filter_records(&set, &state, eval_time());
        let expected = set
            .iter()
            .filter(|r| {
                r.up_prob >= threshold || r.down_prob >= threshold || r.neutral_prob >= threshold
            })
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }
}
