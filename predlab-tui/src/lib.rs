//! PredLab TUI — terminal dashboard over a prediction-outcomes table.
//!
//! Panels:
//! 1. Controls — stock selector, time window, probability threshold, open-lines toggle
//! 2. Table — filtered records with colour-coded class probabilities
//! 3. Price — predicted vs actual OHLC line chart
//! 4. Trend — per-class counts annotated with success rates
//! 5. Probability — stacked class probabilities over time
//! 6. Help — keyboard reference and dataset info
//!
//! The always-visible metrics bar on top shows the three per-class
//! summaries; every control change triggers one synchronous
//! filter → aggregate → rebuild pass.

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
