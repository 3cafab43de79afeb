//! PredLab Core — prediction records, dataset loader, filter & aggregation
//! engine, and the pure view-model builder.
//!
//! This crate is the heart of the report:
//! - Domain types (records, directions, the loaded dataset)
//! - Column contract for the source table
//! - One-shot CSV loader with an injectable source
//! - Filter predicates (stock, time window, probability threshold)
//! - Per-class success aggregation
//! - `build_view`: the `render(filter_state, dataset) -> ViewModel` seam
//!
//! No terminal or widget code lives here; the TUI and CLI are thin hosts
//! over these functions.

pub mod analysis;
pub mod config;
pub mod filter;
pub mod loader;
pub mod record;
pub mod sample;
pub mod schema;
pub mod view;

pub use analysis::{summarize, success, ClassSummary, DirectionBreakdown, NEUTRAL_TOLERANCE};
pub use config::{ConfigError, DashboardConfig};
pub use filter::{filter_records, FilterState, StockSelector, TimeWindow};
pub use loader::{load_path, load_reader, write_csv, LoadError};
pub use record::{Direction, PredictionRecord, PredictionSet};
pub use view::{build_view, Series, TableRow, TrendBar, ViewModel};
