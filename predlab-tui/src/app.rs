//! Application state — single-owner, main-thread only.
//!
//! The dataset is loaded once and owned here read-only; every control
//! change calls [`AppState::refresh_view`], which runs the full synchronous
//! filter → aggregate → rebuild pass and replaces the view model wholesale.

use chrono::NaiveDateTime;

use predlab_core::{
    build_view, FilterState, PredictionSet, StockSelector, TimeWindow, ViewModel,
};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Controls,
    Table,
    Price,
    Trend,
    Probability,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Controls => 0,
            Panel::Table => 1,
            Panel::Price => 2,
            Panel::Trend => 3,
            Panel::Probability => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Controls),
            1 => Some(Panel::Table),
            2 => Some(Panel::Price),
            3 => Some(Panel::Trend),
            4 => Some(Panel::Probability),
            5 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Controls => "Controls",
            Panel::Table => "Table",
            Panel::Price => "Price",
            Panel::Trend => "Trend",
            Panel::Probability => "Probability",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Rows of the controls panel, top to bottom: stock, window, threshold,
/// open-lines toggle.
pub const CONTROL_COUNT: usize = 4;

/// Threshold slider step, in integer percent.
pub const THRESHOLD_STEP: u16 = 5;

/// Top-level application state.
pub struct AppState {
    // Data (read-only after load)
    pub dataset: PredictionSet,
    pub symbols: Vec<String>,
    pub data_label: String,

    // Controls — the source of truth the FilterState is rebuilt from
    pub stock_idx: usize, // 0 = All, i -> symbols[i - 1]
    pub window: TimeWindow,
    pub threshold_pct: u16, // 0..=100
    pub show_open_lines: bool,
    pub controls_cursor: usize,

    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub table_scroll: usize,

    // Derived — replaced wholesale on every pass
    pub view: ViewModel,

    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(dataset: PredictionSet, data_label: impl Into<String>, initial: FilterState) -> Self {
        let symbols = dataset.symbols();
        let stock_idx = match &initial.stock {
            StockSelector::All => 0,
            StockSelector::Symbol(s) => symbols
                .iter()
                .position(|sym| sym == s)
                .map(|i| i + 1)
                .unwrap_or(0),
        };
        let threshold_pct = (initial.min_probability * 100.0).round() as u16;
        let view = build_view(&dataset, &initial, Self::eval_time());

        Self {
            dataset,
            symbols,
            data_label: data_label.into(),
            stock_idx,
            window: initial.window,
            threshold_pct,
            show_open_lines: initial.show_open_lines,
            controls_cursor: 0,
            active_panel: Panel::Controls,
            running: true,
            table_scroll: 0,
            view,
            status_message: None,
        }
    }

    /// The evaluation instant anchoring the time window.
    fn eval_time() -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    /// Rebuild the transient FilterState from the current control values.
    pub fn filter_state(&self) -> FilterState {
        let stock = if self.stock_idx == 0 {
            StockSelector::All
        } else {
            StockSelector::Symbol(self.symbols[self.stock_idx - 1].clone())
        };
        FilterState {
            stock,
            window: self.window,
            min_probability: f64::from(self.threshold_pct) / 100.0,
            show_open_lines: self.show_open_lines,
        }
    }

    /// One full synchronous pass: filter → aggregate → rebuild the view.
    pub fn refresh_view(&mut self) {
        self.view = build_view(&self.dataset, &self.filter_state(), Self::eval_time());
        self.table_scroll = self.table_scroll.min(self.view.rows.len().saturating_sub(1));
    }

    /// Number of stock selector options (every symbol plus "All").
    pub fn stock_option_count(&self) -> usize {
        self.symbols.len() + 1
    }

    pub fn stock_label(&self) -> &str {
        if self.stock_idx == 0 {
            "All"
        } else {
            &self.symbols[self.stock_idx - 1]
        }
    }

    pub fn cycle_stock(&mut self, direction: i32) {
        let len = self.stock_option_count();
        self.stock_idx = if direction >= 0 {
            (self.stock_idx + 1) % len
        } else {
            (self.stock_idx + len - 1) % len
        };
    }

    pub fn adjust_threshold(&mut self, direction: i32) {
        self.threshold_pct = if direction >= 0 {
            (self.threshold_pct + THRESHOLD_STEP).min(100)
        } else {
            self.threshold_pct.saturating_sub(THRESHOLD_STEP)
        };
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
