//! Dashboard configuration — the injectable data-source seam.
//!
//! The data path is never hardcoded: it arrives from a CLI flag, a leading
//! argument, or a `predlab.toml` in the working directory. The config may
//! also pre-seed the filter controls; every field is optional and falls back
//! to the engine defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::filter::{FilterState, TimeWindow};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown time window '{0}' (valid: 1d, 1w, 1m, 3m, 1y, all)")]
    UnknownWindow(String),
}

/// `predlab.toml` contents. Unknown keys are rejected so typos surface.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Path to the prediction table.
    pub data: Option<PathBuf>,
    /// Initial time window, as a short code: 1d, 1w, 1m, 3m, 1y, all.
    pub window: Option<String>,
    /// Initial probability threshold in integer percent, 0–100.
    pub min_probability_pct: Option<u8>,
    /// Initial state of the open-lines toggle.
    pub show_open_lines: Option<bool>,
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `predlab.toml` from the working directory if present.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("predlab.toml");
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The initial filter controls: engine defaults overridden by whatever
    /// the config specifies.
    pub fn initial_filter(&self) -> Result<FilterState, ConfigError> {
        let mut state = FilterState::default();
        if let Some(code) = &self.window {
            state.window = TimeWindow::from_code(code)
                .ok_or_else(|| ConfigError::UnknownWindow(code.clone()))?;
        }
        if let Some(pct) = self.min_probability_pct {
            state.min_probability = f64::from(pct.min(100)) / 100.0;
        }
        if let Some(show) = self.show_open_lines {
            state.show_open_lines = show;
        }
        Ok(state)
    }
}
