//! Dataset loader — reads the prediction table into a `PredictionSet`.
//!
//! One-shot startup load: a failure here is fatal to the caller, since no
//! report can render without data. The source is injectable — a filesystem
//! path via [`load_path`] or any reader via [`load_reader`] — so tests and
//! alternative front ends never touch the disk.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::record::{PredictionRecord, PredictionSet};
use crate::schema;

/// Why a load failed. All variants are fatal; there are no retries.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}

/// Raw row as decoded by the csv crate. Column order in the file is
/// irrelevant — fields bind by header name.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "STOCK")]
    stock: String,
    #[serde(rename = "Datetime")]
    datetime: String,
    #[serde(rename = "Predicted_Open")]
    predicted_open: f64,
    #[serde(rename = "Actual_Open")]
    actual_open: f64,
    #[serde(rename = "Predicted_Close")]
    predicted_close: f64,
    #[serde(rename = "Actual_Close")]
    actual_close: f64,
    #[serde(rename = "Predicted_High")]
    predicted_high: f64,
    #[serde(rename = "Actual_High")]
    actual_high: f64,
    #[serde(rename = "Predicted_Low")]
    predicted_low: f64,
    #[serde(rename = "Actual_Low")]
    actual_low: f64,
    #[serde(rename = "UP_Prob")]
    up_prob: f64,
    #[serde(rename = "DOWN_Prob")]
    down_prob: f64,
    #[serde(rename = "NEUTRAL_Prob")]
    neutral_prob: f64,
    #[serde(rename = "Prediction")]
    prediction: String,
}

/// Load a prediction table from a CSV file on disk.
pub fn load_path(path: &Path) -> Result<PredictionSet, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_reader(file)
}

/// Load a prediction table from any reader.
///
/// Validates the header row against the column contract first, reporting
/// every missing column at once, then decodes rows in file order. An empty
/// file with valid headers yields an empty set — that is not an error.
pub fn load_reader<R: Read>(reader: R) -> Result<PredictionSet, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let missing = schema::missing_columns(&headers);
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        // Row numbers are 1-based and count the header row, matching what a
        // user sees in a spreadsheet editor.
        let row_number = index + 2;
        let raw = row.map_err(|e| LoadError::Row {
            row: row_number,
            message: e.to_string(),
        })?;
        records.push(convert_row(raw, row_number)?);
    }

    Ok(PredictionSet::new(records))
}

fn convert_row(raw: RawRow, row_number: usize) -> Result<PredictionRecord, LoadError> {
    let timestamp = parse_datetime(&raw.datetime).ok_or_else(|| LoadError::Row {
        row: row_number,
        message: format!("unparseable Datetime '{}'", raw.datetime),
    })?;
    let prediction = raw.prediction.parse().map_err(|e| LoadError::Row {
        row: row_number,
        message: format!("{e}"),
    })?;

    Ok(PredictionRecord {
        stock: raw.stock,
        timestamp,
        predicted_open: raw.predicted_open,
        actual_open: raw.actual_open,
        predicted_close: raw.predicted_close,
        actual_close: raw.actual_close,
        predicted_high: raw.predicted_high,
        actual_high: raw.actual_high,
        predicted_low: raw.predicted_low,
        actual_low: raw.actual_low,
        up_prob: raw.up_prob,
        down_prob: raw.down_prob,
        neutral_prob: raw.neutral_prob,
        prediction,
    })
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, the ISO-8601 `T` variant (with optional
/// fractional seconds), and bare dates (interpreted as midnight).
fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Write a prediction table as CSV with the canonical header row.
///
/// The counterpart of [`load_reader`]; used by the `sample` command to
/// produce demo datasets that round-trip through the loader.
pub fn write_csv<W: Write>(set: &PredictionSet, writer: W) -> Result<(), LoadError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(schema::REQUIRED_COLUMNS)?;
    for r in set {
        csv_writer.write_record(&[
            r.stock.clone(),
            r.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{:.2}", r.predicted_open),
            format!("{:.2}", r.actual_open),
            format!("{:.2}", r.predicted_close),
            format!("{:.2}", r.actual_close),
            format!("{:.2}", r.predicted_high),
            format!("{:.2}", r.actual_high),
            format!("{:.2}", r.predicted_low),
            format!("{:.2}", r.actual_low),
            format!("{:.4}", r.up_prob),
            format!("{:.4}", r.down_prob),
            format!("{:.4}", r.neutral_prob),
            r.prediction.label().to_string(),
        ])?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Direction;

    const HEADER: &str = "STOCK,Datetime,Predicted_Open,Actual_Open,Predicted_Close,Actual_Close,Predicted_High,Actual_High,Predicted_Low,Actual_Low,UP_Prob,DOWN_Prob,NEUTRAL_Prob,Prediction";

    fn csv_with_rows(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn loads_a_well_formed_row() {
        let data = csv_with_rows(&[
            "ACC24SEPFUT,2025-07-21 09:30:00,100.0,100.5,101.0,102.0,103.0,103.5,99.0,98.5,0.62,0.18,0.20,UP",
        ]);
        let set = load_reader(data.as_bytes()).unwrap();
        assert_eq!(set.len(), 1);
        let r = &set.records()[0];
        assert_eq!(r.stock, "ACC24SEPFUT");
        assert_eq!(r.prediction, Direction::Up);
        assert_eq!(r.actual_close, 102.0);
        assert_eq!(r.timestamp.format("%H:%M").to_string(), "09:30");
    }

    #[test]
    fn empty_file_with_valid_headers_is_not_an_error() {
        let set = load_reader(HEADER.as_bytes()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let data = "STOCK,Datetime,Prediction\nACC,2025-07-21,UP";
        match load_reader(data.as_bytes()) {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing.len(), 11);
                assert!(missing.contains(&"UP_Prob".to_string()));
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn bad_datetime_names_the_row() {
        let data = csv_with_rows(&[
            "ACC,2025-07-21 09:30:00,1,1,1,1,1,1,1,1,0.5,0.3,0.2,UP",
            "ACC,21/07/2025,1,1,1,1,1,1,1,1,0.5,0.3,0.2,UP",
        ]);
        match load_reader(data.as_bytes()) {
            Err(LoadError::Row { row, message }) => {
                assert_eq!(row, 3);
                assert!(message.contains("Datetime"));
            }
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_prediction_label_names_the_row() {
        let data =
            csv_with_rows(&["ACC,2025-07-21 09:30:00,1,1,1,1,1,1,1,1,0.5,0.3,0.2,SIDEWAYS"]);
        match load_reader(data.as_bytes()) {
            Err(LoadError::Row { row, message }) => {
                assert_eq!(row, 2);
                assert!(message.contains("SIDEWAYS"));
            }
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_iso_t_and_bare_date_variants() {
        let data = csv_with_rows(&[
            "ACC,2025-07-21T09:30:00,1,1,1,1,1,1,1,1,0.5,0.3,0.2,UP",
            "ACC,2025-07-22,1,1,1,1,1,1,1,1,0.5,0.3,0.2,DOWN",
        ]);
        let set = load_reader(data.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.records()[1].timestamp.format("%H:%M:%S").to_string(),
            "00:00:00"
        );
    }

    #[test]
    fn column_order_does_not_matter() {
        let data = "Prediction,STOCK,Datetime,Predicted_Open,Actual_Open,Predicted_Close,Actual_Close,Predicted_High,Actual_High,Predicted_Low,Actual_Low,UP_Prob,DOWN_Prob,NEUTRAL_Prob\nDOWN,TCS,2025-07-21 10:00:00,1,1,1,1,1,1,1,1,0.1,0.8,0.1";
        let set = load_reader(data.as_bytes()).unwrap();
        assert_eq!(set.records()[0].prediction, Direction::Down);
        assert_eq!(set.records()[0].stock, "TCS");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_path(Path::new("/nonexistent/predictions.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("predictions.csv"));
    }

    #[test]
    fn written_csv_round_trips_through_the_loader() {
        let data = csv_with_rows(&[
            "ACC,2025-07-21 09:30:00,100.00,100.50,101.00,102.00,103.00,103.50,99.00,98.50,0.6200,0.1800,0.2000,UP",
        ]);
        let set = load_reader(data.as_bytes()).unwrap();

        let mut buf = Vec::new();
        write_csv(&set, &mut buf).unwrap();
        let reloaded = load_reader(buf.as_slice()).unwrap();
        assert_eq!(set, reloaded);
    }
}
