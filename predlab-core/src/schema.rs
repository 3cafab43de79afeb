//! Column contract — the boundary between the source spreadsheet and the loader.
//!
//! Defines the exact column names the input table must carry. Column order
//! does not matter (rows are decoded by header name), but every required
//! column must be present. Validation collects all problems rather than
//! stopping at the first, so a malformed export is reported in one pass.

/// The required columns, as written by the upstream model.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "STOCK",
    "Datetime",
    "Predicted_Open",
    "Actual_Open",
    "Predicted_Close",
    "Actual_Close",
    "Predicted_High",
    "Actual_High",
    "Predicted_Low",
    "Actual_Low",
    "UP_Prob",
    "DOWN_Prob",
    "NEUTRAL_Prob",
    "Prediction",
];

/// Every required column absent from `headers`, in contract order.
///
/// Empty result means the header row satisfies the contract. Extra columns
/// are tolerated — the loader simply ignores them.
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !headers.iter().any(|h| h.as_ref() == **required))
        .map(|c| c.to_string())
        .collect()
}
