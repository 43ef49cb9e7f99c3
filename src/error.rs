//! Structured error types for heatview.
//!
//! Layout failures are reported with [`LayoutError`]; everything that can go
//! wrong around a layout pass (painting, JSON documents, I/O) is wrapped in
//! [`HeatviewError`].

use std::fmt;

/// Where a length mismatch was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchSource {
    /// A row whose value count differs from the first row.
    Row(usize),
    /// The column label list.
    ColumnLabels,
}

impl fmt::Display for MismatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(index) => write!(f, "row {index}"),
            Self::ColumnLabels => f.write_str("column labels"),
        }
    }
}

/// Reasons a layout pass refuses to produce a plan.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// No rows were given; there is nothing to render.
    #[error("nothing to render: no rows given")]
    EmptyInput,

    /// Container width or height is not a positive, finite number.
    #[error("invalid container dimensions {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Rows disagree on their value count, or the column labels do not
    /// match it.
    #[error("{origin} has {found} values, expected {expected}")]
    RowLengthMismatch {
        origin: MismatchSource,
        expected: usize,
        found: usize,
    },

    /// Display options failed validation.
    #[error("invalid display options: {0}")]
    InvalidOptions(String),
}

/// All errors that can occur in heatview.
#[derive(Debug, thiserror::Error)]
pub enum HeatviewError {
    /// Layout refused the input.
    #[error("Layout: {0}")]
    Layout(#[from] LayoutError),

    /// A drawing surface rejected an operation.
    #[error("Render error: {0}")]
    Render(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for string errors from the DOM glue.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HeatviewError>;

impl From<String> for HeatviewError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for HeatviewError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<HeatviewError> for wasm_bindgen::JsValue {
    fn from(e: HeatviewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
