//! Self-contained heatmap input documents.
//!
//! A document bundles rows, optional column labels, display options and an
//! optional container size, so a layout can be computed from a single JSON
//! value (CLI input, `layout_heatmap_json`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout;
use crate::types::{DisplayOptions, RenderPlan, Row};

/// Container width used when neither the document nor the caller gives one.
pub const DEFAULT_WIDTH: f64 = 800.0;
/// Container height used when neither the document nor the caller gives one.
pub const DEFAULT_HEIGHT: f64 = 600.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDocument {
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_labels: Option<Vec<String>>,
    #[serde(default)]
    pub options: DisplayOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl HeatmapDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or misses `rows`.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a document file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a JSON error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Container size: explicit override, then the document, then defaults.
    pub fn container_size(&self, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
        (
            width.or(self.width).unwrap_or(DEFAULT_WIDTH),
            height.or(self.height).unwrap_or(DEFAULT_HEIGHT),
        )
    }

    /// Lay the document out.
    ///
    /// # Errors
    /// Returns the layout error for invalid input.
    pub fn layout(&self, width: Option<f64>, height: Option<f64>) -> Result<RenderPlan> {
        let (width, height) = self.container_size(width, height);
        Ok(layout::render(
            &self.rows,
            width,
            height,
            &self.options,
            self.column_labels.as_deref(),
        )?)
    }
}
