use serde::{Deserialize, Serialize};

use crate::color_scale::Rgb;

/// Complete, backend-agnostic description of one painted heatmap.
///
/// Coordinates are in logical pixels relative to the top-left corner of the
/// heatmap surface. Column labels sit above the cells, row labels to the
/// right of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub cell_width: f64,
    pub cell_height: f64,
    /// Width of the cell area alone.
    pub heatmap_width: f64,
    /// Cell area plus reserved row-label width.
    pub total_width: f64,
    /// Cell area plus reserved column-label height.
    pub total_height: f64,
    /// Number of source columns averaged into one displayed cell (>= 1).
    pub column_stride: usize,
    /// Source columns per row.
    pub column_count: usize,
    /// Cells per row after downsampling.
    pub displayed_columns: usize,
    pub row_label_width: f64,
    pub column_label_height: f64,
    pub rows: Vec<RowBand>,
    pub column_labels: ColumnLabelPlan,
    pub overflow: Overflow,
    /// Height the host should shrink to, when requested and useful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendPlan>,
}

impl RenderPlan {
    /// Total number of cells across all bands.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|band| band.cells.len()).sum()
    }

    /// All cells, top-to-bottom then left-to-right.
    pub fn cells(&self) -> impl Iterator<Item = &PlannedCell> {
        self.rows.iter().flat_map(|band| band.cells.iter())
    }

    /// True when there is nothing to paint (zero columns).
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Cell at a band and displayed column.
    pub fn cell(&self, row: usize, column: usize) -> Option<&PlannedCell> {
        self.rows.get(row)?.cells.get(column)
    }
}

/// One row of the heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowBand {
    pub index: usize,
    pub y: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<RowLabel>,
    pub cells: Vec<PlannedCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// One colored rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedCell {
    pub row: usize,
    /// Displayed column index.
    pub column: usize,
    /// First source column folded into this cell.
    pub first_sample: usize,
    /// Number of source columns folded into this cell.
    pub sample_count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clamped (and averaged) value; `None` when missing.
    pub value: Option<f64>,
    /// Palette bucket; `None` for missing values.
    pub bucket: Option<usize>,
    pub color: Rgb,
}

/// What goes in the strip above the cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ColumnLabelPlan {
    /// No column labels were supplied.
    None,
    /// One rotated label per column.
    #[serde(rename_all = "camelCase")]
    Rotated {
        font_size: f64,
        labels: Vec<ColumnLabel>,
    },
    /// Columns are too narrow for labels; show a hint line instead.
    Hint { text: String, x: f64, y: f64 },
}

impl ColumnLabelPlan {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A column label drawn along a rotated baseline starting at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLabel {
    pub column: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in radians (text reads bottom to top).
    pub rotation: f64,
}

/// Presentation hint for the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Overflow {
    /// Content is larger than the container; enable scrolling.
    Scroll,
    /// Content fits.
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Color legend painted on its own surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendPlan {
    /// Identifier of the surface to paint on.
    pub target: String,
    pub orientation: Orientation,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub stops: Vec<LegendStop>,
    pub min_label: LegendText,
    pub max_label: LegendText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendStop {
    pub bucket: usize,
    pub color: Rgb,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendText {
    pub text: String,
    pub x: f64,
    pub y: f64,
}
