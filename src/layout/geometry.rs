//! Pixel sizing rules.
//!
//! Label sizes are estimated from character counts; there is no text
//! measurement at layout time.

use crate::types::Row;

/// Upper bound for the row-label strip.
pub const MAX_ROW_LABEL_PIXELS: f64 = 400.0;
/// Characters of a row label taken into account when reserving room.
pub const MAX_ROW_LABEL_CHARS: usize = 175;
/// Upper bound for the column-label strip.
pub const MAX_COLUMN_LABEL_PIXELS: f64 = 220.0;
/// Column labels are truncated to this many characters.
pub const MAX_COLUMN_LABEL_CHARS: usize = 125;
/// Estimated pixels per label character.
pub const CHAR_WIDTH_ESTIMATE: f64 = 8.0;

/// Row bands never get shorter than this when row labels are shown.
pub const MIN_CELL_HEIGHT_FOR_LABELS: f64 = 12.0;
/// Absolute floor for a row band.
pub const MIN_CELL_HEIGHT: f64 = 2.0;
/// Smallest width the cell area is squeezed into in fit mode.
pub const MIN_IMAGE_WIDTH: f64 = 50.0;
/// Column width when the heatmap expands instead of fitting.
pub const EXPANDED_CELL_WIDTH: f64 = 10.0;
/// Gap between the cell area and the row labels.
pub const ROW_LABEL_GAP: f64 = 5.0;

/// Room reserved to the right of the cells for row labels.
pub fn row_label_width(rows: &[Row]) -> f64 {
    let longest = rows
        .iter()
        .map(|row| row.label_chars().min(MAX_ROW_LABEL_CHARS))
        .max()
        .unwrap_or(0);
    (longest as f64 * CHAR_WIDTH_ESTIMATE).min(MAX_ROW_LABEL_PIXELS)
}

/// Room reserved above the cells for rotated column labels.
pub fn column_label_height(labels: &[String]) -> f64 {
    let longest = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_COLUMN_LABEL_CHARS);
    (longest as f64 * CHAR_WIDTH_ESTIMATE).min(MAX_COLUMN_LABEL_PIXELS)
}

/// Height of one row band.
///
/// `available` is the container height left after the column-label strip.
/// With row labels the band may be forced taller than the container allows;
/// the overflow is handled by scrolling.
pub fn cell_height(available: f64, row_count: usize, max_cell_height: f64, row_labels: bool) -> f64 {
    let raw = (available / row_count.max(1) as f64).floor();
    if raw > max_cell_height {
        max_cell_height
    } else if raw < MIN_CELL_HEIGHT_FOR_LABELS && row_labels {
        MIN_CELL_HEIGHT_FOR_LABELS
    } else {
        raw.max(MIN_CELL_HEIGHT)
    }
}

/// Horizontal sizing of the cell grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFit {
    pub cell_width: f64,
    /// Source columns per displayed cell; always a power of two.
    pub stride: usize,
    pub displayed_columns: usize,
}

impl ColumnFit {
    /// Width of the cell area.
    pub fn heatmap_width(&self) -> f64 {
        self.cell_width * self.displayed_columns as f64
    }
}

/// Shrink `columns` into `target_width`, doubling the stride until every
/// displayed cell is at least one pixel wide.
///
/// Cell widths stay fractional so the grid fills the target exactly.
pub fn fit_columns(target_width: f64, columns: usize) -> ColumnFit {
    let target = target_width.max(MIN_IMAGE_WIDTH);
    let mut cell_width = target / columns.max(1) as f64;
    let mut stride = 1_usize;
    while cell_width < 1.0 && stride < columns {
        stride *= 2;
        cell_width *= 2.0;
    }
    ColumnFit {
        cell_width,
        stride,
        displayed_columns: columns.div_ceil(stride),
    }
}

/// Fixed-width columns; the grid grows as wide as it needs.
pub fn expand_columns(columns: usize) -> ColumnFit {
    ColumnFit {
        cell_width: EXPANDED_CELL_WIDTH,
        stride: 1,
        displayed_columns: columns,
    }
}
