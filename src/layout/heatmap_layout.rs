//! The layout pass: rows + container size + options → [`RenderPlan`].

use log::debug;

use super::downsample::downsample;
use super::geometry::{
    cell_height, column_label_height, expand_columns, fit_columns, row_label_width, ColumnFit,
    ROW_LABEL_GAP,
};
use super::labels::plan_column_labels;
use crate::color_scale::ColorScale;
use crate::error::{LayoutError, MismatchSource};
use crate::legend::plan_legend;
use crate::types::{
    ColumnLabelPlan, DisplayOptions, Overflow, PlannedCell, RenderPlan, Row, RowBand, RowLabel,
};

/// Rounding slack for fractional fitted widths.
const OVERFLOW_TOLERANCE: f64 = 1e-6;

/// Lay out a heatmap with the standard color scale.
///
/// # Errors
/// See [`LayoutEngine::layout`].
pub fn render(
    rows: &[Row],
    container_width: f64,
    container_height: f64,
    options: &DisplayOptions,
    column_labels: Option<&[String]>,
) -> Result<RenderPlan, LayoutError> {
    LayoutEngine::default().layout(
        rows,
        container_width,
        container_height,
        options,
        column_labels,
    )
}

/// Layout engine bound to a color scale.
///
/// The engine holds no state between calls; identical inputs give identical
/// plans.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    scale: ColorScale,
}

impl LayoutEngine {
    pub fn new(scale: ColorScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Compute the plan for one heatmap.
    ///
    /// # Errors
    /// - [`LayoutError::EmptyInput`] when `rows` is empty
    /// - [`LayoutError::InvalidDimensions`] when the container is not a
    ///   positive finite size
    /// - [`LayoutError::InvalidOptions`] when `options` fail validation
    /// - [`LayoutError::RowLengthMismatch`] when rows disagree on their
    ///   length or the column labels do not match it
    pub fn layout(
        &self,
        rows: &[Row],
        container_width: f64,
        container_height: f64,
        options: &DisplayOptions,
        column_labels: Option<&[String]>,
    ) -> Result<RenderPlan, LayoutError> {
        let column_count = validate_input(rows, container_width, container_height, column_labels)?;
        options.validate()?;

        let row_label_width = if options.show_row_labels {
            row_label_width(rows)
        } else {
            0.0
        };
        let column_label_height = column_labels.map_or(0.0, column_label_height);

        let cell_height = cell_height(
            container_height - column_label_height,
            rows.len(),
            options.max_cell_height,
            options.show_row_labels,
        );

        if column_count == 0 {
            debug!("heatmap layout: {} rows without columns, nothing to draw", rows.len());
            return Ok(empty_plan(rows, cell_height));
        }

        let fit = if options.fit_to_container {
            fit_columns(container_width - row_label_width, column_count)
        } else {
            expand_columns(column_count)
        };

        let heatmap_width = fit.heatmap_width();
        let heatmap_height = cell_height * rows.len() as f64;
        let total_width = heatmap_width + row_label_width;
        let total_height = heatmap_height + column_label_height;

        // Stride doubling rounds the displayed column count up, so a fitted
        // grid can still end up wider than the container.
        let too_wide = total_width > container_width + OVERFLOW_TOLERANCE;
        let overflow = if too_wide || total_height > container_height + OVERFLOW_TOLERANCE {
            Overflow::Scroll
        } else {
            Overflow::Visible
        };

        let adjusted_height = (options.allow_target_size_adjust && total_height < container_height)
            .then_some(total_height);

        debug!(
            "heatmap layout: {}x{} samples, cell {:.2}x{}, stride {}, {:?}",
            rows.len(),
            column_count,
            fit.cell_width,
            cell_height,
            fit.stride,
            overflow
        );

        let bands = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let y = column_label_height + index as f64 * cell_height;
                self.band(index, row, y, cell_height, &fit, options.show_row_labels)
            })
            .collect();

        Ok(RenderPlan {
            cell_width: fit.cell_width,
            cell_height,
            heatmap_width,
            total_width,
            total_height,
            column_stride: fit.stride,
            column_count,
            displayed_columns: fit.displayed_columns,
            row_label_width,
            column_label_height,
            rows: bands,
            column_labels: plan_column_labels(
                column_labels,
                &fit,
                options.fit_to_container,
                column_label_height,
            ),
            overflow,
            adjusted_height,
            legend: options
                .active_legend()
                .map(|legend| plan_legend(legend, &self.scale)),
        })
    }

    fn band(
        &self,
        index: usize,
        row: &Row,
        y: f64,
        height: f64,
        fit: &ColumnFit,
        row_labels: bool,
    ) -> RowBand {
        let cells = downsample(&row.values, fit.stride, &self.scale)
            .into_iter()
            .enumerate()
            .map(|(column, sample)| {
                let bucket = self.scale.bucket(sample.value);
                PlannedCell {
                    row: index,
                    column,
                    first_sample: sample.first,
                    sample_count: sample.count,
                    x: column as f64 * fit.cell_width,
                    y,
                    width: fit.cell_width,
                    height,
                    value: (!sample.value.is_nan()).then_some(sample.value),
                    bucket,
                    color: self.scale.color_for_bucket(bucket),
                }
            })
            .collect();

        let label = row_labels.then(|| RowLabel {
            text: row.label.clone().unwrap_or_default(),
            x: fit.heatmap_width() + ROW_LABEL_GAP,
            y,
        });

        RowBand {
            index,
            y,
            height,
            label,
            cells,
        }
    }
}

/// Check the input shape; returns the shared column count.
fn validate_input(
    rows: &[Row],
    width: f64,
    height: f64,
    column_labels: Option<&[String]>,
) -> Result<usize, LayoutError> {
    let Some(first) = rows.first() else {
        return Err(LayoutError::EmptyInput);
    };
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(LayoutError::InvalidDimensions { width, height });
    }

    let expected = first.values.len();
    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.values.len() != expected)
    {
        return Err(LayoutError::RowLengthMismatch {
            origin: MismatchSource::Row(index),
            expected,
            found: row.values.len(),
        });
    }
    if let Some(labels) = column_labels {
        if labels.len() != expected {
            return Err(LayoutError::RowLengthMismatch {
                origin: MismatchSource::ColumnLabels,
                expected,
                found: labels.len(),
            });
        }
    }
    Ok(expected)
}

/// Plan for rows without samples: bands but no cells, labels or legend.
fn empty_plan(rows: &[Row], cell_height: f64) -> RenderPlan {
    RenderPlan {
        cell_width: 0.0,
        cell_height,
        heatmap_width: 0.0,
        total_width: 0.0,
        total_height: 0.0,
        column_stride: 1,
        column_count: 0,
        displayed_columns: 0,
        row_label_width: 0.0,
        column_label_height: 0.0,
        rows: (0..rows.len())
            .map(|index| RowBand {
                index,
                y: index as f64 * cell_height,
                height: cell_height,
                label: None,
                cells: Vec::new(),
            })
            .collect(),
        column_labels: ColumnLabelPlan::None,
        overflow: Overflow::Visible,
        adjusted_height: None,
        legend: None,
    }
}
