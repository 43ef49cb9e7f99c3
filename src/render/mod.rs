//! Painting render plans onto drawing surfaces.
//!
//! This module provides:
//! - The backend-agnostic [`RenderBackend`] trait
//! - Canvas 2D backend (browser)
//! - A recording backend for inspection and tests
//! - The painter, which walks a [`RenderPlan`] and tolerates per-element
//!   surface failures in best-effort mode

pub mod backend;
pub mod canvas;
pub mod recording;

pub use backend::{RenderBackend, TextBaseline, TextStyle};
pub use canvas::CanvasRenderer;
pub use recording::{DrawOp, RecordingBackend};

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::color_scale::palette;
use crate::error::{HeatviewError, Result};
use crate::types::{ColumnLabelPlan, LegendPlan, RenderPlan};

/// Largest font used for row labels.
const ROW_LABEL_FONT_SIZE: f64 = 10.0;

/// What to do when the surface rejects a single element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaintMode {
    /// Log and skip the element, keep painting the rest.
    #[default]
    BestEffort,
    /// Abort on the first failure.
    Strict,
}

/// Kind of plan element that failed to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Cell,
    RowLabel,
    ColumnLabel,
    LabelHint,
    LegendStop,
    LegendLabel,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cell => "cell",
            Self::RowLabel => "row label",
            Self::ColumnLabel => "column label",
            Self::LabelHint => "label hint",
            Self::LegendStop => "legend stop",
            Self::LegendLabel => "legend label",
        };
        f.write_str(name)
    }
}

/// An element the surface refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCell {
    pub kind: ElementKind,
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub reason: String,
}

/// Outcome of a best-effort paint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintReport {
    /// Elements drawn successfully.
    pub painted: usize,
    pub skipped: Vec<SkippedCell>,
}

impl PaintReport {
    /// Number of skipped heatmap cells (labels and legend excluded).
    pub fn skipped_cells(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| s.kind == ElementKind::Cell)
            .count()
    }

    /// Fold another report (e.g. the legend's) into this one.
    pub fn absorb(&mut self, other: PaintReport) {
        self.painted += other.painted;
        self.skipped.extend(other.skipped);
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    fn settle(
        &mut self,
        outcome: Result<()>,
        mode: PaintMode,
        kind: ElementKind,
        row: Option<usize>,
        column: Option<usize>,
    ) -> Result<()> {
        match outcome {
            Ok(()) => {
                self.painted += 1;
                Ok(())
            }
            Err(e) if mode == PaintMode::Strict => Err(e),
            Err(e) => {
                warn!("skipping {kind} (row {row:?}, column {column:?}): {e}");
                self.skipped.push(SkippedCell {
                    kind,
                    row,
                    column,
                    reason: e.to_string(),
                });
                Ok(())
            }
        }
    }
}

/// Round a logical size up to whole surface pixels.
// Non-finite and negative sizes collapse to 0; the value is bounded before
// the cast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_pixels(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.ceil().min(f64::from(u32::MAX)) as u32
}

fn check_rect(x: f64, y: f64, width: f64, height: f64) -> Result<()> {
    if [x, y, width, height].iter().all(|v| v.is_finite()) && width >= 0.0 && height >= 0.0 {
        Ok(())
    } else {
        Err(HeatviewError::Render(format!(
            "malformed rectangle ({x}, {y}, {width}, {height})"
        )))
    }
}

/// Paint the heatmap surface described by `plan`.
///
/// The surface is resized to the plan's total size and cleared first. A
/// plan without cells only clears the surface and leaves its size alone.
///
/// # Errors
/// Resizing or clearing the surface is always fatal. Element failures are
/// fatal only in [`PaintMode::Strict`].
pub fn paint<B: RenderBackend + ?Sized>(
    plan: &RenderPlan,
    backend: &mut B,
    mode: PaintMode,
) -> Result<PaintReport> {
    let mut report = PaintReport::default();
    if plan.is_empty() {
        backend.clear()?;
        return Ok(report);
    }
    backend.resize(to_pixels(plan.total_width), to_pixels(plan.total_height))?;
    backend.clear()?;

    for cell in plan.cells() {
        let outcome = check_rect(cell.x, cell.y, cell.width, cell.height)
            .and_then(|()| backend.fill_rect(cell.x, cell.y, cell.width, cell.height, cell.color));
        report.settle(
            outcome,
            mode,
            ElementKind::Cell,
            Some(cell.row),
            Some(cell.column),
        )?;
    }

    let label_style = TextStyle::new(ROW_LABEL_FONT_SIZE.min(plan.cell_height), palette::TEXT)
        .with_baseline(TextBaseline::Top);
    for band in &plan.rows {
        let Some(label) = band.label.as_ref().filter(|l| !l.text.is_empty()) else {
            continue;
        };
        let outcome = backend.fill_text(&label.text, label.x, label.y, &label_style);
        report.settle(outcome, mode, ElementKind::RowLabel, Some(band.index), None)?;
    }

    match &plan.column_labels {
        ColumnLabelPlan::None => {}
        ColumnLabelPlan::Rotated { font_size, labels } => {
            for label in labels {
                let style = TextStyle::new(*font_size, palette::TEXT).rotated(label.rotation);
                let outcome = backend.fill_text(&label.text, label.x, label.y, &style);
                report.settle(
                    outcome,
                    mode,
                    ElementKind::ColumnLabel,
                    None,
                    Some(label.column),
                )?;
            }
        }
        ColumnLabelPlan::Hint { text, x, y } => {
            let style = TextStyle::new(ROW_LABEL_FONT_SIZE, palette::TEXT);
            let outcome = backend.fill_text(text, *x, *y, &style);
            report.settle(outcome, mode, ElementKind::LabelHint, None, None)?;
        }
    }

    Ok(report)
}

/// Paint a legend on its own surface.
///
/// # Errors
/// Same policy as [`paint`].
pub fn paint_legend<B: RenderBackend + ?Sized>(
    legend: &LegendPlan,
    backend: &mut B,
    mode: PaintMode,
) -> Result<PaintReport> {
    let mut report = PaintReport::default();
    backend.resize(to_pixels(legend.width), to_pixels(legend.height))?;
    backend.clear()?;

    for (i, stop) in legend.stops.iter().enumerate() {
        let outcome = backend.fill_rect(stop.x, stop.y, stop.width, stop.height, stop.color);
        report.settle(outcome, mode, ElementKind::LegendStop, None, Some(i))?;
    }

    let style = TextStyle::new(legend.font_size, palette::TEXT).with_baseline(TextBaseline::Top);
    for text in [&legend.min_label, &legend.max_label] {
        let outcome = backend.fill_text(&text.text, text.x, text.y, &style);
        report.settle(outcome, mode, ElementKind::LegendLabel, None, None)?;
    }

    Ok(report)
}

/// Discard a previously painted plan from a surface.
///
/// # Errors
/// Propagates the surface's failure to clear.
pub fn clear<B: RenderBackend + ?Sized>(backend: &mut B) -> Result<()> {
    backend.clear()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixels_rounds_up() {
        assert_eq!(to_pixels(10.2), 11);
        assert_eq!(to_pixels(0.0), 0);
        assert_eq!(to_pixels(f64::NAN), 0);
        assert_eq!(to_pixels(-3.0), 0);
    }

    #[test]
    fn test_check_rect_rejects_non_finite() {
        assert!(check_rect(0.0, 0.0, 1.0, 1.0).is_ok());
        assert!(check_rect(f64::INFINITY, 0.0, 1.0, 1.0).is_err());
        assert!(check_rect(0.0, 0.0, -1.0, 1.0).is_err());
    }
}
