//! Common test fixtures and assertion helpers.
//!
//! Builders for row matrices and display options with known shapes, so the
//! layout tests can reason about exact pixel values.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

use heatview::layout::render;
use heatview::{DisplayOptions, LegendOptions, RenderPlan, Row};

// ============================================================================
// Row Builders
// ============================================================================

/// `rows` unlabelled rows of `columns` copies of `value`.
pub fn uniform_rows(rows: usize, columns: usize, value: f64) -> Vec<Row> {
    (0..rows).map(|_| Row::new(vec![value; columns])).collect()
}

/// Rows whose values sweep linearly from -4 to +4 across the columns.
pub fn ramp_rows(rows: usize, columns: usize) -> Vec<Row> {
    let step = if columns > 1 {
        8.0 / (columns - 1) as f64
    } else {
        0.0
    };
    (0..rows)
        .map(|_| Row::new((0..columns).map(|c| -4.0 + c as f64 * step).collect()))
        .collect()
}

/// One labelled row per label, each with `columns` zeros.
pub fn labelled_rows(labels: &[&str], columns: usize) -> Vec<Row> {
    labels
        .iter()
        .map(|label| Row::labelled(*label, vec![0.0; columns]))
        .collect()
}

/// `GSM0`, `GSM1`, ... style column labels.
pub fn column_labels(count: usize, prefix: &str) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

// ============================================================================
// Option Builders
// ============================================================================

pub fn fit() -> DisplayOptions {
    DisplayOptions {
        fit_to_container: true,
        ..DisplayOptions::default()
    }
}

pub fn fit_with_row_labels() -> DisplayOptions {
    DisplayOptions {
        fit_to_container: true,
        show_row_labels: true,
        ..DisplayOptions::default()
    }
}

pub fn with_legend(options: DisplayOptions, vertical: bool) -> DisplayOptions {
    DisplayOptions {
        legend: Some(LegendOptions {
            show: true,
            target: "legend".to_string(),
            vertical,
        }),
        ..options
    }
}

// ============================================================================
// Layout Helpers
// ============================================================================

/// Lay out and panic on error.
pub fn plan(rows: &[Row], width: f64, height: f64, options: &DisplayOptions) -> RenderPlan {
    render(rows, width, height, options, None).expect("layout should succeed")
}

/// Lay out with column labels and panic on error.
pub fn plan_with_labels(
    rows: &[Row],
    width: f64,
    height: f64,
    options: &DisplayOptions,
    labels: &[String],
) -> RenderPlan {
    render(rows, width, height, options, Some(labels)).expect("layout should succeed")
}

/// Buckets of one band, left to right.
pub fn band_buckets(plan: &RenderPlan, row: usize) -> Vec<Option<usize>> {
    plan.rows[row].cells.iter().map(|c| c.bucket).collect()
}

pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}
