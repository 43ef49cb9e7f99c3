//! Column label placement.

use std::f64::consts::FRAC_PI_2;

use super::geometry::{ColumnFit, MAX_COLUMN_LABEL_CHARS};
use crate::types::{ColumnLabel, ColumnLabelPlan};

/// Columns narrower than this get a hint instead of labels.
pub const SHOW_LABEL_MIN_WIDTH: f64 = 9.0;
/// Largest label font.
pub const MAX_LABEL_FONT_SIZE: f64 = 10.0;
/// Distance from the bottom of the label strip to the label baseline origin.
const LABEL_BOTTOM_MARGIN: f64 = 2.0;
/// Beyond this many columns, widening the window will not help.
const HINT_EXPAND_ONLY_COLUMNS: usize = 100;
/// Baseline of the hint line.
const HINT_BASELINE: f64 = 10.0;

pub const HINT_EXPAND: &str = "Click 'expand' to see the sample labels";
pub const HINT_EXPAND_OR_WIDEN: &str =
    "Click 'expand' or try widening the window to see the sample labels";

/// Truncate to at most `max_chars` characters, ending in "..." when cut.
pub fn ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Decide what goes in the column-label strip.
///
/// `strip_height` is the reserved strip; labels are anchored at each
/// column's horizontal center and read bottom to top.
pub fn plan_column_labels(
    labels: Option<&[String]>,
    fit: &ColumnFit,
    fit_to_container: bool,
    strip_height: f64,
) -> ColumnLabelPlan {
    let Some(labels) = labels else {
        return ColumnLabelPlan::None;
    };

    if fit.cell_width >= SHOW_LABEL_MIN_WIDTH {
        let baseline = (strip_height - LABEL_BOTTOM_MARGIN).max(0.0);
        let placed = (0..fit.displayed_columns)
            .filter_map(|column| {
                let text = labels.get(column * fit.stride)?;
                Some(ColumnLabel {
                    column,
                    text: ellipsis(text, MAX_COLUMN_LABEL_CHARS),
                    x: (column as f64 + 0.5) * fit.cell_width,
                    y: baseline,
                    rotation: -FRAC_PI_2,
                })
            })
            .collect();
        return ColumnLabelPlan::Rotated {
            font_size: MAX_LABEL_FONT_SIZE.min(fit.cell_width - 1.0),
            labels: placed,
        };
    }

    if fit_to_container {
        let text = if labels.len() > HINT_EXPAND_ONLY_COLUMNS {
            HINT_EXPAND
        } else {
            HINT_EXPAND_OR_WIDEN
        };
        return ColumnLabelPlan::Hint {
            text: text.to_string(),
            x: 0.0,
            y: HINT_BASELINE.min(strip_height),
        };
    }

    ColumnLabelPlan::None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsis_keeps_short_text() {
        assert_eq!(ellipsis("GSM1234", 125), "GSM1234");
    }

    #[test]
    fn test_ellipsis_total_length() {
        let cut = ellipsis(&"a".repeat(200), 125);
        assert_eq!(cut.chars().count(), 125);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_wide_columns_get_centered_labels() {
        let labels = vec!["s1".to_string(), "s2".to_string()];
        let fit = ColumnFit {
            cell_width: 10.0,
            stride: 1,
            displayed_columns: 2,
        };
        match plan_column_labels(Some(&labels), &fit, false, 16.0) {
            ColumnLabelPlan::Rotated { font_size, labels } => {
                assert_eq!(font_size, 9.0);
                assert_eq!(labels[1].x, 15.0);
                assert_eq!(labels[1].y, 14.0);
            }
            other => panic!("expected rotated labels, got {other:?}"),
        }
    }
}
