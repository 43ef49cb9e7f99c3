//! JSON document tests
//!
//! The wire shape accepted by the CLI and `layout_heatmap_json`, and the
//! camelCase plan it produces.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use heatview::document::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use heatview::error::MismatchSource;
use heatview::{ColumnLabelPlan, HeatmapDocument, HeatviewError, LayoutError, Overflow};

const FULL: &str = r#"{
    "rows": [
        {"label": "Gene1", "values": [-5, -3, 0, 3]},
        {"label": "Gene2", "values": [1.5, null, 0.25, -0.5]}
    ],
    "columnLabels": ["GSM1", "GSM2", "GSM3", "GSM4"],
    "options": {
        "showRowLabels": true,
        "fitToContainer": true,
        "maxCellHeight": 20,
        "legend": {"show": true, "target": "legend", "vertical": true}
    },
    "width": 400,
    "height": 300
}"#;

#[test]
fn test_full_document_parses() {
    let doc = HeatmapDocument::from_json(FULL).unwrap();
    assert_eq!(doc.rows.len(), 2);
    assert!(doc.rows[1].values[1].is_nan());
    assert_eq!(doc.column_labels.as_ref().unwrap().len(), 4);
    assert!(doc.options.show_row_labels);
    assert!(doc.options.fit_to_container);
    assert_eq!(doc.options.max_cell_height, 20.0);
    assert!(doc.options.legend.as_ref().unwrap().vertical);
    assert_eq!(doc.container_size(None, None), (400.0, 300.0));
}

#[test]
fn test_full_document_lays_out() {
    let plan = HeatmapDocument::from_json(FULL)
        .unwrap()
        .layout(None, None)
        .unwrap();

    assert_eq!(plan.cell_height, 20.0);
    assert_eq!(plan.row_label_width, 40.0);
    assert_eq!(plan.column_label_height, 32.0);
    assert_eq!(plan.cell_width, 90.0);
    assert_eq!(plan.overflow, Overflow::Visible);
    assert!(plan.legend.is_some());
    assert!(matches!(plan.column_labels, ColumnLabelPlan::Rotated { .. }));
    assert_eq!(plan.cell(1, 1).unwrap().value, None);
}

#[test]
fn test_plan_serializes_camel_case() {
    let plan = HeatmapDocument::from_json(FULL)
        .unwrap()
        .layout(None, None)
        .unwrap();
    let json: serde_json::Value = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["cellWidth"], 90.0);
    assert_eq!(json["columnStride"], 1);
    assert_eq!(json["overflow"], "visible");
    assert_eq!(json["columnLabels"]["kind"], "rotated");
    assert_eq!(json["rows"][0]["cells"][0]["color"]["r"], 0);
    assert!(json["rows"][1]["cells"][1]["value"].is_null());
    assert_eq!(json["legend"]["orientation"], "vertical");
}

#[test]
fn test_defaults_fill_missing_fields() {
    let doc = HeatmapDocument::from_json(r#"{"rows":[{"values":[1]}],"options":{}}"#).unwrap();
    assert_eq!(doc.options, heatview::DisplayOptions::default());
    assert!(doc.column_labels.is_none());
    assert_eq!(doc.container_size(None, None), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let err = HeatmapDocument::from_json("{not json").unwrap_err();
    assert!(matches!(err, HeatviewError::Json(_)));

    let err = HeatmapDocument::from_json(r#"{"columnLabels":[]}"#).unwrap_err();
    assert!(matches!(err, HeatviewError::Json(_)));
}

#[test]
fn test_layout_errors_carry_context() {
    let doc =
        HeatmapDocument::from_json(r#"{"rows":[{"values":[1,2]},{"values":[1]}]}"#).unwrap();
    let err = doc.layout(None, None).unwrap_err();
    assert!(matches!(
        err,
        HeatviewError::Layout(LayoutError::RowLengthMismatch {
            origin: MismatchSource::Row(1),
            ..
        })
    ));
    assert_eq!(err.to_string(), "Layout: row 1 has 1 values, expected 2");
}

#[test]
fn test_size_override() {
    let doc = HeatmapDocument::from_json(FULL).unwrap();
    let plan = doc.layout(Some(1000.0), None).unwrap();
    assert_eq!(plan.cell_width, 240.0);
}
