//! heatview - heatmap layout engine for the web
//!
//! Turns rows of numeric samples into a render plan and paints it via
//! WebAssembly and Canvas 2D:
//! - Diverging 17-stop color scale with saturation and missing values
//! - Adaptive cell sizing with row/column label reservation
//! - Column downsampling when data exceeds the available pixels
//! - Optional color legend
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { HeatmapView } from 'heatview';
//! await init();
//! const view = new HeatmapView('heatmap');
//! view.draw(rows, { showRowLabels: true, fitToContainer: true }, sampleNames);
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use heatview::{layout, DisplayOptions, Row};
//!
//! let rows = vec![Row::labelled("Gene1", vec![-5.0, -3.0, 0.0, 3.0])];
//! let plan = layout::render(&rows, 400.0, 200.0, &DisplayOptions::default(), None).unwrap();
//! assert_eq!(plan.cell_count(), 4);
//! ```

pub mod color_scale;
pub mod document;
pub mod error;
pub mod legend;
pub mod types;

// Layout and rendering
pub mod layout;
pub mod render;
#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::HeatmapView;

pub use color_scale::{ColorScale, Rgb};
pub use document::HeatmapDocument;
pub use error::{HeatviewError, LayoutError};
pub use types::*;

/// Lay out a heatmap and return the plan as a JS object.
///
/// `options` and `column_labels` may be `undefined`.
///
/// # Errors
/// Returns an error if the inputs cannot be read or the layout rejects them.
#[wasm_bindgen]
pub fn layout_heatmap(
    rows: JsValue,
    width: f64,
    height: f64,
    options: JsValue,
    column_labels: JsValue,
) -> Result<JsValue, JsValue> {
    let rows: Vec<Row> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| JsValue::from_str(&format!("Invalid rows: {e}")))?;
    let options: Option<DisplayOptions> = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?;
    let column_labels: Option<Vec<String>> = serde_wasm_bindgen::from_value(column_labels)
        .map_err(|e| JsValue::from_str(&format!("Invalid column labels: {e}")))?;

    let plan = layout::render(
        &rows,
        width,
        height,
        &options.unwrap_or_default(),
        column_labels.as_deref(),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Lay out a JSON heatmap document and return the plan as a JSON string.
///
/// # Errors
/// Returns an error if the document is invalid or the layout rejects it.
#[wasm_bindgen]
pub fn layout_heatmap_json(document: &str) -> Result<String, JsValue> {
    let plan = HeatmapDocument::from_json(document)
        .and_then(|doc| doc.layout(None, None))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&plan)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Set the browser console log level ("error", "warn", "info", "debug").
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    viewer::console_log::init(viewer::console_log::parse_level(level));
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
