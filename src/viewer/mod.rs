//! `HeatmapView` - the browser entry point.
//!
//! This module provides the WASM-exported `HeatmapView` struct that binds a
//! DOM container to the layout engine:
//! - Sizing the heatmap from the container's current dimensions
//! - Creating the canvas and painting the plan onto it
//! - Applying the overflow and height hints to the container
//! - Painting the optional legend into its own element
//!
//! The host re-invokes `redraw()` on container resize.

pub mod console_log;

use log::{debug, LevelFilter};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use crate::error::{HeatviewError, Result};
use crate::layout;
use crate::render::{paint, paint_legend, CanvasRenderer, PaintMode, PaintReport};
use crate::types::{DisplayOptions, Overflow, RenderPlan, Row};

fn dom_err(context: &str, e: &JsValue) -> HeatviewError {
    HeatviewError::Other(format!("{context}: {e:?}"))
}

fn js_input<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| HeatviewError::Other(format!("Invalid {what}: {e}")))
}

/// Inputs of the last draw, kept for redraws.
struct DrawInput {
    rows: Vec<Row>,
    options: DisplayOptions,
    column_labels: Option<Vec<String>>,
}

/// A heatmap painted into a DOM container.
#[wasm_bindgen]
pub struct HeatmapView {
    document: Document,
    container: HtmlElement,
    input: Option<DrawInput>,
    plan: Option<RenderPlan>,
}

#[wasm_bindgen]
impl HeatmapView {
    /// Bind a view to the element with id `container_id`.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> std::result::Result<HeatmapView, JsValue> {
        console_error_panic_hook::set_once();
        console_log::init(LevelFilter::Warn);

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{container_id}'")))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("Container is not an HTML element"))?;

        Ok(Self {
            document,
            container,
            input: None,
            plan: None,
        })
    }

    /// Lay out and paint `rows` (array of `{label?, values}`), with optional
    /// display options and column labels. Returns the paint report.
    pub fn draw(
        &mut self,
        rows: JsValue,
        options: JsValue,
        column_labels: JsValue,
    ) -> std::result::Result<JsValue, JsValue> {
        let input = DrawInput {
            rows: js_input(rows, "rows")?,
            options: js_input::<Option<DisplayOptions>>(options, "options")?.unwrap_or_default(),
            column_labels: js_input(column_labels, "column labels")?,
        };
        let report = self.paint_input(&input)?;
        self.input = Some(input);
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    /// Repeat the last draw at the container's current size.
    pub fn redraw(&mut self) -> std::result::Result<JsValue, JsValue> {
        let Some(input) = self.input.take() else {
            return Ok(JsValue::UNDEFINED);
        };
        let outcome = self.paint_input(&input);
        self.input = Some(input);
        Ok(serde_wasm_bindgen::to_value(&outcome?)?)
    }

    /// Size the container to `width` x `height` pixels and redraw.
    pub fn resize(&mut self, width: f64, height: f64) -> std::result::Result<JsValue, JsValue> {
        let style = self.container.style();
        style
            .set_property("width", &format!("{width}px"))
            .map_err(|e| dom_err("width", &e))?;
        style
            .set_property("height", &format!("{height}px"))
            .map_err(|e| dom_err("height", &e))?;
        self.redraw()
    }

    /// Remove the painted heatmap from the container, and its legend from
    /// the legend target.
    pub fn clear(&mut self) {
        self.container.set_inner_html("");
        if let Some(legend) = self.plan.take().and_then(|plan| plan.legend) {
            if let Some(target) = self.document.get_element_by_id(&legend.target) {
                target.set_inner_html("");
            }
        }
    }

    /// The plan of the last successful draw, or `undefined`.
    pub fn plan(&self) -> std::result::Result<JsValue, JsValue> {
        match &self.plan {
            Some(plan) => Ok(serde_wasm_bindgen::to_value(plan)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

impl HeatmapView {
    fn paint_input(&mut self, input: &DrawInput) -> Result<PaintReport> {
        self.clear();

        let width = f64::from(self.container.client_width());
        let height = f64::from(self.container.client_height());
        let plan = layout::render(
            &input.rows,
            width,
            height,
            &input.options,
            input.column_labels.as_deref(),
        )?;

        let style = self.container.style();
        let overflow = match plan.overflow {
            Overflow::Scroll => "auto",
            Overflow::Visible => "inherit",
        };
        style
            .set_property("overflow", overflow)
            .map_err(|e| dom_err("overflow", &e))?;
        style
            .set_property("position", "relative")
            .map_err(|e| dom_err("position", &e))?;
        if let Some(adjusted) = plan.adjusted_height {
            style
                .set_property("height", &format!("{adjusted}px"))
                .map_err(|e| dom_err("height", &e))?;
        }

        let mut report = PaintReport::default();
        if plan.is_empty() {
            debug!("heatmap view: nothing to paint");
            self.plan = Some(plan);
            return Ok(report);
        }

        let mut renderer = CanvasRenderer::new(self.append_canvas(&self.container)?)?;
        report.absorb(paint(&plan, &mut renderer, PaintMode::BestEffort)?);

        if let Some(legend) = &plan.legend {
            match self.document.get_element_by_id(&legend.target) {
                Some(target) => {
                    target.set_inner_html("");
                    let mut renderer = CanvasRenderer::new(self.append_canvas(&target)?)?;
                    report.absorb(paint_legend(legend, &mut renderer, PaintMode::BestEffort)?);
                }
                None => log::warn!("legend target '{}' not found", legend.target),
            }
        }

        self.plan = Some(plan);
        Ok(report)
    }

    fn append_canvas(&self, parent: &web_sys::Element) -> Result<HtmlCanvasElement> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|e| dom_err("create canvas", &e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Failed to cast to HtmlCanvasElement")?;
        parent
            .append_child(&canvas)
            .map_err(|e| dom_err("append canvas", &e))?;
        Ok(canvas)
    }
}
