//! Canvas 2D rendering backend.
//!
//! Implements the RenderBackend trait using HTML Canvas 2D API via web-sys.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color_scale::Rgb;
use crate::error::{HeatviewError, Result};
use crate::render::backend::{RenderBackend, TextStyle};

const FONT_FAMILY: &str = "sans-serif";

fn js_err(context: &str, e: &JsValue) -> HeatviewError {
    HeatviewError::Render(format!("{context}: {e:?}"))
}

/// Canvas 2D renderer implementing the RenderBackend trait
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| "Failed to get 2d context")?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    fn draw_text(&self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        self.ctx
            .set_font(&format!("{}px {}", style.font_size, FONT_FAMILY));
        self.ctx.set_fill_style_str(&style.color.to_hex());
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline(style.baseline.as_str());
        self.ctx
            .translate(x, y)
            .map_err(|e| js_err("translate", &e))?;
        if style.rotation.abs() > f64::EPSILON {
            self.ctx
                .rotate(style.rotation)
                .map_err(|e| js_err("rotate", &e))?;
        }
        self.ctx
            .fill_text(text, 0.0, 0.0)
            .map_err(|e| js_err("fillText", &e))
    }
}

impl RenderBackend for CanvasRenderer {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(HeatviewError::Render(format!(
                "Invalid dimensions for plot, width = {width}, height = {height}"
            )));
        }
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) -> Result<()> {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill_rect(x, y, width, height);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        // The transform must be restored even when a step fails.
        self.ctx.save();
        let outcome = self.draw_text(text, x, y, style);
        self.ctx.restore();
        outcome
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
