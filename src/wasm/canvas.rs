use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Error, Result};
use crate::palette::Hsla;
use crate::surface::Surface;

/// A `<canvas>` and its 2D context. Cloning shares the same canvas.
#[derive(Clone, Debug)]
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| Error::Unsupported("canvas 2d context".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::Unsupported("canvas 2d context".into()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Matches the canvas to the viewport. Resizing clears it.
    pub fn fit_to_window(&self) -> Result<()> {
        let window = window().ok_or_else(|| Error::Unsupported("no window".into()))?;
        let w = window.inner_width()?.as_f64().unwrap_or_default();
        let h = window.inner_height()?.as_f64().unwrap_or_default();
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        Ok(())
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn set_fill(&mut self, color: &Hsla) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(x, y, radius, 0.0, TAU) {
            log::warn!("arc rejected: {e:?}");
            return;
        }
        self.ctx.fill();
    }
}
