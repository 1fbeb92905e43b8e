//! Drawing surfaces.
//!
//! [Surface] is the small set of 2D primitives a frame needs. The browser
//! implementation wraps a canvas 2D context; [PixelSurface] rasterises into
//! an RGBA buffer so frames can be rendered and inspected without a browser.

use crate::palette::Hsla;

pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    /// Erases everything to transparent.
    fn clear(&mut self);

    fn set_fill(&mut self, color: &Hsla);

    /// Opacity multiplied into every subsequent fill.
    fn set_global_alpha(&mut self, alpha: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// RGBA software raster. A pixel is covered when its centre lies inside the
/// shape; fills blend source-over.
#[derive(Clone, Debug)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    fill: ([u8; 3], f64),
    global_alpha: f64,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
            fill: ([0, 0, 0], 1.0),
            global_alpha: 1.0,
        }
    }

    /// Resizes and clears, like assigning a canvas's dimensions.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height * 4];
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * self.width + x) * 4;
        let mut px = [0; 4];
        px.copy_from_slice(&self.pixels[offset..offset + 4]);
        px
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&b| b == 0)
    }

    fn blend(&mut self, x: usize, y: usize) {
        let ([r, g, b], color_alpha) = self.fill;
        let a = (color_alpha * self.global_alpha).clamp(0.0, 1.0);
        let offset = (y * self.width + x) * 4;
        let dst = &mut self.pixels[offset..offset + 4];
        for (d, s) in dst.iter_mut().zip([r, g, b]) {
            *d = (s as f64 * a + *d as f64 * (1.0 - a)).round() as u8;
        }
        dst[3] = (255.0 * a + dst[3] as f64 * (1.0 - a)).round() as u8;
    }

    /// Pixel index range whose centres fall in `[start, end)`.
    fn span(start: f64, end: f64, limit: usize) -> std::ops::Range<usize> {
        let lo = (start - 0.5).ceil().max(0.0) as usize;
        let hi = ((end - 0.5).ceil().max(0.0) as usize).min(limit);
        lo.min(hi)..hi
    }
}

impl Surface for PixelSurface {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn set_fill(&mut self, color: &Hsla) {
        self.fill = (color.to_rgb(), color.alpha);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        for py in Self::span(y, y + height, self.height) {
            for px in Self::span(x, x + width, self.width) {
                self.blend(px, py);
            }
        }
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        for py in Self::span(y - radius, y + radius, self.height) {
            for px in Self::span(x - radius, x + radius, self.width) {
                let dx = px as f64 + 0.5 - x;
                let dy = py as f64 + 0.5 - y;
                if dx * dx + dy * dy <= radius * radius {
                    self.blend(px, py);
                }
            }
        }
    }
}
