//! Three-colour triadic palettes.

use std::fmt;

use crate::rng::Rng;

pub const PALETTE_SIZE: usize = 3;

const SATURATION: f64 = 100.0;
const LIGHTNESS: f64 = 50.0;
const ALPHA: f64 = 0.7;

/// A colour as hue (degrees), saturation and lightness (percent), and alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
            alpha,
        }
    }

    /// Converts to 8-bit RGB, ignoring alpha.
    pub fn to_rgb(&self) -> [u8; 3] {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_byte(r), to_byte(g), to_byte(b)]
    }
}

/// Formats as a CSS `hsla()` colour.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Always exactly [PALETTE_SIZE] colours. Replaced wholesale, never edited.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette([Hsla; PALETTE_SIZE]);

impl Palette {
    pub fn colors(&self) -> &[Hsla; PALETTE_SIZE] {
        &self.0
    }

    /// Colour at `index`, wrapping around the palette.
    pub fn color(&self, index: usize) -> &Hsla {
        &self.0[index % PALETTE_SIZE]
    }

    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

pub struct PaletteGenerator;

impl PaletteGenerator {
    /// Picks an integral base hue in `[0, 360)` and spaces the other two
    /// 120 degrees apart.
    pub fn generate(rng: &mut Rng) -> Palette {
        let base = rng.rand_range(0..360) as f64;
        Palette(std::array::from_fn(|i| {
            Hsla::new(base + 120.0 * i as f64, SATURATION, LIGHTNESS, ALPHA)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        let c = Hsla::new(240.0, 100.0, 50.0, 0.7);
        assert_eq!(c.to_string(), "hsla(240, 100%, 50%, 0.7)");
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(Hsla::new(400.0, 100.0, 50.0, 1.0).hue, 40.0);
    }

    #[test]
    fn primary_hues_convert() {
        assert_eq!(Hsla::new(0.0, 100.0, 50.0, 1.0).to_rgb(), [255, 0, 0]);
        assert_eq!(Hsla::new(120.0, 100.0, 50.0, 1.0).to_rgb(), [0, 255, 0]);
        assert_eq!(Hsla::new(240.0, 100.0, 50.0, 1.0).to_rgb(), [0, 0, 255]);
        assert_eq!(Hsla::new(0.0, 0.0, 100.0, 1.0).to_rgb(), [255, 255, 255]);
    }

    #[test]
    fn fixed_saturation_lightness_alpha() {
        let palette = PaletteGenerator::generate(&mut Rng::new_with_seed(3));
        for c in palette.colors() {
            assert_eq!((c.saturation, c.lightness, c.alpha), (100.0, 50.0, 0.7));
            assert_eq!(c.hue.fract(), 0.0);
        }
    }
}
