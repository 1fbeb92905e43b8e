//! One frame of the visualizer: bars, their faded mirrors along the top
//! edge, and a handful of particles.

use crate::config::VisualizerConfig;
use crate::palette::Palette;
use crate::rng::Rng;
use crate::surface::Surface;

/// A bar anchored to the bottom edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Index into the palette.
    pub color: usize,
}

impl Bar {
    /// The reflection hanging from the top edge: same x and width, a fraction
    /// of the height.
    pub fn mirror(&self, ratio: f64) -> (f64, f64, f64, f64) {
        (self.x, 0.0, self.width, self.height * ratio)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: usize,
}

/// Palette bucket for bar `index` of `bins`: the bars are split evenly, left
/// to right, across `colors` colours.
pub fn color_bucket(index: usize, bins: usize, colors: usize) -> usize {
    let per_color = bins as f64 / colors as f64;
    (index as f64 / per_color).floor() as usize % colors
}

/// Lays out one bar per sample, left to right with `bar_gap` between them.
/// Bars running past the right edge are still emitted; the surface clips.
pub fn layout_bars<'a>(
    samples: &'a [u8],
    (width, height): (f64, f64),
    colors: usize,
    config: &'a VisualizerConfig,
) -> impl Iterator<Item = Bar> + 'a {
    let bins = samples.len();
    let bar_width = if bins == 0 {
        0.0
    } else {
        width / bins as f64 * config.bar_width_factor
    };
    samples.iter().enumerate().map(move |(i, &sample)| {
        let bar_height = sample as f64 / 255.0 * height * config.bar_height_ratio;
        Bar {
            x: i as f64 * (bar_width + config.bar_gap),
            y: height - bar_height,
            width: bar_width,
            height: bar_height,
            color: color_bucket(i, bins, colors),
        }
    })
}

/// Scatters particles uniformly over the surface.
pub fn scatter_particles(
    rng: &mut Rng,
    (width, height): (f64, f64),
    colors: usize,
    config: &VisualizerConfig,
) -> Vec<Particle> {
    (0..config.particle_count)
        .map(|i| {
            let radius = rng.rand_float() * config.particle_radius_span + config.particle_min_radius;
            Particle {
                x: rng.rand_float() * width,
                y: rng.rand_float() * height,
                radius,
                color: i % colors,
            }
        })
        .collect()
}

/// Clears the surface and paints a complete frame.
pub fn paint_frame<S: Surface + ?Sized>(
    surface: &mut S,
    samples: &[u8],
    palette: &Palette,
    rng: &mut Rng,
    config: &VisualizerConfig,
) {
    let size = surface.size();
    surface.clear();

    for bar in layout_bars(samples, size, palette.len(), config) {
        surface.set_fill(palette.color(bar.color));
        surface.fill_rect(bar.x, bar.y, bar.width, bar.height);

        let (x, y, w, h) = bar.mirror(config.mirror_height_ratio);
        surface.set_global_alpha(config.mirror_alpha);
        surface.fill_rect(x, y, w, h);
        surface.set_global_alpha(1.0);
    }

    for particle in scatter_particles(rng, size, palette.len(), config) {
        surface.set_fill(palette.color(particle.color));
        surface.fill_circle(particle.x, particle.y, particle.radius);
    }
}
