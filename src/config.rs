//! Tunables for the visualizer page.
//!
//! Defaults reproduce the stock page. A page can override any subset by
//! embedding a JSON object in `<script id="visualizer-config"
//! type="application/json">`; missing keys keep their defaults.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "visualizer-config";

// Web Audio analyser window limits.
const MIN_FFT_SIZE: usize = 32;
const MAX_FFT_SIZE: usize = 32768;

/// Particles are re-scattered every frame; more than this is a typo.
pub const MAX_PARTICLES: usize = 1024;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Analysis window size; the sample buffer holds half as many bins.
    pub fft_size: usize,
    /// Milliseconds between simulated sample refreshes.
    pub sample_interval_ms: u32,
    /// Bar width is `surface_width / bins * bar_width_factor`.
    pub bar_width_factor: f64,
    pub bar_gap: f64,
    /// Fraction of surface height a full-scale sample reaches.
    pub bar_height_ratio: f64,
    /// Mirror height as a fraction of the bar height.
    pub mirror_height_ratio: f64,
    pub mirror_alpha: f64,
    pub particle_count: usize,
    pub particle_min_radius: f64,
    pub particle_radius_span: f64,
    /// Keep refreshing samples while the visualizer is off, so a resumed
    /// visualizer starts from fresh data.
    pub sample_while_stopped: bool,
    pub storage_key: String,
    pub canvas_id: String,
    pub theme_toggle_id: String,
    pub visualizer_toggle_id: String,
    /// CSS selector of the element that regenerates the palette on click.
    pub palette_refresh_selector: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            fft_size: 256,
            sample_interval_ms: 100,
            bar_width_factor: 2.5,
            bar_gap: 1.0,
            bar_height_ratio: 0.6,
            mirror_height_ratio: 1.0 / 3.0,
            mirror_alpha: 0.3,
            particle_count: 5,
            particle_min_radius: 2.0,
            particle_radius_span: 5.0,
            sample_while_stopped: true,
            storage_key: "theme".to_string(),
            canvas_id: "background-canvas".to_string(),
            theme_toggle_id: "theme-toggle".to_string(),
            visualizer_toggle_id: "visualizer-toggle".to_string(),
            palette_refresh_selector: "footer .small".to_string(),
        }
    }
}

impl VisualizerConfig {
    /// Parses a (possibly partial) JSON document and validates the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of frequency bins, i.e. the sample buffer length.
    pub fn bin_count(&self) -> usize {
        self.fft_size / 2
    }

    /// The sample interval as the `i32` timers take, if it is positive and
    /// fits.
    pub fn interval_ms(&self) -> Option<i32> {
        i32::try_from(self.sample_interval_ms)
            .ok()
            .filter(|&ms| ms > 0)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.fft_size.is_power_of_two()
            || !(MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&self.fft_size)
        {
            return Err(Error::Config(format!(
                "fft_size {} must be a power of two in {MIN_FFT_SIZE}..={MAX_FFT_SIZE}",
                self.fft_size
            )));
        }
        if self.interval_ms().is_none() {
            return Err(Error::Config(format!(
                "sample_interval_ms {} must be in 1..={}",
                self.sample_interval_ms,
                i32::MAX
            )));
        }
        if self.particle_count > MAX_PARTICLES {
            return Err(Error::Config(format!(
                "particle_count {} exceeds {MAX_PARTICLES}",
                self.particle_count
            )));
        }
        for (name, value) in [
            ("bar_height_ratio", self.bar_height_ratio),
            ("mirror_height_ratio", self.mirror_height_ratio),
            ("mirror_alpha", self.mirror_alpha),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::Config(format!("{name} {value} must be in (0, 1]")));
            }
        }
        for (name, value) in [
            ("bar_width_factor", self.bar_width_factor),
            ("bar_gap", self.bar_gap),
            ("particle_min_radius", self.particle_min_radius),
            ("particle_radius_span", self.particle_radius_span),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(Error::Config(format!("{name} {value} must be non-negative")));
            }
        }
        Ok(())
    }
}
