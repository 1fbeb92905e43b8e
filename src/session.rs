//! Everything one page session owns.
//!
//! The browser glue keeps a single `Session` behind `Rc<RefCell<..>>` and
//! hands it to each callback: the sample interval writes the buffer, the
//! palette control replaces the palette, and the frame callback reads both.

use crate::config::VisualizerConfig;
use crate::error::Result;
use crate::frame::paint_frame;
use crate::palette::{Palette, PaletteGenerator};
use crate::render_loop::{FrameScheduler, RenderLoop, VisualizerState};
use crate::rng::Rng;
use crate::samples::{RandomSamples, SampleBuffer, SampleSource};
use crate::surface::Surface;

#[derive(Debug)]
pub struct Session<Src: SampleSource = RandomSamples> {
    config: VisualizerConfig,
    samples: SampleBuffer,
    source: Src,
    palette: Palette,
    rng: Rng,
    render: RenderLoop,
}

impl Session<RandomSamples> {
    /// A session fed by simulated samples. Both streams derive from `rng`.
    pub fn simulated(config: VisualizerConfig, mut rng: Rng) -> Self {
        let source = RandomSamples::new(Rng::new_with_seed(rng.rand_u64() as u128));
        Self::new(config, source, rng)
    }
}

impl<Src: SampleSource> Session<Src> {
    /// Generates the first palette up front so the first frame has colours.
    pub fn new(config: VisualizerConfig, source: Src, mut rng: Rng) -> Self {
        let samples = SampleBuffer::for_fft_size(config.fft_size);
        let palette = PaletteGenerator::generate(&mut rng);
        Self {
            config,
            samples,
            source,
            palette,
            rng,
            render: RenderLoop::new(),
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn samples(&self) -> &SampleBuffer {
        &self.samples
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> VisualizerState {
        self.render.state()
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render
    }

    /// Interval callback: refreshes the samples. Returns false when skipped
    /// because the visualizer is off and `sample_while_stopped` is unset.
    pub fn tick(&mut self) -> bool {
        if self.render.state() == VisualizerState::Off && !self.config.sample_while_stopped {
            return false;
        }
        self.source.fill(&mut self.samples);
        true
    }

    /// Replaces the palette wholesale.
    pub fn refresh_palette(&mut self) -> &Palette {
        self.palette = PaletteGenerator::generate(&mut self.rng);
        log::debug!("palette regenerated");
        &self.palette
    }

    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> Result<()> {
        self.render.start(scheduler)
    }

    pub fn toggle_visualizer<S: Surface + ?Sized>(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        surface: &mut S,
    ) -> Result<VisualizerState> {
        self.render.toggle(scheduler, surface)
    }

    /// Frame callback. Re-arms the next frame, then paints unless the
    /// visualizer is off. Returns whether anything was painted.
    pub fn render_frame<S: Surface + ?Sized>(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        surface: &mut S,
    ) -> Result<bool> {
        if !self.render.begin_frame(scheduler)? {
            return Ok(false);
        }
        paint_frame(
            surface,
            self.samples.as_slice(),
            &self.palette,
            &mut self.rng,
            &self.config,
        );
        Ok(true)
    }
}
