//! On/off lifecycle of the per-frame render callback.
//!
//! The loop tracks the one outstanding frame request it may own. Starting
//! while a request is pending does nothing; stopping cancels the pending
//! request and clears the surface so no stale frame is left behind.

use std::fmt;

use crate::error::Result;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualizerState {
    #[default]
    On,
    Off,
}

impl VisualizerState {
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    /// Text for the toggle control.
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "Visualizer: On",
            Self::Off => "Visualizer: Off",
        }
    }
}

impl fmt::Display for VisualizerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}

/// Identifies one pending frame request so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(i32);

impl FrameHandle {
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

/// Something that calls back once per display refresh, e.g.
/// `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Asks for the render callback to run on the next refresh.
    fn request_frame(&mut self) -> Result<FrameHandle>;

    /// Withdraws a request that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Debug, Default)]
pub struct RenderLoop {
    state: VisualizerState,
    pending: Option<FrameHandle>,
}

impl RenderLoop {
    /// A loop in the `On` state with nothing scheduled yet; call
    /// [RenderLoop::start] to get frames flowing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> VisualizerState {
        self.state
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Schedules the first frame. A no-op when a frame is already pending.
    pub fn start(&mut self, scheduler: &mut impl FrameScheduler) -> Result<()> {
        if self.pending.is_some() {
            return Ok(());
        }
        self.pending = Some(scheduler.request_frame()?);
        self.state = VisualizerState::On;
        log::debug!("render loop started");
        Ok(())
    }

    /// Cancels the pending frame and wipes the surface. A no-op when already
    /// off.
    pub fn stop<S: Surface + ?Sized>(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        surface: &mut S,
    ) {
        if self.state == VisualizerState::Off {
            return;
        }
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        surface.clear();
        self.state = VisualizerState::Off;
        log::debug!("render loop stopped");
    }

    /// Flips between on and off and returns the new state.
    pub fn toggle<S: Surface + ?Sized>(
        &mut self,
        scheduler: &mut impl FrameScheduler,
        surface: &mut S,
    ) -> Result<VisualizerState> {
        match self.state {
            VisualizerState::On => self.stop(scheduler, surface),
            VisualizerState::Off => self.start(scheduler)?,
        }
        Ok(self.state)
    }

    /// Called when a requested frame fires. Re-arms the next frame and returns
    /// true if this frame should be painted. A callback that fires after a
    /// stop gets false and schedules nothing.
    pub fn begin_frame(&mut self, scheduler: &mut impl FrameScheduler) -> Result<bool> {
        self.pending = None;
        if self.state == VisualizerState::Off {
            return Ok(false);
        }
        self.pending = Some(scheduler.request_frame()?);
        Ok(true)
    }
}
