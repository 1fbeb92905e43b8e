#![allow(dead_code)]

use bars_wasm::error::{Error, Result};
use bars_wasm::render_loop::{FrameHandle, FrameScheduler};
use bars_wasm::samples::SampleSource;
use bars_wasm::surface::Surface;
use bars_wasm::Session;

/// A frame scheduler the test fires by hand.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: i32,
    pub pending: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub requests: usize,
    pub refuse: bool,
}

impl ManualFrames {
    /// A scheduler that rejects every request.
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Pops the oldest outstanding request, as a display refresh would.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        if self.refuse {
            return Err(Error::Schedule("refused".into()));
        }
        self.next_id += 1;
        self.requests += 1;
        let handle = FrameHandle::new(self.next_id);
        self.pending.push(handle);
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}

/// Runs `refreshes` display refreshes, returning how many frames painted.
pub fn run_refreshes<Src: SampleSource, S: Surface>(
    session: &mut Session<Src>,
    frames: &mut ManualFrames,
    surface: &mut S,
    refreshes: usize,
) -> usize {
    let mut painted = 0;
    for _ in 0..refreshes {
        if frames.fire().is_some() && session.render_frame(frames, surface).unwrap() {
            painted += 1;
        }
    }
    painted
}
