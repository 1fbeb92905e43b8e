//! Amplitude samples feeding the bars.
//!
//! The page has no audio input. [RandomSamples] stands in for an analyser by
//! refilling the buffer with noise; anything implementing [SampleSource] can
//! replace it without the render path noticing.

use crate::rng::Rng;

/// Fixed-length buffer of byte amplitudes. The length is set at construction
/// and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer(Box<[u8]>);

impl SampleBuffer {
    /// A zeroed buffer holding `len` bins.
    pub fn new(len: usize) -> Self {
        Self(vec![0; len].into_boxed_slice())
    }

    /// A buffer sized like an analyser's frequency data for `fft_size`.
    pub fn for_fft_size(fft_size: usize) -> Self {
        Self::new(fft_size / 2)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<Vec<u8>> for SampleBuffer {
    fn from(value: Vec<u8>) -> Self {
        Self(value.into_boxed_slice())
    }
}

/// Produces the next set of amplitudes into an existing buffer.
pub trait SampleSource {
    fn fill(&mut self, buffer: &mut SampleBuffer);
}

/// Independent uniform bytes on every fill.
#[derive(Debug)]
pub struct RandomSamples {
    rng: Rng,
}

impl RandomSamples {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl SampleSource for RandomSamples {
    fn fill(&mut self, buffer: &mut SampleBuffer) {
        for sample in buffer.as_mut_slice() {
            *sample = self.rng.rand_u8();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyser_sized_buffer() {
        assert_eq!(SampleBuffer::for_fft_size(256).len(), 128);
    }

    #[test]
    fn fill_overwrites_every_bin() {
        let mut buffer = SampleBuffer::new(128);
        let mut source = RandomSamples::new(Rng::new_with_seed(11));
        source.fill(&mut buffer);
        let first = buffer.clone();
        source.fill(&mut buffer);
        assert_eq!(buffer.len(), 128);
        assert_ne!(first, buffer);
        // 128 zero bytes in a row from a uniform source would be remarkable.
        assert!(buffer.as_slice().iter().any(|&s| s != 0));
    }
}
