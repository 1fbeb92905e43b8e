//! Pseudorandom numbers for the simulated samples, palettes and particles.

/// A non-cryptographic PRNG. The same seed yields the same stream, which
/// keeps headless renders reproducible.
#[derive(Debug, Clone)]
pub struct Rng(oorandom::Rand64);

impl Rng {
    pub fn new_with_seed(seed: u128) -> Self {
        Self(oorandom::Rand64::new(seed))
    }

    /// Seeds from whatever the current target offers. Not suitable when the
    /// stream has to be unpredictable.
    #[cfg(target_arch = "wasm32")]
    pub fn from_entropy() -> Self {
        let noise = (js_sys::Math::random() * u64::MAX as f64) as u128;
        let now = js_sys::Date::now() as u128;
        Self::new_with_seed(noise << 64 | now)
    }

    /// Seeds from whatever the current target offers. Not suitable when the
    /// stream has to be unpredictable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_entropy() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        Self::new_with_seed(seed)
    }

    pub fn rand_u64(&mut self) -> u64 {
        self.0.rand_u64()
    }

    /// Uniform in `[0, 1)`.
    pub fn rand_float(&mut self) -> f64 {
        self.0.rand_float()
    }

    pub fn rand_range(&mut self, range: std::ops::Range<u64>) -> u64 {
        self.0.rand_range(range)
    }

    /// Uniform byte in `[0, 255]`.
    pub fn rand_u8(&mut self) -> u8 {
        self.0.rand_range(0..256) as u8
    }
}
