//! A full-window bar visualizer for a web page, driven by simulated
//! amplitudes, plus a persisted light/dark theme toggle.
//!
//! The modules below build on the host as well so the behaviour can be
//! tested without a browser; the DOM glue only exists on wasm32.

pub mod config;
pub mod error;
pub mod frame;
pub mod palette;
pub mod render_loop;
pub mod rng;
pub mod samples;
pub mod session;
pub mod surface;
pub mod theme;

pub use config::VisualizerConfig;
pub use error::{Error, Result};
pub use session::Session;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod canvas;
    mod dom;
    mod render;

    pub use canvas::Canvas2dSurface;
    pub use dom::{DocumentTheme, LocalStore};
    pub use render::AnimationFrames;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("visualizer starting");

        render::start().map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{AnimationFrames, Canvas2dSurface, DocumentTheme, LocalStore};
