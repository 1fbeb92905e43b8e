use thiserror::Error;

/// Errors raised while wiring or driving the visualizer.
#[derive(Error, Debug)]
pub enum Error {
    /// A DOM element the page depends on is absent.
    #[error("element not found: {0}")]
    MissingElement(String),
    /// The environment lacks a capability (2D context, local storage, ...).
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// A browser call threw; carries the stringified JS value.
    #[error("js error: {0}")]
    Js(String),
    /// The frame scheduler refused a request.
    #[error("frame scheduling failed: {0}")]
    Schedule(String),
    /// Persistent key-value storage failed.
    #[error("storage error: {0}")]
    Storage(String),
    /// Configuration values are out of range.
    #[error("invalid config: {0}")]
    Config(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
