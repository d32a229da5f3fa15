//! Browser adapter error types.

use vitrine_domain::error::VitrineError;
use wasm_bindgen::JsValue;

/// Errors specific to the browser adapter.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Not running in a browsing context.
    #[error("no global `window`")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// `localStorage` is disabled or blocked by privacy settings.
    #[error("local storage is not available")]
    StorageUnavailable,

    /// A browser API threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl WebError {
    /// Convert into a [`VitrineError::Storage`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> VitrineError {
        VitrineError::Storage(Box::new(self))
    }
}

impl From<WebError> for VitrineError {
    fn from(err: WebError) -> Self {
        err.into_domain()
    }
}
