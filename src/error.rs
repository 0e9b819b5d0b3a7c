//! Error taxonomy for page enhancements
//!
//! Nothing here is ever shown to the visitor. Missing elements skip a handler,
//! missing capabilities degrade, everything else is logged.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnhanceError {
    /// A DOM node the handler depends on is absent
    #[error("missing element: {0}")]
    MissingElement(String),

    /// A browser API is unavailable
    #[error("missing capability: {0}")]
    MissingCapability(&'static str),

    /// Page-supplied configuration failed to parse or validate
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid root margin: {0:?}")]
    InvalidRootMargin(String),

    /// A JS call threw
    #[error("js error: {0}")]
    Js(String),
}

impl EnhanceError {
    /// Missing elements and capabilities are expected on some pages
    pub fn is_degradation(&self) -> bool {
        matches!(
            self,
            EnhanceError::MissingElement(_) | EnhanceError::MissingCapability(_)
        )
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EnhanceError::Js(crate::web::describe(&value))
    }
}
