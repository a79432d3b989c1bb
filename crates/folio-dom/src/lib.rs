//! Browser adapter for `folio-core`: element lookup, listeners, and the
//! style/class sinks the core state machines draw through.

pub mod events;
pub mod platform;
pub mod render;

use core::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum DomError {
    MissingWindow,
    MissingDocument,
    /// Host API call threw.
    Js(JsValue),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWindow => f.write_str("no global window"),
            Self::MissingDocument => f.write_str("window has no document"),
            Self::Js(value) => write!(f, "host error: {value:?}"),
        }
    }
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> Self {
        match error {
            DomError::Js(value) => value,
            other => JsValue::from_str(&other.to_string()),
        }
    }
}

pub type DomResult<T> = Result<T, DomError>;
