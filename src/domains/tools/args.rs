//! Argument extraction and validation.
//!
//! Handlers validate their arguments against the declared parameter shape
//! before building any outbound request. A violation short-circuits the call
//! with an `Invalid arguments: ...` envelope; the handler body never runs
//! against malformed input.

use rmcp::model::JsonObject;
use serde_json::{Map, Value};
use thiserror::Error;

/// A schema violation in the caller-supplied arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    /// A required parameter is absent (or explicitly null).
    #[error("parameter '{0}' is required")]
    Missing(String),

    /// A parameter is present with the wrong JSON type.
    #[error("parameter '{0}' must be {1}")]
    WrongType(String, &'static str),
}

/// Typed access to a tool call's arguments object.
pub struct ToolArgs {
    values: JsonObject,
}

impl ToolArgs {
    /// Wrap a raw arguments object.
    pub fn new(values: JsonObject) -> Self {
        Self { values }
    }

    fn present(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    /// A required string parameter.
    pub fn require_str(&self, key: &str) -> Result<&str, ArgError> {
        match self.present(key) {
            None => Err(ArgError::Missing(key.to_string())),
            Some(v) => v
                .as_str()
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "a string")),
        }
    }

    /// An optional string parameter.
    pub fn optional_str(&self, key: &str) -> Result<Option<&str>, ArgError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_str()
                .map(Some)
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "a string")),
        }
    }

    /// An optional unsigned integer parameter.
    pub fn optional_u64(&self, key: &str) -> Result<Option<u64>, ArgError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "a number")),
        }
    }

    /// An optional boolean parameter.
    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, ArgError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_bool()
                .map(Some)
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "a boolean")),
        }
    }

    /// A required object parameter (e.g. a CRM properties map, which accepts
    /// arbitrary custom property names).
    pub fn require_object(&self, key: &str) -> Result<&Map<String, Value>, ArgError> {
        match self.present(key) {
            None => Err(ArgError::Missing(key.to_string())),
            Some(v) => v
                .as_object()
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "an object")),
        }
    }

    /// An optional object parameter.
    pub fn optional_object(&self, key: &str) -> Result<Option<&Map<String, Value>>, ArgError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_object()
                .map(Some)
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "an object")),
        }
    }

    /// A required array parameter.
    pub fn require_array(&self, key: &str) -> Result<&Vec<Value>, ArgError> {
        match self.present(key) {
            None => Err(ArgError::Missing(key.to_string())),
            Some(v) => v
                .as_array()
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "an array")),
        }
    }

    /// An optional array parameter.
    pub fn optional_array(&self, key: &str) -> Result<Option<&Vec<Value>>, ArgError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => v
                .as_array()
                .map(Some)
                .ok_or_else(|| ArgError::WrongType(key.to_string(), "an array")),
        }
    }

    /// An optional array of strings, comma-joined for use as a query
    /// parameter. The HTTP client never sees arrays; they are pre-joined
    /// here, matching how HubSpot expects multi-value query params.
    pub fn optional_string_list(&self, key: &str) -> Result<Option<String>, ArgError> {
        match self.present(key) {
            None => Ok(None),
            Some(v) => {
                let items = v
                    .as_array()
                    .ok_or_else(|| ArgError::WrongType(key.to_string(), "an array of strings"))?;
                let mut joined = Vec::with_capacity(items.len());
                for item in items {
                    joined.push(
                        item.as_str()
                            .ok_or_else(|| {
                                ArgError::WrongType(key.to_string(), "an array of strings")
                            })?
                            .to_string(),
                    );
                }
                Ok(Some(joined.join(",")))
            }
        }
    }

    /// The raw value of a parameter, if present.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.present(key)
    }
}
