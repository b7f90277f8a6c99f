//! Error types for the response handler chain.

use thiserror::Error;

use crate::types::TypeKey;

/// No response handler factory matched a declared return type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no response handler is registered for return type '{return_type}'")]
pub struct UnhandledReturnType {
    /// The declared return type that was looked up.
    pub return_type: TypeKey,
}

/// A matched handler could not convert a value into an effect.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct ConversionError {
    reason: String,
}

impl ConversionError {
    /// Creates a conversion error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
