//! Response handler ports.

use serde_json::Value;
use std::sync::Arc;

use crate::response::domain::{ConversionError, Effect};
use crate::types::{TypeHierarchy, TypeKey};

/// Converts a command's return value into an [`Effect`].
///
/// Closures of the form `Fn(&Value) -> Result<Effect, ConversionError>`
/// implement this trait.
pub trait ResponseHandler: Send + Sync {
    /// Converts `value` into an effect.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] when the value cannot be converted. The
    /// failure only affects the current dispatch.
    fn apply(&self, value: &Value) -> Result<Effect, ConversionError>;
}

impl<F> ResponseHandler for F
where
    F: Fn(&Value) -> Result<Effect, ConversionError> + Send + Sync,
{
    fn apply(&self, value: &Value) -> Result<Effect, ConversionError> {
        self(value)
    }
}

/// A rule in the response handler chain.
///
/// The chain asks each factory in registration order for a handler and
/// keeps the first one offered.
pub trait ResponseHandlerFactory: Send + Sync {
    /// Returns a handler for values declared as `declared`, or `None` when
    /// this factory does not apply.
    ///
    /// The answer must depend only on `declared` and `hierarchy`.
    fn create(&self, declared: &TypeKey, hierarchy: &TypeHierarchy) -> Option<Arc<dyn ResponseHandler>>;
}
