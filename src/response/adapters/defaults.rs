//! Built-in response handlers for the standard types.

use serde_json::Value;

use crate::response::domain::{ConversionError, Effect};
use crate::response::services::ResponseHandlerChainBuilder;
use crate::types::TypeKey;

/// Registers the built-in handlers, in this order:
///
/// 1. `unit` (exact) produces [`Effect::None`]
/// 2. `string` and subtypes produce [`Effect::Reply`]
/// 3. `list` (exact) produces [`Effect::Lines`]
/// 4. `any` and subtypes produce [`Effect::Structured`]
///
/// Types outside the standard hierarchy stay unhandled until the host
/// registers a factory for them.
pub fn install(chain: &mut ResponseHandlerChainBuilder) {
    chain
        .register(TypeKey::UNIT, false, unit)
        .register(TypeKey::STRING, true, reply)
        .register(TypeKey::LIST, false, lines)
        .register(TypeKey::ANY, true, structured);
}

/// Discards the value.
///
/// # Errors
///
/// Never fails.
pub fn unit(_value: &Value) -> Result<Effect, ConversionError> {
    Ok(Effect::None)
}

/// Replies with a string value.
///
/// # Errors
///
/// Returns [`ConversionError`] when the value is not a string.
pub fn reply(value: &Value) -> Result<Effect, ConversionError> {
    value
        .as_str()
        .map(|text| Effect::Reply(text.to_owned()))
        .ok_or_else(|| ConversionError::new(format!("expected a string, found {value}")))
}

/// Replies with one line per list element.
///
/// String elements are used verbatim; other elements are rendered as JSON.
///
/// # Errors
///
/// Returns [`ConversionError`] when the value is not an array.
pub fn lines(value: &Value) -> Result<Effect, ConversionError> {
    let items = value
        .as_array()
        .ok_or_else(|| ConversionError::new(format!("expected a list, found {value}")))?;
    Ok(Effect::Lines(
        items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect(),
    ))
}

/// Passes the value through as structured data.
///
/// # Errors
///
/// Never fails.
pub fn structured(value: &Value) -> Result<Effect, ConversionError> {
    Ok(Effect::Structured(value.clone()))
}
