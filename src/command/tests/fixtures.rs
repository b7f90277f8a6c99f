//! Shared builders for command unit tests.

use serde_json::{Value, json};

use crate::command::domain::{CommandDefinition, CommandFailure, ParameterSpec, ResolvedCommand};
use crate::types::TypeKey;

/// Command body that returns nothing.
pub fn noop(_command: &ResolvedCommand<'_>) -> Result<Value, CommandFailure> {
    Ok(Value::Null)
}

/// Command body that echoes its registration index.
pub fn echo_id(command: &ResolvedCommand<'_>) -> Result<Value, CommandFailure> {
    Ok(json!(command.id().index()))
}

/// Builds a string parameter.
pub fn string_param(name: &str) -> ParameterSpec {
    ParameterSpec::new(name, TypeKey::STRING).expect("valid parameter name")
}

/// Builds an integer parameter.
pub fn integer_param(name: &str) -> ParameterSpec {
    ParameterSpec::new(name, TypeKey::INTEGER).expect("valid parameter name")
}

/// Builds a free-text parameter.
pub fn text_param(name: &str) -> ParameterSpec {
    ParameterSpec::new(name, TypeKey::TEXT).expect("valid parameter name")
}

/// Builds a `unit`-returning definition with the given parameters and
/// priority.
pub fn definition(
    path: &str,
    parameters: impl IntoIterator<Item = ParameterSpec>,
    priority: Option<i64>,
) -> CommandDefinition {
    CommandDefinition::builder(path)
        .expect("valid path")
        .parameters(parameters)
        .with_priority(priority)
        .build(noop)
}
