//! A definition matched against concrete input.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{CommandDefinition, CommandId, CommandPath, ParameterSpec};

/// The outcome of binding one definition against input.
///
/// Holds a borrow of the frozen definition and the values bound to each of
/// its parameters, in declaration order. Lives for one invocation.
#[derive(Debug, Clone)]
pub struct ResolvedCommand<'r> {
    id: CommandId,
    definition: &'r CommandDefinition,
    arguments: Vec<Value>,
}

impl<'r> ResolvedCommand<'r> {
    /// Creates a resolved command.
    ///
    /// `arguments` must hold one value per parameter of `definition`.
    #[must_use]
    pub const fn new(id: CommandId, definition: &'r CommandDefinition, arguments: Vec<Value>) -> Self {
        Self {
            id,
            definition,
            arguments,
        }
    }

    /// Returns the registration index of the matched definition.
    #[must_use]
    pub const fn id(&self) -> CommandId {
        self.id
    }

    /// Returns the matched definition.
    #[must_use]
    pub const fn definition(&self) -> &'r CommandDefinition {
        self.definition
    }

    /// Returns the matched path.
    #[must_use]
    pub const fn path(&self) -> &'r CommandPath {
        self.definition.path()
    }

    /// Returns the value bound to the named parameter.
    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.definition
            .parameters()
            .iter()
            .position(|parameter| parameter.name() == name)
            .and_then(|position| self.arguments.get(position))
    }

    /// Deserialises the named argument into `T`.
    ///
    /// Returns `None` when the parameter is unknown or the value does not
    /// have the shape of `T`.
    #[must_use]
    pub fn argument_as<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.argument(name)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Returns every parameter paired with its bound value.
    pub fn arguments(&self) -> impl Iterator<Item = (&'r ParameterSpec, &Value)> {
        self.definition.parameters().iter().zip(&self.arguments)
    }
}
