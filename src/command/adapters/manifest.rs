//! JSON command manifests.
//!
//! A manifest declares command shapes as data; the bodies come from a
//! [`HandlerTable`] keyed by name, so the same manifest can be bound to
//! different implementations in production and in tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::command::domain::{
    CommandDefinition, CommandDomainError, CommandFailure, CommandPath, ParameterConstraints,
    ParameterSpec, ResolvedCommand,
};
use crate::command::ports::invocable::Invocable;
use crate::types::TypeKey;

/// Errors for loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The document is not a valid manifest.
    #[error("failed to parse command manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry describes an invalid command.
    #[error("invalid command '{command}' in manifest: {source}")]
    Domain {
        /// Path as written in the manifest.
        command: String,
        /// Underlying validation error.
        #[source]
        source: CommandDomainError,
    },

    /// An entry names a handler the table does not contain.
    #[error("command '{command}' references unknown handler '{handler}'")]
    UnknownHandler {
        /// Path as written in the manifest.
        command: String,
        /// Missing handler name.
        handler: String,
    },
}

/// A set of command declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandManifest {
    /// Declared commands, in registration order.
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

/// One command declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Command path.
    pub path: CommandPath,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Formal parameters in order.
    #[serde(default)]
    pub parameters: Vec<ParameterEntry>,
    /// Explicit priority; lower runs first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Declared return type.
    #[serde(default = "unit_type")]
    pub returns: TypeKey,
    /// Name of the body in the [`HandlerTable`].
    pub handler: String,
}

/// One parameter declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterEntry {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub type_key: TypeKey,
    /// Value bound when input runs out; makes the parameter optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Binding constraints.
    #[serde(flatten)]
    pub constraints: ParameterConstraints,
}

const fn unit_type() -> TypeKey {
    TypeKey::UNIT
}

impl CommandManifest {
    /// Parses a manifest from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] when the document is malformed or
    /// contains an invalid path or type key.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds definitions for every entry, in manifest order.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] for invalid parameters or an unknown
    /// handler name.
    pub fn into_definitions(
        self,
        handlers: &HandlerTable,
    ) -> Result<Vec<CommandDefinition>, ManifestError> {
        self.commands
            .into_iter()
            .map(|entry| entry.into_definition(handlers))
            .collect()
    }
}

impl CommandEntry {
    fn into_definition(self, handlers: &HandlerTable) -> Result<CommandDefinition, ManifestError> {
        let command = self.path.to_string();
        let invocable = handlers
            .get(&self.handler)
            .ok_or_else(|| ManifestError::UnknownHandler {
                command: command.clone(),
                handler: self.handler.clone(),
            })?;
        let parameters = self
            .parameters
            .into_iter()
            .map(ParameterEntry::into_spec)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ManifestError::Domain { command, source })?;

        Ok(CommandDefinition::builder_for(self.path)
            .description(self.description)
            .parameters(parameters)
            .with_priority(self.priority)
            .returns(self.returns)
            .build_shared(invocable))
    }
}

impl ParameterEntry {
    fn into_spec(self) -> Result<ParameterSpec, CommandDomainError> {
        let spec = ParameterSpec::new(self.name, self.type_key)?.with_constraints(self.constraints);
        Ok(self.default.into_iter().fold(spec, ParameterSpec::with_default))
    }
}

/// Command bodies addressable by name.
#[derive(Clone, Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Arc<dyn Invocable>>,
}

impl HandlerTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a closure body under `name`, replacing any previous entry.
    pub fn insert<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&ResolvedCommand<'_>) -> Result<Value, CommandFailure> + Send + Sync + 'static,
    {
        self.insert_shared(name, Arc::new(body))
    }

    /// Adds a shared body under `name`, replacing any previous entry.
    pub fn insert_shared(&mut self, name: impl Into<String>, body: Arc<dyn Invocable>) -> &mut Self {
        self.handlers.insert(name.into(), body);
        self
    }

    /// Returns the body registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Invocable>> {
        self.handlers.get(name).cloned()
    }

    /// Returns the number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        f.debug_struct("HandlerTable").field("handlers", &names).finish()
    }
}
