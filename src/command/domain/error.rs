//! Error types for command registration, resolution, and dispatch.

use thiserror::Error;

use super::{CandidateFailure, CommandId, CommandPath};
use crate::command::ports::tokenizer::TokenizeError;
use crate::response::domain::{ConversionError, UnhandledReturnType};
use crate::types::{TypeError, TypeKey};

/// Errors returned while constructing command domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDomainError {
    /// The path has no segments.
    #[error("command path must not be empty")]
    EmptyPath,

    /// A path segment contains characters outside `[a-z0-9_-]`.
    #[error("invalid command path segment '{0}'")]
    InvalidPathSegment(String),

    /// The path has more segments than supported.
    #[error("command path '{0}' exceeds 16 segments")]
    PathTooDeep(String),

    /// A parameter name is empty or malformed.
    #[error("invalid parameter name '{0}'")]
    InvalidParameterName(String),

    /// The parameter list is structurally invalid.
    #[error("invalid parameter definition for '{parameter}' in command '{command}': {reason}")]
    InvalidParameterDefinition {
        /// Command path.
        command: String,
        /// Parameter name.
        parameter: String,
        /// Validation reason.
        reason: String,
    },

    /// A declared type key is invalid.
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Failure reported by a command's own logic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandFailure(String);

impl CommandFailure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// No overload of a path bound against the supplied input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no overload of '{path}' accepts the input ({} candidates tried)", attempts.len())]
pub struct NoMatchingOverload {
    /// The path that was resolved.
    pub path: CommandPath,
    /// Every candidate tried, in attempt order, with its failure.
    pub attempts: Vec<CandidateFailure>,
}

/// Defects detected while freezing a registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No response handler factory matches a command's return type.
    #[error("command '{path}' ({command}) returns '{return_type}', which has no response handler")]
    UnhandledReturnType {
        /// Offending definition.
        command: CommandId,
        /// Its path.
        path: CommandPath,
        /// Its declared return type.
        return_type: TypeKey,
    },

    /// A definition failed schema validation.
    #[error(transparent)]
    InvalidDefinition(#[from] CommandDomainError),

    /// A subtype declaration was rejected.
    #[error(transparent)]
    Hierarchy(#[from] TypeError),
}

/// Errors returned by a dispatch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Input was empty.
    #[error("command input cannot be empty")]
    EmptyInput,

    /// The tokenizer rejected the input.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    /// No registered path is a prefix of the input.
    #[error("no command matches '{input}'")]
    UnknownCommand {
        /// The tokenized input, space-joined.
        input: String,
    },

    /// Every overload of the matched path failed to bind.
    #[error(transparent)]
    NoMatchingOverload(#[from] NoMatchingOverload),

    /// The command ran and reported a failure.
    #[error("command '{path}' failed: {source}")]
    CommandFailed {
        /// Matched path.
        path: CommandPath,
        /// The command's own failure.
        #[source]
        source: CommandFailure,
    },

    /// The response handler could not convert the returned value.
    #[error("response handler for '{return_type}' failed on '{path}': {source}")]
    HandlerConversionFailure {
        /// Matched path.
        path: CommandPath,
        /// Declared return type.
        return_type: TypeKey,
        /// The handler's failure.
        #[source]
        source: ConversionError,
    },

    /// A return type was looked up that no factory handles.
    #[error(transparent)]
    UnhandledReturnType(#[from] UnhandledReturnType),
}
