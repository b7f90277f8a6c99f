//! Command definitions and their builder.

use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::{CommandDomainError, CommandFailure, CommandPath, ParameterSpec, ResolvedCommand};
use crate::command::ports::invocable::Invocable;
use crate::types::TypeKey;

/// Immutable description of one invocable command.
///
/// Several definitions may share a path; they are then overloads of each
/// other and are told apart at resolution time by their parameters and
/// optional explicit priority.
#[derive(Clone)]
pub struct CommandDefinition {
    path: CommandPath,
    description: String,
    parameters: Vec<ParameterSpec>,
    priority: Option<i64>,
    return_type: TypeKey,
    invocable: Arc<dyn Invocable>,
}

impl CommandDefinition {
    /// Starts a definition for a whitespace-separated path.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError`] when the path is invalid.
    pub fn builder(path: &str) -> Result<CommandDefinitionBuilder, CommandDomainError> {
        Ok(Self::builder_for(CommandPath::parse(path)?))
    }

    /// Starts a definition for an already validated path.
    #[must_use]
    pub fn builder_for(path: CommandPath) -> CommandDefinitionBuilder {
        CommandDefinitionBuilder {
            path,
            description: String::new(),
            parameters: Vec::new(),
            priority: None,
            return_type: TypeKey::UNIT,
        }
    }

    /// Returns the command path.
    #[must_use]
    pub const fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the formal parameters in declaration order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Returns the explicit priority, if declared. Lower runs first.
    #[must_use]
    pub const fn priority(&self) -> Option<i64> {
        self.priority
    }

    /// Returns the declared return type.
    #[must_use]
    pub const fn return_type(&self) -> &TypeKey {
        &self.return_type
    }

    /// Returns the underlying invocable.
    #[must_use]
    pub fn invocable(&self) -> &dyn Invocable {
        self.invocable.as_ref()
    }

    /// Returns a one-line usage string such as `user ban <target> [reason...]`.
    ///
    /// Optional parameters are bracketed; greedy and `text` parameters carry
    /// an ellipsis.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut usage = self.path.to_string();
        for parameter in &self.parameters {
            let ellipsis = if parameter.is_greedy() { "..." } else { "" };
            let (open, close) = if parameter.is_optional() { ('[', ']') } else { ('<', '>') };
            usage.push(' ');
            usage.push(open);
            usage.push_str(parameter.name());
            usage.push_str(ellipsis);
            usage.push(close);
        }
        usage
    }

    /// Checks the parameter list for structural defects.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError::InvalidParameterDefinition`] for
    /// duplicate parameter names or a greedy or `text` parameter that is not
    /// last.
    pub fn validate_schema(&self) -> Result<(), CommandDomainError> {
        let mut names = HashSet::new();
        let last = self.parameters.len().saturating_sub(1);
        for (position, parameter) in self.parameters.iter().enumerate() {
            if !names.insert(parameter.name()) {
                return Err(self.invalid_parameter(parameter, "duplicate parameter definition"));
            }
            if parameter.is_greedy() && position != last {
                return Err(self.invalid_parameter(parameter, "greedy parameters must be last"));
            }
        }
        Ok(())
    }

    fn invalid_parameter(&self, parameter: &ParameterSpec, reason: &str) -> CommandDomainError {
        CommandDomainError::InvalidParameterDefinition {
            command: self.path.to_string(),
            parameter: parameter.name().to_owned(),
            reason: reason.to_owned(),
        }
    }
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("path", &self.path)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("priority", &self.priority)
            .field("return_type", &self.return_type)
            .finish_non_exhaustive()
    }
}

/// Builder for [`CommandDefinition`].
#[derive(Debug, Clone)]
pub struct CommandDefinitionBuilder {
    path: CommandPath,
    description: String,
    parameters: Vec<ParameterSpec>,
    priority: Option<i64>,
    return_type: TypeKey,
}

impl CommandDefinitionBuilder {
    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a formal parameter.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends several formal parameters.
    #[must_use]
    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterSpec>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Declares an explicit priority. Lower values are attempted first.
    #[must_use]
    pub const fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets an optional explicit priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Option<i64>) -> Self {
        self.priority = priority;
        self
    }

    /// Declares the return type. Defaults to `unit`.
    #[must_use]
    pub fn returns(mut self, return_type: TypeKey) -> Self {
        self.return_type = return_type;
        self
    }

    /// Finishes the definition with a closure body.
    #[must_use]
    pub fn build<F>(self, body: F) -> CommandDefinition
    where
        F: Fn(&ResolvedCommand<'_>) -> Result<Value, CommandFailure> + Send + Sync + 'static,
    {
        self.build_shared(Arc::new(body))
    }

    /// Finishes the definition with a shared invocable.
    #[must_use]
    pub fn build_shared(self, invocable: Arc<dyn Invocable>) -> CommandDefinition {
        CommandDefinition {
            path: self.path,
            description: self.description,
            parameters: self.parameters,
            priority: self.priority,
            return_type: self.return_type,
            invocable,
        }
    }
}
