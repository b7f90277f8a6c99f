//! Formal parameter specifications.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CommandDomainError;
use crate::types::TypeKey;

/// Constraints a parameter resolver may enforce while binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterConstraints {
    /// Allowed literal values; empty means unrestricted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Inclusive lower bound for integer parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Inclusive upper bound for integer parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Whether the parameter consumes all remaining input.
    pub greedy: bool,
}

/// One formal parameter of a command definition.
///
/// Manifests describe parameters through
/// [`crate::command::adapters::manifest::ParameterEntry`], which validates
/// the name on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    name: String,
    #[serde(rename = "type")]
    type_key: TypeKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    constraints: ParameterConstraints,
}

impl ParameterSpec {
    /// Creates a required parameter.
    ///
    /// The name is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError::InvalidParameterName`] when the name is
    /// empty or contains characters outside ASCII alphanumerics, `-` and `_`.
    pub fn new(name: impl Into<String>, type_key: TypeKey) -> Result<Self, CommandDomainError> {
        let raw = name.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let is_valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'));
        if !is_valid {
            return Err(CommandDomainError::InvalidParameterName(raw));
        }

        Ok(Self {
            name: normalized,
            type_key,
            default: None,
            constraints: ParameterConstraints::default(),
        })
    }

    /// Makes the parameter optional, binding `default` when input runs out.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Restricts the parameter to the given literal options.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.constraints.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Bounds an integer parameter to `min..=max`.
    #[must_use]
    pub const fn with_range(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.constraints.min = min;
        self.constraints.max = max;
        self
    }

    /// Makes the parameter consume the rest of the input.
    #[must_use]
    pub const fn greedy(mut self) -> Self {
        self.constraints.greedy = true;
        self
    }

    /// Replaces all constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: ParameterConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    /// Returns the default value, if any.
    #[must_use]
    pub const fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Returns the binding constraints.
    #[must_use]
    pub const fn constraints(&self) -> &ParameterConstraints {
        &self.constraints
    }

    /// Returns whether input may omit this parameter.
    #[must_use]
    pub const fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    /// Returns whether this parameter consumes the rest of the input.
    ///
    /// `text` parameters are always greedy.
    #[must_use]
    pub fn is_greedy(&self) -> bool {
        self.constraints.greedy || self.type_key == TypeKey::TEXT
    }
}
