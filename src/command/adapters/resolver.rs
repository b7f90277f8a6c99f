//! Parameter resolver for the built-in types.

use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::command::domain::{ArgumentStream, BindOutcome, ParameterSpec};
use crate::command::ports::resolver::ParameterResolver;
use crate::types::TypeKey;

type TokenParser = Arc<dyn Fn(&str) -> Result<Value, String> + Send + Sync>;

/// Binds `string`, `text`, `integer`, `number` and `boolean` parameters,
/// plus any single-token types registered with
/// [`BuiltinParameterResolver::with_type`].
///
/// - `text` and greedy parameters take the rest of the input, space-joined
/// - `options` restrict string values to the listed literals
/// - `min`/`max` bound integers inclusively
/// - booleans accept `true`/`false`, `yes`/`no` and `on`/`off`
#[derive(Clone, Default)]
pub struct BuiltinParameterResolver {
    custom: BTreeMap<TypeKey, TokenParser>,
}

impl BuiltinParameterResolver {
    /// Creates a resolver for the built-in types only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single-token parser for `type_key`.
    ///
    /// Custom parsers take precedence over the built-in ones for the same key.
    #[must_use]
    pub fn with_type<F>(mut self, type_key: TypeKey, parser: F) -> Self
    where
        F: Fn(&str) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.custom.insert(type_key, Arc::new(parser));
        self
    }
}

impl ParameterResolver for BuiltinParameterResolver {
    fn try_bind(&self, input: &mut ArgumentStream, parameter: &ParameterSpec) -> BindOutcome {
        let type_key = parameter.type_key();
        let token = if parameter.is_greedy() {
            input.take_rest().join(" ")
        } else {
            let Some(next) = input.next_token() else {
                return BindOutcome::no_match("no input left");
            };
            next.to_owned()
        };

        if let Some(parser) = self.custom.get(type_key) {
            return parser(&token).map_or_else(BindOutcome::NoMatch, BindOutcome::Bound);
        }

        match type_key.as_str() {
            "string" | "text" => bind_string(parameter, token),
            "integer" => bind_integer(parameter, &token),
            "number" => bind_number(&token),
            "boolean" => bind_boolean(&token),
            other => BindOutcome::no_match(format!("no resolver for type '{other}'")),
        }
    }
}

fn bind_string(parameter: &ParameterSpec, token: String) -> BindOutcome {
    let options = &parameter.constraints().options;
    if options.is_empty() || options.contains(&token) {
        BindOutcome::Bound(Value::String(token))
    } else {
        BindOutcome::no_match(format!("expected one of [{}]", options.join(", ")))
    }
}

fn bind_integer(parameter: &ParameterSpec, token: &str) -> BindOutcome {
    let Ok(parsed) = token.parse::<i64>() else {
        return BindOutcome::no_match(format!("'{token}' is not an integer"));
    };
    let constraints = parameter.constraints();
    if constraints.min.is_some_and(|min| parsed < min) || constraints.max.is_some_and(|max| parsed > max) {
        return BindOutcome::no_match(format!(
            "{parsed} is outside {}..={}",
            bound_label(constraints.min),
            bound_label(constraints.max)
        ));
    }
    BindOutcome::Bound(Value::Number(Number::from(parsed)))
}

fn bound_label(bound: Option<i64>) -> String {
    bound.map_or_else(|| "*".to_owned(), |value| value.to_string())
}

fn bind_number(token: &str) -> BindOutcome {
    if let Ok(integer) = token.parse::<i64>() {
        return BindOutcome::Bound(Value::Number(Number::from(integer)));
    }
    token
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or_else(
            || BindOutcome::no_match(format!("'{token}' is not a finite number")),
            |number| BindOutcome::Bound(Value::Number(number)),
        )
}

fn bind_boolean(token: &str) -> BindOutcome {
    match token.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => BindOutcome::Bound(Value::Bool(true)),
        "false" | "no" | "off" => BindOutcome::Bound(Value::Bool(false)),
        _ => BindOutcome::no_match(format!("'{token}' is not a boolean")),
    }
}

impl fmt::Debug for BuiltinParameterResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinParameterResolver")
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}
