//! Response handler rendering values through a `minijinja` template.

use minijinja::{Environment, UndefinedBehavior};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::response::domain::{ConversionError, Effect};
use crate::response::ports::handler::ResponseHandler;

/// The template source failed to compile.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid response template: {0}")]
pub struct TemplateCompileError(String);

/// Renders the returned value through a template.
///
/// The value is available as `value`; when it is an object its fields are
/// also exposed at the top level. Undefined variables are errors.
///
/// # Examples
///
/// ```
/// use corbel::response::adapters::template::TemplateResponseHandler;
/// use corbel::response::domain::Effect;
/// use corbel::response::ports::handler::ResponseHandler;
/// use serde_json::json;
///
/// let handler = TemplateResponseHandler::new("banned {{ target }} for {{ days }}d")
///     .expect("template compiles");
/// let effect = handler
///     .apply(&json!({"target": "mallory", "days": 3}))
///     .expect("render succeeds");
/// assert_eq!(effect, Effect::Reply("banned mallory for 3d".to_owned()));
/// ```
pub struct TemplateResponseHandler {
    environment: Environment<'static>,
    source: String,
    split_lines: bool,
}

impl TemplateResponseHandler {
    /// Compiles `source` into a handler producing [`Effect::Reply`].
    ///
    /// # Errors
    ///
    /// Returns [`TemplateCompileError`] when the template has syntax errors.
    pub fn new(source: impl Into<String>) -> Result<Self, TemplateCompileError> {
        let template_source = source.into();
        let mut environment = Environment::new();
        environment.set_undefined_behavior(UndefinedBehavior::Strict);
        environment
            .template_from_str(&template_source)
            .map_err(|error| TemplateCompileError(error.to_string()))?;

        Ok(Self {
            environment,
            source: template_source,
            split_lines: false,
        })
    }

    /// Produces [`Effect::Lines`], one per rendered line, instead of a single
    /// reply.
    #[must_use]
    pub const fn split_lines(mut self) -> Self {
        self.split_lines = true;
        self
    }
}

impl ResponseHandler for TemplateResponseHandler {
    fn apply(&self, value: &Value) -> Result<Effect, ConversionError> {
        let mut context = Map::new();
        if let Value::Object(fields) = value {
            context.extend(fields.iter().map(|(key, field)| (key.clone(), field.clone())));
        }
        context.insert("value".to_owned(), value.clone());

        let rendered = self
            .environment
            .render_str(&self.source, context)
            .map_err(|error| ConversionError::new(error.to_string()))?;

        if self.split_lines {
            Ok(Effect::Lines(rendered.lines().map(str::to_owned).collect()))
        } else {
            Ok(Effect::Reply(rendered))
        }
    }
}

impl fmt::Debug for TemplateResponseHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateResponseHandler")
            .field("source", &self.source)
            .field("split_lines", &self.split_lines)
            .finish_non_exhaustive()
    }
}
