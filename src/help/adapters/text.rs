//! Plain-text rendering of help pages through `minijinja`.

use minijinja::{Environment, UndefinedBehavior, context};
use std::fmt;
use thiserror::Error;

use crate::help::domain::{CommandSummary, ResultPage};
use crate::response::domain::Effect;

/// Template used by [`HelpPageRenderer::default`].
pub const DEFAULT_TEMPLATE: &str = "\
{{ kind }} commands (page {{ page }}/{{ page_count }})
{% for entry in entries %}{{ entry.usage }}{% if entry.description %} - {{ entry.description }}{% endif %}
{% endfor %}";

/// The help template failed to compile or render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("help template failed: {0}")]
pub struct HelpRenderError(String);

/// Renders a [`ResultPage`] of command summaries into [`Effect::Lines`].
///
/// The template sees `kind`, `page`, `page_count`, `has_next`,
/// `has_previous` and `entries`; each entry exposes `path`, `usage` and
/// `description`.
#[derive(Clone)]
pub struct HelpPageRenderer {
    environment: Environment<'static>,
    source: String,
}

fn strict_environment() -> Environment<'static> {
    let mut environment = Environment::new();
    environment.set_undefined_behavior(UndefinedBehavior::Strict);
    environment
}

impl HelpPageRenderer {
    /// Compiles a custom template.
    ///
    /// # Errors
    ///
    /// Returns [`HelpRenderError`] when the template has syntax errors.
    pub fn new(source: impl Into<String>) -> Result<Self, HelpRenderError> {
        let template_source = source.into();
        let environment = strict_environment();
        environment
            .template_from_str(&template_source)
            .map_err(|error| HelpRenderError(error.to_string()))?;
        Ok(Self {
            environment,
            source: template_source,
        })
    }

    /// Renders one page, one effect line per rendered line.
    ///
    /// `kind` labels the listing, typically [`crate::help::domain::ListKind::as_str`].
    ///
    /// # Errors
    ///
    /// Returns [`HelpRenderError`] when rendering fails, for example on an
    /// undefined variable.
    pub fn render(&self, kind: &str, page: &ResultPage<'_, CommandSummary>) -> Result<Effect, HelpRenderError> {
        let rendered = self
            .environment
            .render_str(
                &self.source,
                context! {
                    kind => kind,
                    page => page.number(),
                    page_count => page.page_count(),
                    has_next => page.has_next(),
                    has_previous => page.has_previous(),
                    entries => page.items(),
                },
            )
            .map_err(|error| HelpRenderError(error.to_string()))?;

        Ok(Effect::Lines(
            rendered
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned)
                .collect(),
        ))
    }
}

impl Default for HelpPageRenderer {
    fn default() -> Self {
        Self {
            environment: strict_environment(),
            source: DEFAULT_TEMPLATE.to_owned(),
        }
    }
}

impl fmt::Debug for HelpPageRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpPageRenderer")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
