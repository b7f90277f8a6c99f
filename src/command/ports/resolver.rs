//! Parameter resolution port.
//!
//! The engine never interprets parameter semantics itself: every binding
//! attempt goes through a [`ParameterResolver`].

use crate::command::domain::{ArgumentStream, BindOutcome, ParameterSpec};

/// Port for binding one formal parameter against input.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Consume the tokens they bind from `input`
/// - Report ordinary mismatches as [`BindOutcome::NoMatch`], never panic
/// - Be stateless and thread-safe
///
/// The engine only calls `try_bind` while `input` still has tokens; it binds
/// defaults for exhausted input itself.
#[cfg_attr(test, mockall::automock)]
pub trait ParameterResolver: Send + Sync {
    /// Attempts to bind `parameter` from the front of `input`.
    fn try_bind(&self, input: &mut ArgumentStream, parameter: &ParameterSpec) -> BindOutcome;
}
