//! Invocable port.

use serde_json::Value;

use crate::command::domain::{CommandFailure, ResolvedCommand};

/// The executable body of a command definition.
///
/// Closures of the form `Fn(&ResolvedCommand<'_>) -> Result<Value,
/// CommandFailure>` implement this trait.
pub trait Invocable: Send + Sync {
    /// Runs the command with its bound arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CommandFailure`] when the command's own logic fails.
    fn invoke(&self, command: &ResolvedCommand<'_>) -> Result<Value, CommandFailure>;
}

impl<F> Invocable for F
where
    F: Fn(&ResolvedCommand<'_>) -> Result<Value, CommandFailure> + Send + Sync,
{
    fn invoke(&self, command: &ResolvedCommand<'_>) -> Result<Value, CommandFailure> {
        self(command)
    }
}
