//! Overload resolution.
//!
//! Candidates are attempted in the order the registry cached at freeze time.
//! Each attempt starts from a fresh copy of the argument stream and either
//! binds every parameter or records why it did not; the first full binding
//! wins and later candidates are never consulted.

use serde_json::Value;
use tracing::debug;

use super::registry::{CommandRegistry, RegisteredCommand};
use crate::command::domain::{
    ArgumentStream, BindFailure, BindOutcome, CandidateFailure, CommandPath, NoMatchingOverload,
    ResolvedCommand,
};
use crate::command::ports::resolver::ParameterResolver;

/// Resolves `arguments` against the overloads of `path`.
///
/// With `reject_trailing` set, a candidate that leaves input unconsumed
/// fails with [`BindFailure::Trailing`].
///
/// # Errors
///
/// Returns [`NoMatchingOverload`] listing every attempted candidate, in
/// attempt order, when none binds. An unknown path yields an empty attempt
/// list.
pub fn resolve_overload<'r, P>(
    registry: &'r CommandRegistry,
    path: &CommandPath,
    arguments: &ArgumentStream,
    resolver: &P,
    reject_trailing: bool,
) -> Result<(&'r RegisteredCommand, ResolvedCommand<'r>), NoMatchingOverload>
where
    P: ParameterResolver + ?Sized,
{
    let mut attempts = Vec::new();

    for command in registry
        .candidates(path)
        .iter()
        .filter_map(|id| registry.get(*id))
    {
        let definition = command.definition();
        match bind_candidate(command, arguments.clone(), resolver, reject_trailing) {
            Ok(values) => {
                debug!(command = %command.id(), %path, attempts = attempts.len(), "overload resolved");
                return Ok((command, ResolvedCommand::new(command.id(), definition, values)));
            }
            Err(failure) => {
                debug!(command = %command.id(), %path, %failure, "overload candidate rejected");
                attempts.push(CandidateFailure {
                    command: command.id(),
                    priority: definition.priority(),
                    failure,
                });
            }
        }
    }

    Err(NoMatchingOverload {
        path: path.clone(),
        attempts,
    })
}

fn bind_candidate<P>(
    command: &RegisteredCommand,
    mut input: ArgumentStream,
    resolver: &P,
    reject_trailing: bool,
) -> Result<Vec<Value>, BindFailure>
where
    P: ParameterResolver + ?Sized,
{
    let parameters = command.definition().parameters();
    let mut values = Vec::with_capacity(parameters.len());

    for parameter in parameters {
        if input.is_exhausted() {
            let default = parameter
                .default_value()
                .cloned()
                .ok_or_else(|| BindFailure::Missing {
                    parameter: parameter.name().to_owned(),
                })?;
            values.push(default);
            continue;
        }

        match resolver.try_bind(&mut input, parameter) {
            BindOutcome::Bound(value) => values.push(value),
            BindOutcome::NoMatch(reason) => {
                return Err(BindFailure::Rejected {
                    parameter: parameter.name().to_owned(),
                    reason,
                });
            }
        }
    }

    if reject_trailing && !input.is_exhausted() {
        return Err(BindFailure::Trailing {
            remaining: input.remaining().to_vec(),
        });
    }

    Ok(values)
}
