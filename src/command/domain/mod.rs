//! Domain model for command definitions and resolution.
//!
//! All types are immutable after construction. Definitions reference their
//! invocable through the [`crate::command::ports::invocable::Invocable`]
//! port; nothing else here depends on a collaborator.

mod binding;
mod definition;
mod error;
mod ids;
mod outcome;
mod parameter;
mod path;
mod priority;
mod resolved;

pub use binding::{ArgumentStream, BindFailure, BindOutcome, CandidateFailure};
pub use definition::{CommandDefinition, CommandDefinitionBuilder};
pub use error::{
    CommandDomainError, CommandFailure, DispatchError, NoMatchingOverload, RegistryError,
};
pub use ids::{CommandId, DispatchId};
pub use outcome::DispatchOutcome;
pub use parameter::{ParameterConstraints, ParameterSpec};
pub use path::CommandPath;
pub use priority::{CandidateKey, compare_priority, order_candidates};
pub use resolved::ResolvedCommand;
