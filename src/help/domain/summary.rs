//! Help entries describing one command definition.

use serde::{Deserialize, Serialize};

use crate::command::domain::{CommandDefinition, CommandId, CommandPath};

/// What a help listing shows for one definition.
///
/// Overloads sharing a path appear as separate entries, each with its own
/// usage line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSummary {
    /// Registration identifier.
    pub id: CommandId,
    /// Command path.
    pub path: CommandPath,
    /// Human-readable description.
    pub description: String,
    /// One-line usage string.
    pub usage: String,
}

impl CommandSummary {
    /// Summarises a registered definition.
    #[must_use]
    pub fn of(id: CommandId, definition: &CommandDefinition) -> Self {
        Self {
            id,
            path: definition.path().clone(),
            description: definition.description().to_owned(),
            usage: definition.usage(),
        }
    }
}
