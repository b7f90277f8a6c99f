//! Dispatch outcomes.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::{CommandId, CommandPath, DispatchId};
use crate::response::domain::Effect;

/// What a successful dispatch produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    id: DispatchId,
    command: CommandId,
    path: CommandPath,
    effect: Effect,
    dispatched_at: DateTime<Utc>,
}

impl DispatchOutcome {
    /// Creates an outcome stamped with the clock's current time.
    #[must_use]
    pub fn new(command: CommandId, path: CommandPath, effect: Effect, clock: &impl Clock) -> Self {
        Self {
            id: DispatchId::new(),
            command,
            path,
            effect,
            dispatched_at: clock.utc(),
        }
    }

    /// Returns the dispatch identifier.
    #[must_use]
    pub const fn id(&self) -> DispatchId {
        self.id
    }

    /// Returns the definition that ran.
    #[must_use]
    pub const fn command(&self) -> CommandId {
        self.command
    }

    /// Returns the matched path.
    #[must_use]
    pub const fn path(&self) -> &CommandPath {
        &self.path
    }

    /// Returns the effect for the caller to apply.
    #[must_use]
    pub const fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Consumes the outcome, returning the effect.
    #[must_use]
    pub fn into_effect(self) -> Effect {
        self.effect
    }

    /// Returns when the dispatch completed.
    #[must_use]
    pub const fn dispatched_at(&self) -> DateTime<Utc> {
        self.dispatched_at
    }
}
