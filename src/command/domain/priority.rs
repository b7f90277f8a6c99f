//! Ordering of overloads that share a path.

use std::cmp::Ordering;

use super::{CommandDefinition, CommandId};

/// The two keys overload ordering looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateKey {
    /// Registration index, the secondary key.
    pub id: CommandId,
    /// Explicit priority, when declared.
    pub priority: Option<i64>,
}

impl CandidateKey {
    /// Creates the key of a registered definition.
    #[must_use]
    pub const fn of(id: CommandId, definition: &CommandDefinition) -> Self {
        Self {
            id,
            priority: definition.priority(),
        }
    }
}

/// Compares two definitions by explicit priority, lower first.
///
/// Returns `None` unless both declare a priority: a declared priority says
/// nothing about a definition that has none.
#[must_use]
pub fn compare_priority(left: &CommandDefinition, right: &CommandDefinition) -> Option<Ordering> {
    compare_declared(left.priority(), right.priority())
}

fn compare_declared(left: Option<i64>, right: Option<i64>) -> Option<Ordering> {
    left.zip(right).map(|(left_priority, right_priority)| left_priority.cmp(&right_priority))
}

/// Returns the order in which overloads are attempted.
///
/// Definitions with an explicit priority come first, sorted by priority and
/// then registration index; the rest follow in registration order.
#[must_use]
pub fn order_candidates(candidates: &[CandidateKey]) -> Vec<CommandId> {
    if let [only] = candidates {
        return vec![only.id];
    }

    let (mut declared, mut undeclared): (Vec<_>, Vec<_>) = candidates
        .iter()
        .copied()
        .partition(|candidate| candidate.priority.is_some());
    declared.sort_by(|left, right| {
        compare_declared(left.priority, right.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.id.cmp(&right.id))
    });
    undeclared.sort_by_key(|candidate| candidate.id);

    declared
        .into_iter()
        .chain(undeclared)
        .map(|candidate| candidate.id)
        .collect()
}
