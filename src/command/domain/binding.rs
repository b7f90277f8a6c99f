//! Argument streams and binding outcomes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use super::CommandId;

/// Cursor over the input tokens that follow a command path.
///
/// Cloning is cheap: the tokens are shared and only the position is copied,
/// so every overload candidate starts from its own fresh stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentStream {
    tokens: Arc<[String]>,
    position: usize,
}

impl ArgumentStream {
    /// Creates a stream over the given tokens.
    #[must_use]
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            position: 0,
        }
    }

    /// Returns the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<&str> {
        let token = self.tokens.get(self.position)?;
        self.position = self.position.saturating_add(1);
        Some(token.as_str())
    }

    /// Consumes every remaining token.
    pub fn take_rest(&mut self) -> &[String] {
        let start = self.position;
        self.position = self.tokens.len();
        self.tokens.get(start..).unwrap_or_default()
    }

    /// Returns the unconsumed tokens.
    #[must_use]
    pub fn remaining(&self) -> &[String] {
        self.tokens.get(self.position..).unwrap_or_default()
    }

    /// Returns whether every token has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

/// Result of binding one parameter.
///
/// A mismatch is an ordinary outcome that moves resolution on to the next
/// candidate, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum BindOutcome {
    /// The parameter was bound to this value.
    Bound(Value),
    /// The input does not fit the parameter.
    NoMatch(String),
}

impl BindOutcome {
    /// Creates a mismatch with the given reason.
    pub fn no_match(reason: impl Into<String>) -> Self {
        Self::NoMatch(reason.into())
    }
}

/// Why a candidate failed to bind.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindFailure {
    /// Input ran out before a required parameter.
    #[error("missing required parameter '{parameter}'")]
    Missing {
        /// Parameter name.
        parameter: String,
    },

    /// The resolver rejected the input for a parameter.
    #[error("parameter '{parameter}' rejected input: {reason}")]
    Rejected {
        /// Parameter name.
        parameter: String,
        /// Resolver-supplied reason.
        reason: String,
    },

    /// Tokens were left over after the last parameter.
    #[error("unexpected trailing input: {}", remaining.join(" "))]
    Trailing {
        /// Unconsumed tokens.
        remaining: Vec<String>,
    },
}

/// One overload that was attempted and did not bind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFailure {
    /// The attempted definition.
    pub command: CommandId,
    /// Its explicit priority, if any.
    pub priority: Option<i64>,
    /// Why binding failed.
    pub failure: BindFailure,
}
