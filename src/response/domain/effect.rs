//! Caller-visible effects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Abstract output of handling a command's return value.
///
/// The engine never applies an effect; hosts decide what a reply or a status
/// means for their medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Effect {
    /// Nothing to show.
    None,
    /// A single message.
    Reply(String),
    /// Several messages in order.
    Lines(Vec<String>),
    /// Structured data for machine consumers.
    Structured(Value),
    /// An exit or status code.
    Status(i32),
    /// Several effects applied in order.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Returns whether applying the effect does nothing.
    #[must_use]
    pub fn is_none(&self) -> bool {
        match self {
            Self::None => true,
            Self::Batch(effects) => effects.iter().all(Self::is_none),
            Self::Reply(_) | Self::Lines(_) | Self::Structured(_) | Self::Status(_) => false,
        }
    }
}
