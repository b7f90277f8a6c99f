//! Adapter implementations for the command subsystem.
//!
//! - [`tokenizer::QuotedTokenizer`] splits input with quote and escape support
//! - [`resolver::BuiltinParameterResolver`] binds the built-in parameter types
//! - [`manifest::CommandManifest`] loads definitions from JSON

pub mod manifest;
pub mod resolver;
pub mod tokenizer;

pub use manifest::{CommandEntry, CommandManifest, HandlerTable, ManifestError, ParameterEntry};
pub use resolver::BuiltinParameterResolver;
pub use tokenizer::QuotedTokenizer;
