//! Tokenizer port.
//!
//! Splitting raw input into tokens is a collaborator concern; the dispatcher
//! only consumes the resulting token list.

use thiserror::Error;

/// Port for splitting raw command input into tokens.
pub trait Tokenizer: Send + Sync {
    /// Splits `input` into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError`] when the input is malformed.
    fn tokenize(&self, input: &str) -> Result<Vec<String>, TokenizeError>;
}

/// Errors for tokenizing raw input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenizeError {
    /// A quoted string was not terminated.
    #[error("unterminated quoted value in command input")]
    UnterminatedQuote,

    /// The input ends with an escape character.
    #[error("command input ends with a dangling escape")]
    DanglingEscape,
}
