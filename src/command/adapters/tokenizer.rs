//! Whitespace tokenizer with quoting and escapes.

use crate::command::ports::tokenizer::{TokenizeError, Tokenizer};

/// Splits input on whitespace, honouring quotes and backslash escapes.
///
/// `ban "Mallory Smith" 3` yields `ban`, `Mallory Smith` and `3`. Single and
/// double quotes are interchangeable; inside quotes a backslash escapes the
/// next character, outside quotes it escapes the next character too, so
/// `a\ b` is one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedTokenizer;

impl QuotedTokenizer {
    /// Creates a tokenizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Tokenizer for QuotedTokenizer {
    fn tokenize(&self, input: &str) -> Result<Vec<String>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut in_token = false;
        let mut in_quotes: Option<char> = None;
        let mut escaped = false;

        for character in input.chars() {
            if escaped {
                current.push(character);
                escaped = false;
                continue;
            }

            match (in_quotes, character) {
                (_, '\\') => {
                    escaped = true;
                    in_token = true;
                }
                (Some(quote_char), _) if character == quote_char => in_quotes = None,
                (Some(_), _) => current.push(character),
                (None, '"' | '\'') => {
                    in_quotes = Some(character);
                    in_token = true;
                }
                (None, _) if character.is_whitespace() => {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                (None, _) => {
                    current.push(character);
                    in_token = true;
                }
            }
        }

        if escaped {
            return Err(TokenizeError::DanglingEscape);
        }
        if in_quotes.is_some() {
            return Err(TokenizeError::UnterminatedQuote);
        }
        if in_token {
            tokens.push(current);
        }

        Ok(tokens)
    }
}
