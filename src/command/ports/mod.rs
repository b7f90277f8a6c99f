//! Port definitions for the command subsystem.

pub mod invocable;
pub mod resolver;
pub mod tokenizer;
