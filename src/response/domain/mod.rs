//! Domain types for response handling.

mod effect;
mod error;

pub use effect::Effect;
pub use error::{ConversionError, UnhandledReturnType};
