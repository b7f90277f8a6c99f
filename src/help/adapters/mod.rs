//! Adapter implementations for help output.

pub mod text;

pub use text::{HelpPageRenderer, HelpRenderError};
