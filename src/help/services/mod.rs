//! Help query services.

mod help;

pub use help::HelpIndex;
