//! Port definitions for response handling.

pub mod handler;
