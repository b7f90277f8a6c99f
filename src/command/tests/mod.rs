//! Unit tests for the command subsystem.
//!
//! Tests are organised by concern: domain values, overload ordering and
//! resolution, the reference adapters, and the dispatcher pipeline.

mod fixtures;
