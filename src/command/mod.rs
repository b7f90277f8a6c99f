//! Command definitions, overload resolution, and dispatch.
//!
//! Definitions are collected on a [`services::RegistryBuilder`] and frozen
//! into a read-only [`services::CommandRegistry`]. Overloads sharing a path
//! are attempted in a fixed order: explicit priorities first (lower wins,
//! registration order breaks ties), then undeclared definitions in
//! registration order. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Registration, resolution and dispatch in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
