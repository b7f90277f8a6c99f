//! Type-directed conversion of return values into effects.
//!
//! A command declares its return type once, at registration. The
//! [`services::ResponseHandlerChain`] walks its factories in registration
//! order and the first factory that accepts the declared type supplies the
//! handler. Registries resolve and cache that handler when they freeze, so
//! the walk never repeats per dispatch.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The chain itself in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
