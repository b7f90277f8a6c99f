//! Service layer for command registration, resolution, and dispatch.

mod dispatcher;
mod registry;
mod resolution;

pub use dispatcher::{DispatchResult, Dispatcher};
pub use registry::{CommandRegistry, RegisteredCommand, RegistryBuilder};
pub use resolution::resolve_overload;
