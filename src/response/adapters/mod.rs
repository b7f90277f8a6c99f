//! Response handler adapters.

pub mod defaults;
pub mod template;
pub mod type_factory;

pub use template::{TemplateCompileError, TemplateResponseHandler};
pub use type_factory::TypeResponseHandlerFactory;
