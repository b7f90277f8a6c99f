//! Corbel: a generic command-dispatch engine.
//!
//! Declarative command definitions are registered during a setup phase and
//! frozen into a read-only registry. At invocation time raw input is resolved
//! to exactly one definition, the definition runs, and its return value is
//! converted into an [`response::domain::Effect`] for the caller to apply.
//!
//! # Architecture
//!
//! Corbel follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types with no collaborator dependencies
//! - **Ports**: Trait seams for tokenizing, parameter binding, invocation,
//!   and response handling
//! - **Adapters**: Reference implementations of the ports
//! - **Services**: Registry freezing, overload resolution, and dispatch
//!
//! # Modules
//!
//! - [`types`]: Declared type identifiers and the is-a table
//! - [`command`]: Command definitions, overload resolution, and dispatch
//! - [`response`]: The response handler chain and effects
//! - [`help`]: Paginated result lists and help queries
//! - [`config`]: Dispatcher configuration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use corbel::command::domain::{CommandDefinition, ParameterSpec};
//! use corbel::command::services::{Dispatcher, RegistryBuilder};
//! use corbel::response::domain::Effect;
//! use corbel::types::TypeKey;
//! use serde_json::json;
//!
//! let mut builder = RegistryBuilder::with_default_handlers();
//! builder.register(
//!     CommandDefinition::builder("greet")
//!         .expect("valid path")
//!         .parameter(ParameterSpec::new("name", TypeKey::STRING).expect("valid parameter"))
//!         .returns(TypeKey::STRING)
//!         .build(|command| {
//!             let name = command.argument("name").and_then(|value| value.as_str());
//!             Ok(json!(format!("hello {}", name.unwrap_or_default())))
//!         }),
//! );
//! let registry = Arc::new(builder.freeze().expect("registry should freeze"));
//!
//! let dispatcher = Dispatcher::with_defaults(registry);
//! let outcome = dispatcher.dispatch("greet world").expect("dispatch succeeds");
//! assert_eq!(outcome.effect(), &Effect::Reply("hello world".to_owned()));
//! ```

pub mod command;
pub mod config;
pub mod help;
pub mod response;
pub mod types;
