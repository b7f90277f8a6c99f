//! Command registration and the frozen registry.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::command::domain::{
    CandidateKey, CommandDefinition, CommandId, CommandPath, RegistryError, order_candidates,
};
use crate::response::domain::{ConversionError, Effect};
use crate::response::ports::handler::{ResponseHandler, ResponseHandlerFactory};
use crate::response::services::{ResponseHandlerChain, ResponseHandlerChainBuilder};
use crate::types::{TypeHierarchy, TypeKey};

/// Setup-phase collector of definitions, subtypes and response handlers.
///
/// Registration is single-threaded by construction: the builder is an
/// ordinary owned value and [`RegistryBuilder::freeze`] consumes it, so a
/// frozen registry can never observe a late registration.
pub struct RegistryBuilder {
    definitions: Vec<CommandDefinition>,
    hierarchy: TypeHierarchy,
    responses: ResponseHandlerChainBuilder,
}

impl RegistryBuilder {
    /// Creates a builder with the standard type hierarchy and no response
    /// handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            hierarchy: TypeHierarchy::standard(),
            responses: ResponseHandlerChainBuilder::new(),
        }
    }

    /// Creates a builder whose response chain starts with the built-in
    /// handlers for `unit`, `string`, `list` and `any`.
    ///
    /// Handlers registered later are consulted after the built-ins, so they
    /// only see types the built-ins decline.
    #[must_use]
    pub fn with_default_handlers() -> Self {
        Self {
            responses: ResponseHandlerChainBuilder::with_defaults(),
            ..Self::new()
        }
    }

    /// Creates a builder around an existing response chain.
    #[must_use]
    pub fn with_response_chain(responses: ResponseHandlerChainBuilder) -> Self {
        Self {
            responses,
            ..Self::new()
        }
    }

    /// Registers a definition and returns its identifier.
    ///
    /// Identifiers follow registration order; overloads with equal or no
    /// priority are attempted in that order.
    pub fn register(&mut self, definition: CommandDefinition) -> CommandId {
        let id = CommandId::new(self.definitions.len());
        debug!(command = %id, path = %definition.path(), "registered command definition");
        self.definitions.push(definition);
        id
    }

    /// Registers several definitions in iteration order.
    pub fn register_all(&mut self, definitions: impl IntoIterator<Item = CommandDefinition>) -> Vec<CommandId> {
        definitions
            .into_iter()
            .map(|definition| self.register(definition))
            .collect()
    }

    /// Declares `subtype` is-a `supertype`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Hierarchy`] when the edge would introduce a
    /// cycle.
    pub fn declare_subtype(&mut self, subtype: TypeKey, supertype: TypeKey) -> Result<&mut Self, RegistryError> {
        self.hierarchy.declare(subtype, supertype)?;
        Ok(self)
    }

    /// Appends a response handler for `type_key` to the chain.
    pub fn register_response_handler<F>(&mut self, type_key: TypeKey, allow_subtypes: bool, handler: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Effect, ConversionError> + Send + Sync + 'static,
    {
        self.responses.register(type_key, allow_subtypes, handler);
        self
    }

    /// Appends a shared response handler for `type_key` to the chain.
    pub fn register_response_handler_shared(
        &mut self,
        type_key: TypeKey,
        allow_subtypes: bool,
        handler: Arc<dyn ResponseHandler>,
    ) -> &mut Self {
        self.responses.register_shared(type_key, allow_subtypes, handler);
        self
    }

    /// Appends a custom response handler factory to the chain.
    pub fn register_response_handler_factory(&mut self, factory: impl ResponseHandlerFactory + 'static) -> &mut Self {
        self.responses.register_factory(factory);
        self
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns whether no definition is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Validates every definition and freezes the registry.
    ///
    /// Each definition's response handler is resolved here, once, so an
    /// unhandled return type surfaces before any dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidDefinition`] for a malformed
    /// parameter list, or [`RegistryError::UnhandledReturnType`] when no
    /// response handler factory accepts a declared return type.
    pub fn freeze(self) -> Result<CommandRegistry, RegistryError> {
        let responses = self.responses.build(self.hierarchy);

        let commands = self
            .definitions
            .into_iter()
            .enumerate()
            .map(|(index, definition)| {
                let id = CommandId::new(index);
                definition.validate_schema()?;
                let handler = responses.lookup(definition.return_type()).map_err(|error| {
                    RegistryError::UnhandledReturnType {
                        command: id,
                        path: definition.path().clone(),
                        return_type: error.return_type,
                    }
                })?;
                Ok(RegisteredCommand {
                    id,
                    definition,
                    handler,
                })
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        let mut grouped: HashMap<CommandPath, Vec<CandidateKey>> = HashMap::new();
        for command in &commands {
            grouped
                .entry(command.definition.path().clone())
                .or_default()
                .push(CandidateKey::of(command.id, &command.definition));
        }
        let max_depth = grouped.keys().map(CommandPath::depth).max().unwrap_or(0);
        let paths: HashMap<_, _> = grouped
            .into_iter()
            .map(|(path, keys)| (path, order_candidates(&keys)))
            .collect();

        info!(
            commands = commands.len(),
            paths = paths.len(),
            response_factories = responses.len(),
            "command registry frozen"
        );

        Ok(CommandRegistry {
            commands,
            paths,
            max_depth,
            responses,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("definitions", &self.definitions.len())
            .field("hierarchy", &self.hierarchy)
            .field("responses", &self.responses)
            .finish()
    }
}

/// A frozen definition paired with its cached response handler.
#[derive(Clone)]
pub struct RegisteredCommand {
    id: CommandId,
    definition: CommandDefinition,
    handler: Arc<dyn ResponseHandler>,
}

impl RegisteredCommand {
    /// Returns the registration identifier.
    #[must_use]
    pub const fn id(&self) -> CommandId {
        self.id
    }

    /// Returns the definition.
    #[must_use]
    pub const fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Returns the response handler chosen for the declared return type.
    #[must_use]
    pub fn handler(&self) -> &dyn ResponseHandler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("id", &self.id)
            .field("definition", &self.definition)
            .finish_non_exhaustive()
    }
}

/// Read-only registry of frozen command definitions.
///
/// Safe to share across threads behind an [`Arc`]; nothing in it changes
/// after [`RegistryBuilder::freeze`].
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
    paths: HashMap<CommandPath, Vec<CommandId>>,
    max_depth: usize,
    responses: ResponseHandlerChain,
}

impl CommandRegistry {
    /// Returns the command registered under `id`.
    #[must_use]
    pub fn get(&self, id: CommandId) -> Option<&RegisteredCommand> {
        self.commands.get(id.index())
    }

    /// Returns the overloads of `path` in attempt order.
    ///
    /// Unknown paths yield an empty slice.
    #[must_use]
    pub fn candidates(&self, path: &CommandPath) -> &[CommandId] {
        self.paths.get(path).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns every registered command in registration order.
    #[must_use]
    pub fn commands(&self) -> &[RegisteredCommand] {
        &self.commands
    }

    /// Returns every distinct registered path, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<&CommandPath> {
        let mut paths: Vec<_> = self.paths.keys().collect();
        paths.sort();
        paths
    }

    /// Returns whether any definition is registered under `path`.
    #[must_use]
    pub fn contains_path(&self, path: &CommandPath) -> bool {
        self.paths.contains_key(path)
    }

    /// Finds the longest registered path that prefixes `tokens`.
    ///
    /// Returns the path and the number of tokens it spans. With `fold_case`
    /// the tokens are lowercased before comparison; otherwise they must
    /// already match the stored lowercase segments.
    #[must_use]
    pub fn match_path(&self, tokens: &[String], fold_case: bool) -> Option<(&CommandPath, usize)> {
        let longest = tokens.len().min(self.max_depth);
        (1..=longest).rev().find_map(|depth| {
            let prefix = tokens.get(..depth)?;
            let key = CommandPath::lookup_key(prefix, fold_case);
            self.paths
                .get_key_value(&key)
                .map(|(path, _)| (path, depth))
        })
    }

    /// Returns the frozen response handler chain.
    #[must_use]
    pub const fn response_handlers(&self) -> &ResponseHandlerChain {
        &self.responses
    }

    /// Returns the number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.len())
            .field("paths", &self.paths.len())
            .field("max_depth", &self.max_depth)
            .field("responses", &self.responses)
            .finish()
    }
}
