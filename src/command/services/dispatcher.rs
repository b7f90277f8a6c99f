//! End-to-end dispatch: tokenize, match, resolve, invoke, convert.

use mockable::{Clock, DefaultClock};
use std::ptr;
use std::sync::Arc;
use tracing::{debug, warn};

use super::registry::{CommandRegistry, RegisteredCommand};
use super::resolution::resolve_overload;
use crate::command::adapters::{BuiltinParameterResolver, QuotedTokenizer};
use crate::command::domain::{
    ArgumentStream, DispatchError, DispatchOutcome, ResolvedCommand,
};
use crate::command::ports::resolver::ParameterResolver;
use crate::command::ports::tokenizer::Tokenizer;
use crate::config::DispatchConfig;
use crate::response::ports::handler::ResponseHandler;

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Turns raw input into effects against a frozen registry.
///
/// The dispatcher only reads the registry, so one registry can back any
/// number of dispatchers on any number of threads.
pub struct Dispatcher<T = QuotedTokenizer, P = BuiltinParameterResolver, C = DefaultClock>
where
    T: Tokenizer,
    P: ParameterResolver,
    C: Clock + Send + Sync,
{
    registry: Arc<CommandRegistry>,
    tokenizer: T,
    resolver: P,
    clock: Arc<C>,
    config: DispatchConfig,
}

impl Dispatcher {
    /// Creates a dispatcher with the reference tokenizer and resolver, the
    /// system clock and the default configuration.
    #[must_use]
    pub fn with_defaults(registry: Arc<CommandRegistry>) -> Self {
        Self::with_config(registry, DispatchConfig::default())
    }

    /// Creates a dispatcher with the reference collaborators and `config`.
    #[must_use]
    pub fn with_config(registry: Arc<CommandRegistry>, config: DispatchConfig) -> Self {
        Self::new(
            registry,
            QuotedTokenizer::new(),
            BuiltinParameterResolver::new(),
            Arc::new(DefaultClock),
            config,
        )
    }
}

impl<T, P, C> Dispatcher<T, P, C>
where
    T: Tokenizer,
    P: ParameterResolver,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher from explicit collaborators.
    #[must_use]
    pub const fn new(
        registry: Arc<CommandRegistry>,
        tokenizer: T,
        resolver: P,
        clock: Arc<C>,
        config: DispatchConfig,
    ) -> Self {
        Self {
            registry,
            tokenizer,
            resolver,
            clock,
            config,
        }
    }

    /// Returns the registry this dispatcher reads.
    #[must_use]
    pub const fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Resolves and runs `input`, returning the effect to apply.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the input is empty or malformed, no
    /// path or overload matches, the command fails, or its response handler
    /// cannot convert the returned value.
    pub fn dispatch(&self, input: &str) -> DispatchResult<DispatchOutcome> {
        let (command, resolved) = self.resolve_input(input)?;
        self.run(&resolved, command.handler())
    }

    /// Resolves `input` to a definition and its bound arguments without
    /// running it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the input is empty or malformed, or
    /// no path or overload matches.
    pub fn resolve(&self, input: &str) -> DispatchResult<ResolvedCommand<'_>> {
        self.resolve_input(input).map(|(_, resolved)| resolved)
    }

    /// Runs a previously resolved command.
    ///
    /// Commands resolved through this dispatcher use the handler cached at
    /// freeze time; anything else is looked up in the response chain.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::CommandFailed`] when the command fails,
    /// [`DispatchError::HandlerConversionFailure`] when the handler rejects
    /// the value, or [`DispatchError::UnhandledReturnType`] for a foreign
    /// definition whose return type the chain does not handle.
    pub fn execute(&self, resolved: &ResolvedCommand<'_>) -> DispatchResult<DispatchOutcome> {
        match self.registry.get(resolved.id()) {
            Some(command) if ptr::eq(command.definition(), resolved.definition()) => {
                self.run(resolved, command.handler())
            }
            _ => {
                let handler = self
                    .registry
                    .response_handlers()
                    .lookup(resolved.definition().return_type())?;
                self.run(resolved, handler.as_ref())
            }
        }
    }

    fn resolve_input(&self, input: &str) -> DispatchResult<(&RegisteredCommand, ResolvedCommand<'_>)> {
        if input.trim().is_empty() {
            return Err(DispatchError::EmptyInput);
        }

        let tokens = self.tokenizer.tokenize(input)?;
        let (path, consumed) = self
            .registry
            .match_path(&tokens, self.config.case_insensitive_paths)
            .ok_or_else(|| DispatchError::UnknownCommand {
                input: tokens.join(" "),
            })?;
        let arguments = ArgumentStream::new(tokens.into_iter().skip(consumed));

        debug!(%path, arguments = arguments.remaining().len(), "resolving command");
        Ok(resolve_overload(
            &self.registry,
            path,
            &arguments,
            &self.resolver,
            self.config.reject_trailing_input,
        )?)
    }

    fn run(
        &self,
        resolved: &ResolvedCommand<'_>,
        handler: &dyn ResponseHandler,
    ) -> DispatchResult<DispatchOutcome> {
        let definition = resolved.definition();
        let value = definition.invocable().invoke(resolved).map_err(|source| {
            warn!(path = %definition.path(), error = %source, "command failed");
            DispatchError::CommandFailed {
                path: definition.path().clone(),
                source,
            }
        })?;

        let effect = handler.apply(&value).map_err(|source| {
            warn!(
                path = %definition.path(),
                return_type = %definition.return_type(),
                error = %source,
                "response handler could not convert return value"
            );
            DispatchError::HandlerConversionFailure {
                path: definition.path().clone(),
                return_type: definition.return_type().clone(),
                source,
            }
        })?;

        Ok(DispatchOutcome::new(
            resolved.id(),
            definition.path().clone(),
            effect,
            &*self.clock,
        ))
    }
}
