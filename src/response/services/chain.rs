//! The ordered response handler chain.
//!
//! Factories are consulted in registration order and the first one that
//! offers a handler wins, so registration order is the priority order.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::response::adapters::{TypeResponseHandlerFactory, defaults};
use crate::response::domain::{ConversionError, Effect, UnhandledReturnType};
use crate::response::ports::handler::{ResponseHandler, ResponseHandlerFactory};
use crate::types::{TypeHierarchy, TypeKey};

/// Mutable, setup-phase view of the chain.
#[derive(Default)]
pub struct ResponseHandlerChainBuilder {
    factories: Vec<Arc<dyn ResponseHandlerFactory>>,
}

impl ResponseHandlerChainBuilder {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a chain holding the built-in handlers from
    /// [`defaults::install`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut chain = Self::new();
        defaults::install(&mut chain);
        chain
    }

    /// Appends a factory for `type_key` backed by a closure or function.
    pub fn register<F>(&mut self, type_key: TypeKey, allow_subtypes: bool, handler: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Effect, ConversionError> + Send + Sync + 'static,
    {
        self.register_shared(type_key, allow_subtypes, Arc::new(handler))
    }

    /// Appends a factory for `type_key` backed by a shared handler.
    pub fn register_shared(
        &mut self,
        type_key: TypeKey,
        allow_subtypes: bool,
        handler: Arc<dyn ResponseHandler>,
    ) -> &mut Self {
        self.register_factory(TypeResponseHandlerFactory::new(type_key, allow_subtypes, handler))
    }

    /// Appends a custom factory.
    pub fn register_factory(&mut self, factory: impl ResponseHandlerFactory + 'static) -> &mut Self {
        self.factories.push(Arc::new(factory));
        self
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns whether no factory is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Freezes the chain against `hierarchy`.
    #[must_use]
    pub fn build(self, hierarchy: TypeHierarchy) -> ResponseHandlerChain {
        ResponseHandlerChain {
            factories: self.factories,
            hierarchy,
        }
    }
}

impl fmt::Debug for ResponseHandlerChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseHandlerChainBuilder")
            .field("factories", &self.factories.len())
            .finish()
    }
}

/// Frozen, read-only chain of response handler factories.
pub struct ResponseHandlerChain {
    factories: Vec<Arc<dyn ResponseHandlerFactory>>,
    hierarchy: TypeHierarchy,
}

impl ResponseHandlerChain {
    /// Finds the handler for values declared as `return_type`.
    ///
    /// The result depends only on `return_type` and the registered
    /// factories, never on a runtime value.
    ///
    /// # Errors
    ///
    /// Returns [`UnhandledReturnType`] when no factory matches.
    pub fn lookup(&self, return_type: &TypeKey) -> Result<Arc<dyn ResponseHandler>, UnhandledReturnType> {
        self.factories
            .iter()
            .find_map(|factory| factory.create(return_type, &self.hierarchy))
            .ok_or_else(|| UnhandledReturnType {
                return_type: return_type.clone(),
            })
    }

    /// Returns the type hierarchy the chain matches against.
    #[must_use]
    pub const fn hierarchy(&self) -> &TypeHierarchy {
        &self.hierarchy
    }

    /// Returns the number of factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns whether the chain has no factories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for ResponseHandlerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseHandlerChain")
            .field("factories", &self.factories.len())
            .field("hierarchy", &self.hierarchy)
            .finish()
    }
}
