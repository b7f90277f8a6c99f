//! Response handler factory keyed by a declared type.

use std::fmt;
use std::sync::Arc;

use crate::response::ports::handler::{ResponseHandler, ResponseHandlerFactory};
use crate::types::{TypeHierarchy, TypeKey};

/// Offers one handler for a declared type and, optionally, its subtypes.
///
/// With `allow_subtypes`, any return type the hierarchy makes assignable to
/// `type_key` matches, so a permissive factory for a broad type shadows
/// every more specific factory registered after it.
#[derive(Clone)]
pub struct TypeResponseHandlerFactory {
    type_key: TypeKey,
    allow_subtypes: bool,
    handler: Arc<dyn ResponseHandler>,
}

impl TypeResponseHandlerFactory {
    /// Creates a factory for `type_key`.
    #[must_use]
    pub fn new(type_key: TypeKey, allow_subtypes: bool, handler: Arc<dyn ResponseHandler>) -> Self {
        Self {
            type_key,
            allow_subtypes,
            handler,
        }
    }

    /// Returns the type this factory is keyed by.
    #[must_use]
    pub const fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    /// Returns whether subtypes of the key also match.
    #[must_use]
    pub const fn allows_subtypes(&self) -> bool {
        self.allow_subtypes
    }
}

impl ResponseHandlerFactory for TypeResponseHandlerFactory {
    fn create(&self, declared: &TypeKey, hierarchy: &TypeHierarchy) -> Option<Arc<dyn ResponseHandler>> {
        let matches = if self.allow_subtypes {
            hierarchy.is_assignable(declared, &self.type_key)
        } else {
            *declared == self.type_key
        };
        matches.then(|| Arc::clone(&self.handler))
    }
}

impl fmt::Debug for TypeResponseHandlerFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeResponseHandlerFactory")
            .field("type_key", &self.type_key)
            .field("allow_subtypes", &self.allow_subtypes)
            .finish_non_exhaustive()
    }
}
