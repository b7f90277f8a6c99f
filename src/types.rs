//! Declared type identifiers and the closed is-a table.
//!
//! Commands declare the type of each parameter and of their return value
//! with a [`TypeKey`]. Supertype matching (used by subtype-permissive
//! response handlers) is answered by an explicit [`TypeHierarchy`] built at
//! registration time instead of runtime type introspection.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use thiserror::Error;

/// Maximum length of a type identifier.
const MAX_TYPE_KEY_LENGTH: usize = 64;

/// Errors returned while building type identifiers or the hierarchy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// The type key is empty after trimming.
    #[error("type key must not be empty")]
    EmptyTypeKey,

    /// The type key contains characters outside `[a-z0-9_.:-]`.
    #[error("type key '{0}' contains invalid characters")]
    InvalidTypeKey(String),

    /// The type key exceeds the length limit.
    #[error("type key exceeds 64 character limit: {0}")]
    TypeKeyTooLong(String),

    /// Declaring the edge would make the hierarchy cyclic.
    #[error("declaring '{subtype}' as a subtype of '{supertype}' creates a cycle")]
    HierarchyCycle {
        /// Requested subtype.
        subtype: TypeKey,
        /// Requested supertype.
        supertype: TypeKey,
    },
}

/// Identifier of a declared type.
///
/// Keys are lowercase and limited to ASCII alphanumerics plus `_`, `.`, `:`
/// and `-`, so `integer`, `user.profile` and `geo:point` are all valid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeKey(Cow<'static, str>);

impl TypeKey {
    /// Top type every built-in is assignable to.
    pub const ANY: Self = Self(Cow::Borrowed("any"));
    /// Absence of a value.
    pub const UNIT: Self = Self(Cow::Borrowed("unit"));
    /// `true` or `false`.
    pub const BOOLEAN: Self = Self(Cow::Borrowed("boolean"));
    /// Any JSON number.
    pub const NUMBER: Self = Self(Cow::Borrowed("number"));
    /// Signed 64-bit integer, a subtype of [`Self::NUMBER`].
    pub const INTEGER: Self = Self(Cow::Borrowed("integer"));
    /// A single string token.
    pub const STRING: Self = Self(Cow::Borrowed("string"));
    /// Free text spanning the rest of the input, a subtype of [`Self::STRING`].
    pub const TEXT: Self = Self(Cow::Borrowed("text"));
    /// Ordered sequence of values.
    pub const LIST: Self = Self(Cow::Borrowed("list"));
    /// Key/value structure.
    pub const OBJECT: Self = Self(Cow::Borrowed("object"));

    /// Creates a validated type key.
    ///
    /// The input is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::EmptyTypeKey`], [`TypeError::TypeKeyTooLong`] or
    /// [`TypeError::InvalidTypeKey`] when the value is not a valid key.
    pub fn new(value: impl Into<String>) -> Result<Self, TypeError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(TypeError::EmptyTypeKey);
        }
        if normalized.len() > MAX_TYPE_KEY_LENGTH {
            return Err(TypeError::TypeKeyTooLong(raw));
        }
        let is_valid = normalized.chars().all(|character| {
            character.is_ascii_lowercase()
                || character.is_ascii_digit()
                || matches!(character, '_' | '.' | ':' | '-')
        });
        if !is_valid {
            return Err(TypeError::InvalidTypeKey(raw));
        }

        Ok(Self(Cow::Owned(normalized)))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TypeKey {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeKey> for String {
    fn from(value: TypeKey) -> Self {
        value.0.into_owned()
    }
}

impl AsRef<str> for TypeKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed is-a relation between declared types.
///
/// Assignability is reflexive and transitive. Edges are only added through
/// [`TypeHierarchy::declare`], which refuses cycles, so the relation is
/// always a partial order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeHierarchy {
    supertypes: BTreeMap<TypeKey, BTreeSet<TypeKey>>,
}

impl TypeHierarchy {
    /// Creates a hierarchy with no edges; every type is only assignable to
    /// itself.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the hierarchy of built-in types.
    ///
    /// `integer` is a `number`, `text` is a `string`, and every built-in is
    /// an `any`.
    #[must_use]
    pub fn standard() -> Self {
        let mut supertypes: BTreeMap<TypeKey, BTreeSet<TypeKey>> = BTreeMap::new();
        let mut edge = |subtype: TypeKey, supertype: TypeKey| {
            supertypes.entry(subtype).or_default().insert(supertype);
        };
        edge(TypeKey::INTEGER, TypeKey::NUMBER);
        edge(TypeKey::TEXT, TypeKey::STRING);
        for key in [
            TypeKey::UNIT,
            TypeKey::BOOLEAN,
            TypeKey::NUMBER,
            TypeKey::STRING,
            TypeKey::LIST,
            TypeKey::OBJECT,
        ] {
            edge(key, TypeKey::ANY);
        }
        Self { supertypes }
    }

    /// Declares `subtype` as a direct subtype of `supertype`.
    ///
    /// Redeclaring an existing edge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::HierarchyCycle`] when `supertype` is already
    /// assignable to `subtype` (including when both are the same key).
    pub fn declare(&mut self, subtype: TypeKey, supertype: TypeKey) -> Result<(), TypeError> {
        if self.is_assignable(&supertype, &subtype) {
            return Err(TypeError::HierarchyCycle {
                subtype,
                supertype,
            });
        }
        self.supertypes
            .entry(subtype)
            .or_default()
            .insert(supertype);
        Ok(())
    }

    /// Returns whether a value declared as `subtype` may be treated as
    /// `supertype`.
    #[must_use]
    pub fn is_assignable(&self, subtype: &TypeKey, supertype: &TypeKey) -> bool {
        if subtype == supertype {
            return true;
        }
        let mut pending = vec![subtype];
        let mut visited = BTreeSet::new();
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(parents) = self.supertypes.get(current) else {
                continue;
            };
            if parents.contains(supertype) {
                return true;
            }
            pending.extend(parents.iter());
        }
        false
    }
}
