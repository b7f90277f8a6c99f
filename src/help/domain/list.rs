//! Frozen result lists and their page views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::slice;
use std::sync::Arc;

use super::InvalidPageRequest;

/// Number of entries per page.
///
/// A page size of zero is unrepresentable: [`PageSize::new`] returns `None`
/// for it and deserialisation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Seven entries per page.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(6));

    /// Creates a page size, returning `None` for zero.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Returns the page size as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroUsize> for PageSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic label of a result list.
///
/// All kinds behave identically; the label only tells the caller what the
/// entries are relative to, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Children and siblings of a command.
    Related,
    /// Commands nested below a path.
    Children,
    /// Commands sharing the parent path.
    Siblings,
    /// Every registered command.
    All,
}

impl ListKind {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Related => "related",
            Self::Children => "children",
            Self::Siblings => "siblings",
            Self::All => "all",
        }
    }
}

/// An immutable, ordered result sequence with windowed access.
///
/// The entries are frozen when the list is created; pages borrow from the
/// same backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultList<T> {
    kind: ListKind,
    items: Arc<[T]>,
}

impl<T> ResultList<T> {
    /// Creates a list from the given entries, preserving their order.
    #[must_use]
    pub fn new(kind: ListKind, items: impl IntoIterator<Item = T>) -> Self {
        Self {
            kind,
            items: items.into_iter().collect(),
        }
    }

    /// Returns the semantic label of the list.
    #[must_use]
    pub const fn kind(&self) -> ListKind {
        self.kind
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns every entry.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over every entry.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the number of pages for `size`; zero for an empty list.
    #[must_use]
    pub fn page_count(&self, size: PageSize) -> usize {
        self.items.len().div_ceil(size.get())
    }

    /// Returns page `number` (1-based) for `size`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPageRequest`] when `number` is zero or greater than
    /// [`ResultList::page_count`]. An empty list rejects every page.
    pub fn page(&self, number: usize, size: PageSize) -> Result<ResultPage<'_, T>, InvalidPageRequest> {
        let page_count = self.page_count(size);
        let rejection = InvalidPageRequest {
            page: number,
            page_size: size.get(),
            page_count,
        };
        if number == 0 || number > page_count {
            return Err(rejection);
        }

        let start = (number - 1).saturating_mul(size.get());
        let end = number.saturating_mul(size.get()).min(self.items.len());
        let items = self.items.get(start..end).ok_or(rejection)?;
        Ok(ResultPage {
            number,
            page_count,
            page_size: size,
            items,
        })
    }

    /// Returns every page for `size`, in order.
    pub fn pages(&self, size: PageSize) -> impl Iterator<Item = ResultPage<'_, T>> {
        let page_count = self.page_count(size);
        self.items
            .chunks(size.get())
            .zip(1..)
            .map(move |(items, number)| ResultPage {
                number,
                page_count,
                page_size: size,
                items,
            })
    }
}

impl<'a, T> IntoIterator for &'a ResultList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only window over a [`ResultList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultPage<'a, T> {
    number: usize,
    page_count: usize,
    page_size: PageSize,
    items: &'a [T],
}

impl<'a, T> ResultPage<'a, T> {
    /// Returns the 1-based page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the total number of pages of the backing list.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the page size the window was cut with.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the entries on this page.
    #[must_use]
    pub const fn items(&self) -> &'a [T] {
        self.items
    }

    /// Returns whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.page_count
    }

    /// Returns whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Returns an iterator over the entries on this page.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.items.iter()
    }
}
