//! Help queries over a frozen registry.

use std::sync::Arc;

use crate::command::domain::CommandPath;
use crate::command::services::{CommandRegistry, RegisteredCommand};
use crate::config::DispatchConfig;
use crate::help::domain::{
    CommandSummary, InvalidPageRequest, ListKind, PageSize, ResultList, ResultPage,
};

/// Builds help listings relative to a command path.
///
/// Entries are ordered by path and then by registration order, so overloads
/// of one path stay together in the order they were registered.
#[derive(Debug, Clone)]
pub struct HelpIndex {
    registry: Arc<CommandRegistry>,
    page_size: PageSize,
}

impl HelpIndex {
    /// Creates an index with an explicit page size.
    #[must_use]
    pub const fn new(registry: Arc<CommandRegistry>, page_size: PageSize) -> Self {
        Self {
            registry,
            page_size,
        }
    }

    /// Creates an index using the configured help page size.
    #[must_use]
    pub fn from_config(registry: Arc<CommandRegistry>, config: &DispatchConfig) -> Self {
        Self::new(registry, config.help_page_size)
    }

    /// Returns the page size used by [`HelpIndex::page`].
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Lists every command nested below `path`, at any depth.
    #[must_use]
    pub fn children(&self, path: &CommandPath) -> ResultList<CommandSummary> {
        self.collect(ListKind::Children, |candidate| candidate.is_descendant_of(path))
    }

    /// Lists the commands that share `path`'s parent, excluding `path`
    /// itself.
    ///
    /// Top-level paths are siblings of every other top-level path.
    #[must_use]
    pub fn siblings(&self, path: &CommandPath) -> ResultList<CommandSummary> {
        let parent = path.parent();
        self.collect(ListKind::Siblings, |candidate| {
            candidate != path && candidate.depth() == path.depth() && candidate.parent() == parent
        })
    }

    /// Lists the children and siblings of `path` together.
    #[must_use]
    pub fn related(&self, path: &CommandPath) -> ResultList<CommandSummary> {
        let parent = path.parent();
        self.collect(ListKind::Related, |candidate| {
            candidate.is_descendant_of(path)
                || (candidate != path
                    && candidate.depth() == path.depth()
                    && candidate.parent() == parent)
        })
    }

    /// Lists every registered command.
    #[must_use]
    pub fn all(&self) -> ResultList<CommandSummary> {
        self.collect(ListKind::All, |_| true)
    }

    /// Returns page `number` of `list` at the configured page size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPageRequest`] when `number` is outside
    /// `1..=page_count`.
    pub fn page<'a>(
        &self,
        list: &'a ResultList<CommandSummary>,
        number: usize,
    ) -> Result<ResultPage<'a, CommandSummary>, InvalidPageRequest> {
        list.page(number, self.page_size)
    }

    fn collect(
        &self,
        kind: ListKind,
        include: impl Fn(&CommandPath) -> bool,
    ) -> ResultList<CommandSummary> {
        let mut matched: Vec<&RegisteredCommand> = self
            .registry
            .commands()
            .iter()
            .filter(|command| include(command.definition().path()))
            .collect();
        matched.sort_by(|left, right| {
            left.definition()
                .path()
                .cmp(right.definition().path())
                .then(left.id().cmp(&right.id()))
        });

        ResultList::new(
            kind,
            matched
                .into_iter()
                .map(|command| CommandSummary::of(command.id(), command.definition())),
        )
    }
}
