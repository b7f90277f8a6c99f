//! Paginated help listings.
//!
//! A [`domain::ResultList`] freezes an ordered sequence of entries and hands
//! out bounds-checked pages of it. [`services::HelpIndex`] builds the
//! related, child and sibling listings for a command path from a frozen
//! registry, and [`adapters::HelpPageRenderer`] turns a page into an
//! [`crate::response::domain::Effect`].
//!
//! - Domain types in [`domain`]
//! - Text rendering in [`adapters`]
//! - Registry queries in [`services`]

pub mod adapters;
pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
