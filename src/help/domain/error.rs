//! Error types for paginated access.

use thiserror::Error;

/// A page number outside `1..=page_count` was requested.
///
/// Carries everything a front end needs to render a "page 3 of 2" style
/// message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("page {page} is out of range for page size {page_size} ({page_count} pages available)")]
pub struct InvalidPageRequest {
    /// Requested 1-based page number.
    pub page: usize,
    /// Requested page size.
    pub page_size: usize,
    /// Number of pages available for that size.
    pub page_count: usize,
}
