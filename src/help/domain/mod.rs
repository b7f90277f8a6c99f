//! Domain model for paginated help listings.
//!
//! [`ResultList`] is the single list type behind related, child and sibling
//! listings; [`ListKind`] carries the label.

mod error;
mod list;
mod summary;

pub use error::InvalidPageRequest;
pub use list::{ListKind, PageSize, ResultList, ResultPage};
pub use summary::CommandSummary;
