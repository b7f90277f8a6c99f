//! Unit tests for paginated help listings.
