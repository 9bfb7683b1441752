//! Error types for the listquery crate.

use thiserror::Error;

/// Errors that can occur when building a query.
///
/// Evaluating a query never fails on its own; panics raised by caller-supplied
/// predicates, mappers or comparators propagate unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Pages are counted from 1.
    #[error("invalid page {page}: pages are counted from 1")]
    InvalidPage { page: usize },

    /// A page must hold at least one element.
    #[error("invalid page size {per_page}: a page must hold at least one element")]
    InvalidPageSize { per_page: usize },
}

/// Result type for listquery operations.
pub type Result<T> = std::result::Result<T, QueryError>;
