//! Listquery - fluent, staged queries over in-memory slices.
//!
//! Listquery filters, orders, deduplicates, limits, pages and projects a
//! borrowed slice through chained method calls:
//!
//! - `filter` once, then refine with `and` / `or` (strictly left to right)
//! - `ordered()` for natural order, or `order_by` / `order_by_key` for a
//!   comparator over the result type
//! - `distinct()` and `limit(n)`, any number of times
//! - a terminal `select*` call, the only place the source is read
//!
//! # Quick Start
//!
//! ```rust
//! use listquery::{from, Paging};
//!
//! let items = vec![1, 2, 3, 4, 5];
//!
//! assert_eq!(from(&items).filter(|e| *e > 2).select(), vec![&3, &4, &5]);
//! assert_eq!(from(&items).filter(|e| *e < 2).or(|e| *e > 4).select(), vec![&1, &5]);
//! assert_eq!(from(&items).distinct().select_map(|e| e / 2), vec![0, 1, 2]);
//!
//! let second_page = Paging::page(2).each_containing(2)?;
//! assert_eq!(from(&items).select_paged(second_page), vec![&3, &4]);
//!
//! let shifted = from(&items)
//!     .order_by_key(|e: &i32| *e)
//!     .select_map_paged(|e| e + 1, second_page);
//! assert_eq!(shifted, vec![4, 5]);
//! # Ok::<(), listquery::QueryError>(())
//! ```
//!
//! # Evaluation Order
//!
//! Every select runs the same stages, in this order:
//!
//! ```text
//! filter -> cap (limit) -> project (mapper) -> distinct -> page -> sort
//! ```
//!
//! Limits count filtered source elements, `distinct` compares projected
//! values, and pages are cut *before* sorting. Ordered, paged queries
//! therefore sort the page, they do not page the sorted result.
//!
//! # Stages
//!
//! The calls available next depend on the query's [stage](stage). Illegal
//! chains such as `filter(..).filter(..)`, `ordered().ordered()` or a plain
//! `select()` after `order_by` do not compile.

mod error;
pub mod just;
mod ordering;
mod paging;
mod pipeline;
mod predicate;
mod query;
pub mod stage;
mod typed;

// Re-export public API
pub use error::{QueryError, Result};
pub use ordering::{Comparator, Dir};
pub use paging::{OngoingPaging, Paging};
pub use predicate::Predicate;
pub use query::{from, ListQuery};
pub use typed::TypedListQuery;
